//! Integration tests
//!
//! Full router, in process, memory storage.

pub mod api;
