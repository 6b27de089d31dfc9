//! Test suite for CloudPad
//!
//! This module organizes all tests. Everything runs against the in-memory
//! backend, so no database is needed.

#![cfg(feature = "ssr")]

pub mod common;
pub mod e2e;
pub mod integration;
