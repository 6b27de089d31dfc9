//! API integration tests
//!
//! Integration tests for all API endpoints

mod admin_test;
mod auth_test;
