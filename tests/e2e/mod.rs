//! End-to-end tests
//!
//! A real listener on a loopback port, driven by `CloudPadClient`.

mod autosave_test;
