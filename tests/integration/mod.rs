//! Integration tests for projecthub-access
//!
//! These tests drive the public API against a mock HTTP backend.

pub mod client_tests;
pub mod config_tests;
pub mod session_tests;
