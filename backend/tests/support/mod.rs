//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates, so each suite declares
//! `mod support;` and uses only the helpers it needs.

#![allow(dead_code, reason = "each test crate uses a different subset")]

pub mod test_database;
pub mod users_app;
