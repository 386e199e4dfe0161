//! Opt-in PostgreSQL access for store integration tests.
//!
//! Suites that need a real database read `USERS_TEST_DATABASE_URL`. When it
//! is unset the test prints a skip marker and returns, so the default test
//! run needs no external services.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub const TEST_DATABASE_URL_VAR: &str = "USERS_TEST_DATABASE_URL";

static DATABASE_LOCK: Mutex<()> = Mutex::new(());

/// Return the configured test database URL, or print a skip marker.
pub fn test_database_url(test_name: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_VAR) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {test_name} skipped; set {TEST_DATABASE_URL_VAR}");
            None
        }
    }
}

/// Serialise tests that share the one test database.
///
/// A test that panicked while holding the lock leaves the table in an
/// unknown state, but every test resets it first, so poisoning is ignored.
pub fn lock_database() -> MutexGuard<'static, ()> {
    DATABASE_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
