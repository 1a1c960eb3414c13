//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder defaults and explicit overrides.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and key table files.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
