//! Shared helpers for unit tests.

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch process environment variables (the
/// `ETHDECK_*` overrides, `XDG_STATE_HOME`). Hold the guard for the whole
/// test body.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}
