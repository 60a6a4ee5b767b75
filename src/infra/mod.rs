//! Infrastructure layer: adapters for config, logging, and OS integrations.

pub mod config;
pub mod contracts;
pub mod desktop;
pub mod error;
pub mod logging;
pub mod secrets;
pub mod storage_layout;
#[cfg(test)]
pub mod stubs;
pub mod tokens;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
