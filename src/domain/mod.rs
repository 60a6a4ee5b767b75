//! Domain layer: core entities and business rules.

pub mod board;
pub mod draft;
pub mod endpoint;
pub mod errors;
pub mod events;
pub mod network;
pub mod session;
pub mod shell_state;
pub mod token;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
