//! Precondition check for fetching the board value.

use crate::domain::{endpoint::ContractEndpoint, errors::BoardError, session::SessionView};

/// Decides whether a read can be attempted at all. Failures here surface
/// immediately; nothing is dispatched to the chain worker.
pub fn plan_read(endpoint: &ContractEndpoint, session: &SessionView) -> Result<(), BoardError> {
    if !endpoint.has_address() {
        return Err(BoardError::not_configured());
    }

    if !endpoint.has_rpc_url() && !session.is_connected() {
        return Err(BoardError::no_endpoint());
    }

    Ok(())
}
