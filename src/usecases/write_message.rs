//! Precondition checks for submitting a new board value.

use crate::domain::{endpoint::ContractEndpoint, errors::BoardError, session::SessionView};

/// What pressing "send" should do, decided synchronously before anything is
/// dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteDecision {
    /// Broadcast this value, exactly as typed. Whitespace is not trimmed;
    /// the contract stores whatever the user wrote.
    Submit(String),
    /// Empty draft. Sending is disabled rather than an error.
    Disabled,
    /// A precondition failed; surface the error and keep the draft.
    Blocked(BoardError),
}

pub fn plan_write(
    draft: &str,
    endpoint: &ContractEndpoint,
    session: &SessionView,
) -> WriteDecision {
    if draft.is_empty() {
        return WriteDecision::Disabled;
    }

    if !session.is_connected() {
        return WriteDecision::Blocked(BoardError::not_connected());
    }

    if !endpoint.has_address() {
        return WriteDecision::Blocked(BoardError::not_configured());
    }

    WriteDecision::Submit(draft.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{errors::ErrorKind, events::SessionUpdate};

    fn configured_endpoint() -> ContractEndpoint {
        ContractEndpoint::new(
            Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned()),
            None,
        )
    }

    fn connected_session() -> SessionView {
        let mut session = SessionView::disconnected();
        session.apply(SessionUpdate::Connected {
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_owned(),
            chain_id: 1,
            balance: None,
        });
        session
    }

    #[test]
    fn empty_draft_disables_sending_without_an_error() {
        let decision = plan_write("", &configured_endpoint(), &connected_session());

        assert_eq!(decision, WriteDecision::Disabled);
    }

    #[test]
    fn disconnected_session_blocks_before_configuration_is_checked() {
        let decision = plan_write(
            "hello",
            &ContractEndpoint::new(None, None),
            &SessionView::disconnected(),
        );

        match decision {
            WriteDecision::Blocked(error) => assert_eq!(error.kind(), ErrorKind::NotConnected),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn missing_contract_address_blocks_a_connected_session() {
        let decision = plan_write(
            "hello",
            &ContractEndpoint::new(None, None),
            &connected_session(),
        );

        match decision {
            WriteDecision::Blocked(error) => assert_eq!(error.kind(), ErrorKind::NotConfigured),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn value_is_passed_through_verbatim() {
        let decision = plan_write(
            "  padded, not trimmed  ",
            &configured_endpoint(),
            &connected_session(),
        );

        assert_eq!(
            decision,
            WriteDecision::Submit("  padded, not trimmed  ".to_owned())
        );
    }
}
