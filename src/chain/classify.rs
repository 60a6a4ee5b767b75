//! Maps raw provider failures onto the board error taxonomy.
//!
//! Structured variants are matched first (missing return data, JSON-RPC
//! error payloads); everything else falls back to case-insensitive substring
//! rules over the rendered message. The same revert text means different
//! things depending on when it happened: before broadcast it is a rejection,
//! after broadcast a failure, during a read it means the address is not
//! behaving like the expected contract.

use alloy::contract::Error as ContractError;
use alloy::providers::PendingTransactionError;

use crate::domain::errors::BoardError;

/// Which board operation produced the failure being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    Read,
    Submit,
    Confirm,
}

pub fn classify_contract_error(phase: CallPhase, error: &ContractError) -> BoardError {
    match error {
        ContractError::ZeroData(..) | ContractError::AbiError(_) => {
            BoardError::contract_unavailable()
        }
        ContractError::TransportError(rpc) => match rpc.as_error_resp() {
            Some(payload) => classify_text(phase, &payload.to_string()),
            None => classify_text(phase, &rpc.to_string()),
        },
        other => classify_text(phase, &other.to_string()),
    }
}

pub fn classify_pending_error(error: &PendingTransactionError) -> BoardError {
    let text = error.to_string();
    let lowered = text.to_lowercase();
    if lowered.contains("timed out") || lowered.contains("timeout") {
        return BoardError::network(
            "confirmation timed out; the transaction may still land, check the explorer",
        );
    }
    classify_text(CallPhase::Confirm, &text)
}

/// Substring-rule classifier for failures with no usable structure left.
pub fn classify_text(phase: CallPhase, text: &str) -> BoardError {
    let lowered = text.to_lowercase();

    if ["401", "403", "unauthorized", "forbidden", "invalid project id", "api key"]
        .iter()
        .any(|needle| lowered.contains(needle))
    {
        return BoardError::invalid_endpoint(summarize(text));
    }

    if lowered.contains("returned no data") || lowered.contains("could not decode") {
        return BoardError::contract_unavailable();
    }

    if lowered.contains("revert") {
        return match phase {
            CallPhase::Read => BoardError::contract_unavailable(),
            CallPhase::Submit => BoardError::rejected(summarize(text)),
            CallPhase::Confirm => BoardError::failed(summarize(text)),
        };
    }

    if phase == CallPhase::Submit
        && [
            "rejected",
            "denied",
            "insufficient funds",
            "nonce too low",
            "replacement transaction underpriced",
            "already known",
        ]
        .iter()
        .any(|needle| lowered.contains(needle))
    {
        return BoardError::rejected(summarize(text));
    }

    if [
        "timed out",
        "timeout",
        "connection",
        "connect",
        "dns",
        "network",
        "error sending request",
    ]
    .iter()
    .any(|needle| lowered.contains(needle))
    {
        return BoardError::network(summarize(text));
    }

    BoardError::unknown(text)
}

/// First line, capped, for embedding raw provider text in a banner.
fn summarize(text: &str) -> String {
    let line = text.lines().next().unwrap_or(text).trim();
    let mut out: String = line.chars().take(160).collect();
    if line.chars().count() > 160 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;

    #[test]
    fn revert_meaning_depends_on_phase() {
        let text = "server returned an error response: error code 3: execution reverted";

        assert_eq!(
            classify_text(CallPhase::Read, text).kind(),
            ErrorKind::ContractUnavailable
        );
        assert_eq!(
            classify_text(CallPhase::Submit, text).kind(),
            ErrorKind::TransactionRejected
        );
        assert_eq!(
            classify_text(CallPhase::Confirm, text).kind(),
            ErrorKind::TransactionFailed
        );
    }

    #[test]
    fn auth_failures_point_at_the_endpoint() {
        for text in [
            "HTTP error 401 Unauthorized",
            "http error: status 403 Forbidden",
            "invalid project id",
        ] {
            assert_eq!(
                classify_text(CallPhase::Read, text).kind(),
                ErrorKind::InvalidEndpoint,
                "misclassified: {text}"
            );
        }
    }

    #[test]
    fn empty_return_data_means_no_contract() {
        let text = "contract call to `message` returned no data (\"0x\"); \
                    the called address might not be a contract";
        assert_eq!(
            classify_text(CallPhase::Read, text).kind(),
            ErrorKind::ContractUnavailable
        );
    }

    #[test]
    fn user_denial_is_a_rejection_at_submit_time() {
        assert_eq!(
            classify_text(CallPhase::Submit, "user rejected the request").kind(),
            ErrorKind::TransactionRejected
        );
        assert_eq!(
            classify_text(CallPhase::Submit, "insufficient funds for gas * price + value")
                .kind(),
            ErrorKind::TransactionRejected
        );
    }

    #[test]
    fn transport_failures_are_network_errors() {
        let text =
            "error sending request for url (http://127.0.0.1:8545/): connection refused";
        assert_eq!(
            classify_text(CallPhase::Read, text).kind(),
            ErrorKind::NetworkError
        );
    }

    #[test]
    fn unrecognized_failures_pass_through_verbatim() {
        let text = "witness kzg blob mismatch at slot 42";
        let error = classify_text(CallPhase::Confirm, text);

        assert_eq!(error.kind(), ErrorKind::Unknown);
        assert_eq!(error.to_string(), text);
    }

    #[test]
    fn long_provider_text_is_truncated_in_banners() {
        let text = format!("connection reset by peer {}", "x".repeat(400));
        let error = classify_text(CallPhase::Read, &text);

        assert_eq!(error.kind(), ErrorKind::NetworkError);
        assert!(error.to_string().chars().count() < 200);
    }
}
