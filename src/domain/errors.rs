//! Classified errors surfaced by the message-board flow.
//!
//! Raw provider/transport failures are mapped to one of these kinds at the
//! chain boundary; the rest of the application only ever sees a
//! [`BoardError`].

use std::fmt;

/// Canonical failure categories for board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Write attempted with no active wallet session.
    NotConnected,
    /// Contract address (or any usable RPC route) missing from configuration.
    NotConfigured,
    /// RPC endpoint unreachable or rejecting authentication.
    InvalidEndpoint,
    /// No contract code at the configured address (empty/malformed return data).
    ContractUnavailable,
    /// Generic connectivity failure.
    NetworkError,
    /// Signing declined or node rejected the submission pre-broadcast.
    TransactionRejected,
    /// Broadcast succeeded but confirmation reported revert/failure.
    TransactionFailed,
    /// Anything else; the original message is passed through verbatim.
    Unknown,
}

impl ErrorKind {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::NotConnected => "NOT_CONNECTED",
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::InvalidEndpoint => "INVALID_ENDPOINT",
            Self::ContractUnavailable => "CONTRACT_UNAVAILABLE",
            Self::NetworkError => "NETWORK_ERROR",
            Self::TransactionRejected => "TX_REJECTED",
            Self::TransactionFailed => "TX_FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A classified, user-presentable board error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardError {
    kind: ErrorKind,
    message: String,
}

impl BoardError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_connected() -> Self {
        Self::new(
            ErrorKind::NotConnected,
            "Wallet not connected. Connect a wallet before sending.",
        )
    }

    pub fn not_configured() -> Self {
        Self::new(
            ErrorKind::NotConfigured,
            "Contract address not set. Add [contract] address to ethdeck.toml \
             or set ETHDECK_CONTRACT_ADDRESS.",
        )
    }

    pub fn no_endpoint() -> Self {
        Self::new(
            ErrorKind::NotConfigured,
            "No RPC route available. Connect a wallet or set [network] rpc_url.",
        )
    }

    pub fn invalid_endpoint(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidEndpoint,
            format!(
                "RPC endpoint rejected the request ({}). Check [network] rpc_url.",
                detail.into()
            ),
        )
    }

    pub fn contract_unavailable() -> Self {
        Self::new(
            ErrorKind::ContractUnavailable,
            "No contract found at the configured address. Deploy MessageBoard \
             and update [contract] address.",
        )
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::NetworkError,
            format!("Network error: {}", detail.into()),
        )
    }

    pub fn rejected(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::TransactionRejected,
            format!("Transaction rejected before broadcast: {}", detail.into()),
        )
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::TransactionFailed,
            format!("Transaction failed on chain: {}", detail.into()),
        )
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BoardError {}
