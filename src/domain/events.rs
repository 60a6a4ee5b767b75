//! Events consumed by the shell orchestrator and commands sent to the
//! chain worker.

use crate::domain::errors::BoardError;

/// Normalized key press delivered by the event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Single character ("a", "G") or a named key ("enter", "esc",
    /// "backspace", "delete", "left", "right", "home", "end").
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
        }
    }

    /// The typed character, when this press should insert text.
    pub fn as_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Everything the shell loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Poll interval elapsed with nothing to report.
    Tick,
    /// User asked to leave (Ctrl-C at the event source).
    QuitRequested,
    /// A key press to interpret according to the current input mode.
    InputKey(KeyInput),
    /// Completion or session change reported by the chain worker.
    Chain(ChainUpdate),
}

/// Work items dispatched to the chain worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainCommand {
    /// Fetch the current board message. `seq` ties the eventual result back
    /// to the request that produced it.
    ReadMessage { seq: u64 },
    /// Broadcast `setMessage(value)` and follow it to confirmation.
    SubmitMessage { value: String },
    /// Open a wallet session: build a signing provider, fetch chain id and
    /// balance.
    Connect,
    /// Drop the wallet session.
    Disconnect,
    /// Re-fetch the connected account's balance.
    RefreshBalance,
    /// Stop the worker loop.
    Shutdown,
}

/// Results flowing back from the chain worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainUpdate {
    /// Outcome of `ReadMessage { seq }`.
    MessageRead {
        seq: u64,
        result: Result<String, BoardError>,
    },
    /// The node accepted the transaction; confirmation is still pending.
    WriteAccepted { tx_hash: String },
    /// Submission failed before broadcast.
    WriteRejected { error: BoardError },
    /// Confirmation finished, successfully or not.
    WriteConfirmed {
        tx_hash: String,
        result: Result<(), BoardError>,
    },
    /// Wallet session changed.
    Session(SessionUpdate),
}

/// Wallet session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    Connected {
        /// EIP-55 checksummed account address.
        address: String,
        chain_id: u64,
        /// Pre-formatted native balance ("0.0421 ETH"), when the fetch
        /// succeeded.
        balance: Option<String>,
    },
    Disconnected,
    ConnectFailed { reason: String },
    BalanceRefreshed { balance: String },
}
