use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::events::SessionUpdate;

/// Wallet session as the dashboard sees it.
///
/// The view is fed exclusively by [`SessionUpdate`]s from the chain worker;
/// nothing else mutates it. It remembers the last connected identity across
/// a disconnect so the shell can tell "reconnected as the same account" from
/// "switched account or chain" and only refresh the board for the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    connected: bool,
    address: Option<String>,
    chain_id: Option<u64>,
    balance: Option<String>,
    last_error: Option<String>,
    last_identity: Option<(String, u64)>,
    updated_at_unix_ms: u128,
}

impl SessionView {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            address: None,
            chain_id: None,
            balance: None,
            last_error: None,
            last_identity: None,
            updated_at_unix_ms: now_unix_ms(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn updated_at_unix_ms(&self) -> u128 {
        self.updated_at_unix_ms
    }

    /// Applies a session update. Returns `true` when the on-chain identity
    /// (account address or chain) changed, which is the cue to re-read
    /// contract state.
    pub fn apply(&mut self, update: SessionUpdate) -> bool {
        self.updated_at_unix_ms = now_unix_ms();
        match update {
            SessionUpdate::Connected {
                address,
                chain_id,
                balance,
            } => {
                let identity = (address.clone(), chain_id);
                let identity_changed = self.last_identity.as_ref() != Some(&identity);
                self.connected = true;
                self.address = Some(address);
                self.chain_id = Some(chain_id);
                self.balance = balance;
                self.last_error = None;
                self.last_identity = Some(identity);
                identity_changed
            }
            SessionUpdate::Disconnected => {
                self.connected = false;
                self.address = None;
                self.chain_id = None;
                self.balance = None;
                false
            }
            SessionUpdate::ConnectFailed { reason } => {
                self.connected = false;
                self.last_error = Some(reason);
                false
            }
            SessionUpdate::BalanceRefreshed { balance } => {
                if self.connected {
                    self.balance = Some(balance);
                }
                false
            }
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::disconnected()
    }
}

pub fn now_unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
