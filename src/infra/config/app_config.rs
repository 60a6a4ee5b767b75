use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub network: NetworkConfig,
    pub contract: ContractConfig,
    pub wallet: WalletConfig,
    pub tx: TxConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// Endpoint the dashboard talks to. Both fields are optional: without an
/// `rpc_url` the board is read-only through a connected wallet, and
/// `chain_id` is only checked against what the endpoint reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NetworkConfig {
    pub rpc_url: Option<String>,
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContractConfig {
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WalletConfig {
    pub keystore: Option<PathBuf>,
    pub private_key_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxConfig {
    pub confirmation_timeout_secs: u64,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            confirmation_timeout_secs: 180,
        }
    }
}
