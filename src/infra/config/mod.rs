mod app_config;
mod file_config;
mod loader;

pub use app_config::{
    AppConfig, ContractConfig, LogConfig, NetworkConfig, TxConfig, WalletConfig,
};
pub use loader::{load, ENV_CONTRACT_ADDRESS, ENV_KEYSTORE, ENV_LOG_LEVEL, ENV_RPC_URL};
