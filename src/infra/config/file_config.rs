use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    AppConfig, ContractConfig, LogConfig, NetworkConfig, TxConfig, WalletConfig,
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub network: Option<FileNetworkConfig>,
    pub contract: Option<FileContractConfig>,
    pub wallet: Option<FileWalletConfig>,
    pub tx: Option<FileTxConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(network) = self.network {
            network.merge_into(&mut config.network);
        }

        if let Some(contract) = self.contract {
            contract.merge_into(&mut config.contract);
        }

        if let Some(wallet) = self.wallet {
            wallet.merge_into(&mut config.wallet);
        }

        if let Some(tx) = self.tx {
            tx.merge_into(&mut config.tx);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileNetworkConfig {
    pub rpc_url: Option<String>,
    pub chain_id: Option<u64>,
}

impl FileNetworkConfig {
    fn merge_into(self, config: &mut NetworkConfig) {
        if let Some(rpc_url) = self.rpc_url {
            config.rpc_url = Some(rpc_url);
        }

        if let Some(chain_id) = self.chain_id {
            config.chain_id = Some(chain_id);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileContractConfig {
    pub address: Option<String>,
}

impl FileContractConfig {
    fn merge_into(self, config: &mut ContractConfig) {
        if let Some(address) = self.address {
            config.address = Some(address);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileWalletConfig {
    pub keystore: Option<PathBuf>,
    pub private_key_env: Option<String>,
}

impl FileWalletConfig {
    fn merge_into(self, config: &mut WalletConfig) {
        if let Some(keystore) = self.keystore {
            config.keystore = Some(keystore);
        }

        if let Some(private_key_env) = self.private_key_env {
            config.private_key_env = Some(private_key_env);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTxConfig {
    pub confirmation_timeout_secs: Option<u64>,
}

impl FileTxConfig {
    fn merge_into(self, config: &mut TxConfig) {
        if let Some(timeout_secs) = self.confirmation_timeout_secs {
            config.confirmation_timeout_secs = timeout_secs;
        }
    }
}
