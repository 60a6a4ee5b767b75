use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "ethdeck.toml";

pub const ENV_RPC_URL: &str = "ETHDECK_RPC_URL";
pub const ENV_CONTRACT_ADDRESS: &str = "ETHDECK_CONTRACT_ADDRESS";
pub const ENV_KEYSTORE: &str = "ETHDECK_KEYSTORE";
pub const ENV_LOG_LEVEL: &str = "ETHDECK_LOG";

/// Defaults, overlaid by the config file when present, overlaid by
/// environment variables. A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if config_path.exists() {
        let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;

        let file_config: FileConfig =
            toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
                path: config_path,
                source,
            })?;

        file_config.merge_into(&mut config);
    }

    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(rpc_url) = non_empty_var(ENV_RPC_URL) {
        config.network.rpc_url = Some(rpc_url);
    }

    if let Some(address) = non_empty_var(ENV_CONTRACT_ADDRESS) {
        config.contract.address = Some(address);
    }

    if let Some(keystore) = non_empty_var(ENV_KEYSTORE) {
        config.wallet.keystore = Some(PathBuf::from(keystore));
    }

    if let Some(level) = non_empty_var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
