use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{self, error::AppError, storage_layout::StorageLayout},
    usecases::context::AppContext,
};

/// Loads config and brings up file logging. The guard flushes buffered log
/// lines on drop and must live as long as the process.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(config_path)?;

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;
    let log_guard = infra::logging::init(&context.config.logging, &layout.log_dir)?;

    Ok((context, log_guard))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    Ok(AppContext::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let _guard = env_lock();
        for var in [
            infra::config::ENV_RPC_URL,
            infra::config::ENV_CONTRACT_ADDRESS,
            infra::config::ENV_KEYSTORE,
            infra::config::ENV_LOG_LEVEL,
        ] {
            std::env::remove_var(var);
        }

        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
        assert!(!context.endpoint.has_address());
        assert!(!context.endpoint.has_rpc_url());
    }

    #[test]
    fn endpoint_mirrors_the_configured_contract() {
        let _guard = env_lock();
        std::env::set_var(
            infra::config::ENV_CONTRACT_ADDRESS,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        );

        let context = build_context(Some(Path::new("./missing-config.toml")));
        std::env::remove_var(infra::config::ENV_CONTRACT_ADDRESS);
        let context = context.expect("context should build");

        assert_eq!(
            context.endpoint.address(),
            Some("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
    }
}
