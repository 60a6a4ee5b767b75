use crate::{domain::endpoint::ContractEndpoint, infra::config::AppConfig};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub endpoint: ContractEndpoint,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let endpoint = ContractEndpoint::new(
            config.contract.address.clone(),
            config.network.rpc_url.clone(),
        );

        Self { config, endpoint }
    }
}
