/// Where the board lives: contract address plus an optional direct RPC URL.
///
/// Both values stay optional so the dashboard can start unconfigured and
/// explain what is missing instead of refusing to launch. Reads go through
/// `rpc_url` when set, otherwise through the connected wallet's provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractEndpoint {
    address: Option<String>,
    rpc_url: Option<String>,
}

impl ContractEndpoint {
    pub fn new(address: Option<String>, rpc_url: Option<String>) -> Self {
        Self { address, rpc_url }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }

    pub fn has_rpc_url(&self) -> bool {
        self.rpc_url.is_some()
    }
}
