/// Display metadata for the chains the dashboard knows by name.
///
/// Anything outside the table falls back to a literal "Chain ID: n" label
/// with no explorer links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    name: String,
    symbol: &'static str,
    explorer: Option<&'static str>,
}

impl NetworkInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Native currency ticker used when formatting balances.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn explorer(&self) -> Option<&'static str> {
        self.explorer
    }

    pub fn address_url(&self, address: &str) -> Option<String> {
        self.explorer
            .map(|base| format!("{base}/address/{address}"))
    }

    pub fn tx_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer.map(|base| format!("{base}/tx/{tx_hash}"))
    }
}

pub fn network_for(chain_id: u64) -> NetworkInfo {
    let (name, symbol, explorer) = match chain_id {
        1 => ("Ethereum Mainnet", "ETH", Some("https://etherscan.io")),
        11155111 => (
            "Sepolia Testnet",
            "ETH",
            Some("https://sepolia.etherscan.io"),
        ),
        137 => ("Polygon", "POL", Some("https://polygonscan.com")),
        42161 => ("Arbitrum One", "ETH", Some("https://arbiscan.io")),
        10 => ("Optimism", "ETH", Some("https://optimistic.etherscan.io")),
        8453 => ("Base", "ETH", Some("https://basescan.org")),
        other => {
            return NetworkInfo {
                name: format!("Chain ID: {other}"),
                symbol: "ETH",
                explorer: None,
            }
        }
    };
    NetworkInfo {
        name: name.to_string(),
        symbol,
        explorer,
    }
}
