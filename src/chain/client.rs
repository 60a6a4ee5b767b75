//! Provider plumbing for the MessageBoard contract.
//!
//! Reads go through a direct RPC provider when `[network] rpc_url` is set,
//! falling back to the connected wallet's provider. Writes always require a
//! wallet session. All failures leave here already classified as
//! [`BoardError`]s.

use std::time::Duration;

use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;

use crate::chain::binding::MessageBoard;
use crate::chain::classify::{self, CallPhase};
use crate::domain::errors::BoardError;
use crate::domain::network::network_for;
use crate::infra::config::AppConfig;
use crate::infra::error::AppError;

/// Validated connection parameters, built once at startup.
#[derive(Debug, Clone)]
pub struct ChainSettings {
    pub contract: Option<Address>,
    pub rpc_url: Option<String>,
    pub expected_chain_id: Option<u64>,
    pub confirmation_timeout: Duration,
    pub signer: Option<PrivateKeySigner>,
}

impl ChainSettings {
    pub fn from_config(
        config: &AppConfig,
        signer: Option<PrivateKeySigner>,
    ) -> Result<Self, AppError> {
        let contract = match config.contract.address.as_deref() {
            Some(raw) => {
                let parsed = raw.parse::<Address>().map_err(|source| {
                    AppError::InvalidContractAddress {
                        value: raw.to_string(),
                        detail: source.to_string(),
                    }
                })?;
                Some(parsed)
            }
            None => None,
        };

        if let Some(url) = config.network.rpc_url.as_deref() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::InvalidRpcUrl {
                    value: url.to_string(),
                });
            }
        }

        Ok(Self {
            contract,
            rpc_url: config.network.rpc_url.clone(),
            expected_chain_id: config.network.chain_id,
            confirmation_timeout: Duration::from_secs(config.tx.confirmation_timeout_secs),
            signer,
        })
    }
}

/// What `connect` learned about the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub address: String,
    pub chain_id: u64,
    pub balance: Option<String>,
}

/// A transaction the node has accepted but not yet mined.
pub struct PendingWrite {
    hash: String,
    pending: PendingTransactionBuilder<Ethereum>,
}

impl PendingWrite {
    pub fn tx_hash(&self) -> &str {
        &self.hash
    }
}

#[derive(Clone)]
pub struct ChainClient {
    settings: ChainSettings,
    read_provider: Option<DynProvider>,
    wallet_provider: Option<DynProvider>,
    connected_chain_id: Option<u64>,
}

impl ChainClient {
    pub fn new(settings: ChainSettings) -> Self {
        Self {
            settings,
            read_provider: None,
            wallet_provider: None,
            connected_chain_id: None,
        }
    }

    pub fn has_signer(&self) -> bool {
        self.settings.signer.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.wallet_provider.is_some()
    }

    /// Builds the direct read provider when an RPC URL is configured.
    /// Without one, reads wait for a wallet session.
    pub async fn prepare(&mut self) -> Result<(), BoardError> {
        let Some(url) = self.settings.rpc_url.clone() else {
            return Ok(());
        };
        let provider = ProviderBuilder::new()
            .connect(&url)
            .await
            .map_err(|error| classify::classify_text(CallPhase::Read, &error.to_string()))?;
        self.read_provider = Some(provider.erased());
        Ok(())
    }

    /// Opens a wallet session: signing provider, chain id, balance. The
    /// failure reason is a plain string destined for the session panel, not
    /// a board error.
    pub async fn connect(&mut self) -> Result<SessionSnapshot, String> {
        let signer = self.settings.signer.clone().ok_or_else(|| {
            "no wallet key configured; set [wallet] keystore or ETHDECK_PRIVATE_KEY".to_string()
        })?;
        let url = self
            .settings
            .rpc_url
            .clone()
            .ok_or_else(|| "no RPC URL configured; set [network] rpc_url".to_string())?;

        let address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(&url)
            .await
            .map_err(|error| format!("could not reach {url}: {error}"))?
            .erased();

        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|error| format!("could not fetch chain id: {error}"))?;
        if let Some(expected) = self.settings.expected_chain_id {
            if expected != chain_id {
                tracing::warn!(
                    expected_chain_id = expected,
                    actual_chain_id = chain_id,
                    "connected chain differs from [network] chain_id"
                );
            }
        }

        let balance = match provider.get_balance(address).await {
            Ok(wei) => Some(format_native_balance(wei, chain_id)),
            Err(error) => {
                tracing::warn!(error = %error, "balance fetch failed during connect");
                None
            }
        };

        self.wallet_provider = Some(provider);
        self.connected_chain_id = Some(chain_id);

        Ok(SessionSnapshot {
            address: address.to_string(),
            chain_id,
            balance,
        })
    }

    pub fn disconnect(&mut self) {
        self.wallet_provider = None;
        self.connected_chain_id = None;
    }

    pub async fn read_message(&self) -> Result<String, BoardError> {
        let Some(address) = self.settings.contract else {
            return Err(BoardError::not_configured());
        };
        let provider = self
            .read_provider
            .as_ref()
            .or(self.wallet_provider.as_ref())
            .ok_or_else(BoardError::no_endpoint)?;

        let board = MessageBoard::new(address, provider.clone());
        board
            .message()
            .call()
            .await
            .map_err(|error| classify::classify_contract_error(CallPhase::Read, &error))
    }

    pub async fn submit_message(&self, value: String) -> Result<PendingWrite, BoardError> {
        let Some(address) = self.settings.contract else {
            return Err(BoardError::not_configured());
        };
        let provider = self
            .wallet_provider
            .as_ref()
            .ok_or_else(BoardError::not_connected)?;

        let board = MessageBoard::new(address, provider.clone());
        let pending = board
            .setMessage(value)
            .send()
            .await
            .map_err(|error| classify::classify_contract_error(CallPhase::Submit, &error))?;

        Ok(PendingWrite {
            hash: pending.tx_hash().to_string(),
            pending,
        })
    }

    /// Waits for the receipt. `Ok` means mined with a success status.
    pub async fn await_confirmation(&self, write: PendingWrite) -> Result<(), BoardError> {
        let hash = write.hash;
        let receipt = write
            .pending
            .with_required_confirmations(1)
            .with_timeout(Some(self.settings.confirmation_timeout))
            .get_receipt()
            .await
            .map_err(|error| classify::classify_pending_error(&error))?;

        if receipt.status() {
            Ok(())
        } else {
            Err(BoardError::failed(format!("transaction {hash} reverted")))
        }
    }

    pub async fn refresh_balance(&self) -> Result<String, BoardError> {
        let provider = self
            .wallet_provider
            .as_ref()
            .ok_or_else(BoardError::not_connected)?;
        let address = self
            .settings
            .signer
            .as_ref()
            .map(PrivateKeySigner::address)
            .ok_or_else(BoardError::not_connected)?;

        let wei = provider
            .get_balance(address)
            .await
            .map_err(|error| classify::classify_text(CallPhase::Read, &error.to_string()))?;
        Ok(format_native_balance(
            wei,
            self.connected_chain_id.unwrap_or_default(),
        ))
    }
}

/// Renders a wei amount as "1.2345 ETH", using the chain's native ticker.
pub fn format_native_balance(wei: U256, chain_id: u64) -> String {
    let raw = format_ether(wei);
    let formatted = match raw.split_once('.') {
        Some((whole, frac)) => {
            let frac: String = frac.chars().take(4).collect();
            format!("{whole}.{frac:0<4}")
        }
        None => format!("{raw}.0000"),
    };
    format!("{formatted} {}", network_for(chain_id).symbol())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::AppConfig;

    #[test]
    fn balances_render_with_four_decimals_and_ticker() {
        let one_ether = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_native_balance(one_ether, 1), "1.0000 ETH");

        let dust = U256::from(42_100_000_000_000_000u64);
        assert_eq!(format_native_balance(dust, 11155111), "0.0421 ETH");

        assert_eq!(format_native_balance(one_ether, 137), "1.0000 POL");
        assert_eq!(format_native_balance(U256::ZERO, 1), "0.0000 ETH");
    }

    #[test]
    fn settings_accept_a_minimal_config() {
        let settings = ChainSettings::from_config(&AppConfig::default(), None)
            .expect("default config should validate");

        assert!(settings.contract.is_none());
        assert!(settings.rpc_url.is_none());
        assert!(settings.signer.is_none());
    }

    #[test]
    fn settings_parse_the_contract_address() {
        let mut config = AppConfig::default();
        config.contract.address =
            Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string());

        let settings = ChainSettings::from_config(&config, None)
            .expect("checksummed address should parse");

        assert_eq!(
            settings.contract,
            Some(
                "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                    .parse::<Address>()
                    .expect("fixture address is valid")
            )
        );
    }

    #[test]
    fn settings_reject_a_malformed_contract_address() {
        let mut config = AppConfig::default();
        config.contract.address = Some("0xnot-an-address".to_string());

        let error = ChainSettings::from_config(&config, None)
            .expect_err("malformed address should be rejected");

        assert!(matches!(error, AppError::InvalidContractAddress { .. }));
    }

    #[test]
    fn settings_reject_non_http_rpc_urls() {
        let mut config = AppConfig::default();
        config.network.rpc_url = Some("ipc:///var/run/geth.ipc".to_string());

        let error = ChainSettings::from_config(&config, None)
            .expect_err("non-http scheme should be rejected");

        assert!(matches!(error, AppError::InvalidRpcUrl { .. }));
    }

    #[test]
    fn unconnected_client_reports_missing_read_route() {
        let settings = ChainSettings::from_config(&AppConfig::default(), None)
            .expect("default config should validate");
        let client = ChainClient::new(settings);

        assert!(!client.is_connected());
        assert!(!client.has_signer());
    }
}
