//! Wallet key loading.
//!
//! Two sources, checked in order: an encrypted keystore file (password
//! prompted before the TUI takes over the terminal) and a raw private key in
//! an environment variable. Nothing configured is not an error; the
//! dashboard then runs read-only and `connect` explains what is missing.

use std::io;
use std::path::PathBuf;

use alloy::signers::local::PrivateKeySigner;

use crate::infra::config::WalletConfig;

/// Environment variable consulted when `[wallet] private_key_env` is unset.
pub const DEFAULT_KEY_ENV: &str = "ETHDECK_PRIVATE_KEY";

/// Where the signing key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSource {
    Keystore(PathBuf),
    /// Name of the environment variable holding the key.
    EnvKey(String),
}

/// Resolves which source `load_signer` will try. A configured keystore wins
/// over the environment variable.
pub fn resolve_source(config: &WalletConfig) -> WalletSource {
    match &config.keystore {
        Some(path) => WalletSource::Keystore(path.clone()),
        None => WalletSource::EnvKey(
            config
                .private_key_env
                .clone()
                .unwrap_or_else(|| DEFAULT_KEY_ENV.to_string()),
        ),
    }
}

/// Interactive stdio used before the alternate screen is entered.
pub trait SecretPrompt {
    fn print_line(&mut self, line: &str) -> io::Result<()>;
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct StdPrompt;

impl SecretPrompt for StdPrompt {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        println!("{line}");
        Ok(())
    }

    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(source) => Err(source),
        }
    }
}

/// Loads the signer, prompting for the keystore password when needed.
///
/// Returns `Ok(None)` when no key material is configured or the password
/// prompt was cancelled; both leave the dashboard usable without a wallet.
pub fn load_signer(
    config: &WalletConfig,
    terminal: &mut dyn SecretPrompt,
) -> Result<Option<PrivateKeySigner>, WalletError> {
    match resolve_source(config) {
        WalletSource::Keystore(path) => {
            let Some(password) = terminal
                .prompt_secret(&format!("Keystore password for {}: ", path.display()))
                .map_err(WalletError::Prompt)?
            else {
                terminal
                    .print_line("No password entered; starting without a wallet.")
                    .map_err(WalletError::Prompt)?;
                return Ok(None);
            };

            let signer = PrivateKeySigner::decrypt_keystore(&path, password).map_err(
                |source| WalletError::KeystoreDecrypt {
                    path: path.clone(),
                    detail: source.to_string(),
                },
            )?;
            Ok(Some(signer))
        }
        WalletSource::EnvKey(var) => match std::env::var(&var) {
            Ok(raw) => {
                let signer = raw.trim().parse::<PrivateKeySigner>().map_err(|source| {
                    WalletError::InvalidEnvKey {
                        var: var.clone(),
                        detail: source.to_string(),
                    }
                })?;
                Ok(Some(signer))
            }
            Err(_) => Ok(None),
        },
    }
}

#[derive(Debug)]
pub enum WalletError {
    KeystoreDecrypt { path: PathBuf, detail: String },
    InvalidEnvKey { var: String, detail: String },
    Prompt(io::Error),
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeystoreDecrypt { path, detail } => {
                write!(f, "could not decrypt keystore {}: {detail}", path.display())
            }
            Self::InvalidEnvKey { var, detail } => {
                write!(f, "environment variable {var} does not hold a valid private key: {detail}")
            }
            Self::Prompt(source) => write!(f, "password prompt failed: {source}"),
        }
    }
}

impl std::error::Error for WalletError {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::test_support::env_lock;

    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    struct FakePrompt {
        secrets: VecDeque<Option<String>>,
        output: Vec<String>,
    }

    impl FakePrompt {
        fn new(secrets: Vec<Option<&str>>) -> Self {
            Self {
                secrets: secrets
                    .into_iter()
                    .map(|item| item.map(|value| value.to_owned()))
                    .collect(),
                output: Vec::new(),
            }
        }
    }

    impl SecretPrompt for FakePrompt {
        fn print_line(&mut self, line: &str) -> io::Result<()> {
            self.output.push(line.to_owned());
            Ok(())
        }

        fn prompt_secret(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.secrets.pop_front().flatten())
        }
    }

    #[test]
    fn keystore_takes_precedence_over_env_key() {
        let config = WalletConfig {
            keystore: Some(PathBuf::from("/tmp/wallet.json")),
            private_key_env: Some("SOME_VAR".to_string()),
        };

        assert_eq!(
            resolve_source(&config),
            WalletSource::Keystore(PathBuf::from("/tmp/wallet.json"))
        );
    }

    #[test]
    fn env_source_falls_back_to_the_default_variable() {
        let config = WalletConfig::default();

        assert_eq!(
            resolve_source(&config),
            WalletSource::EnvKey(DEFAULT_KEY_ENV.to_string())
        );
    }

    #[test]
    fn loads_signer_from_environment_key() {
        let _guard = env_lock();
        std::env::set_var("ETHDECK_TEST_SIGNER_KEY", ANVIL_KEY);

        let config = WalletConfig {
            keystore: None,
            private_key_env: Some("ETHDECK_TEST_SIGNER_KEY".to_string()),
        };
        let mut prompt = FakePrompt::new(vec![]);

        let signer = load_signer(&config, &mut prompt)
            .expect("load should succeed")
            .expect("signer should be present");
        assert_eq!(signer.address().to_string(), ANVIL_ADDRESS);

        std::env::remove_var("ETHDECK_TEST_SIGNER_KEY");
    }

    #[test]
    fn missing_key_material_is_not_an_error() {
        let _guard = env_lock();
        std::env::remove_var("ETHDECK_TEST_ABSENT_KEY");

        let config = WalletConfig {
            keystore: None,
            private_key_env: Some("ETHDECK_TEST_ABSENT_KEY".to_string()),
        };
        let mut prompt = FakePrompt::new(vec![]);

        let signer = load_signer(&config, &mut prompt).expect("load should succeed");
        assert!(signer.is_none());
    }

    #[test]
    fn malformed_env_key_reports_the_variable_not_the_value() {
        let _guard = env_lock();
        std::env::set_var("ETHDECK_TEST_BAD_KEY", "not-a-key");

        let config = WalletConfig {
            keystore: None,
            private_key_env: Some("ETHDECK_TEST_BAD_KEY".to_string()),
        };
        let mut prompt = FakePrompt::new(vec![]);

        let error = load_signer(&config, &mut prompt).expect_err("load should fail");
        let rendered = error.to_string();
        assert!(rendered.contains("ETHDECK_TEST_BAD_KEY"));
        assert!(!rendered.contains("not-a-key"));

        std::env::remove_var("ETHDECK_TEST_BAD_KEY");
    }

    #[test]
    fn cancelled_password_prompt_starts_without_a_wallet() {
        let config = WalletConfig {
            keystore: Some(PathBuf::from("/tmp/wallet.json")),
            private_key_env: None,
        };
        let mut prompt = FakePrompt::new(vec![None]);

        let signer = load_signer(&config, &mut prompt).expect("load should succeed");

        assert!(signer.is_none());
        assert!(prompt
            .output
            .iter()
            .any(|line| line.contains("without a wallet")));
    }
}
