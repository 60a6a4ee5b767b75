//! Headless board access for the `read` and `send` subcommands.
//!
//! Both drive the same [`ChainClient`] as the dashboard, minus the worker
//! thread: the flow runs to completion on a local runtime and prints to
//! stdout, so the board can be scripted without entering the TUI.

use anyhow::{anyhow, bail, Context, Result};
use tokio::runtime::Runtime;

use crate::chain::client::{ChainClient, ChainSettings};
use crate::domain::board::WRITE_CONFIRMED_NOTICE;

/// Fetches the current board message and prints it verbatim.
pub fn run_read(settings: ChainSettings) -> Result<()> {
    let runtime = oneshot_runtime()?;
    let message = runtime.block_on(read_flow(ChainClient::new(settings)))?;
    println!("{message}");
    Ok(())
}

/// Submits `setMessage(value)`, waits for the receipt and prints the
/// freshly read board value.
pub fn run_send(settings: ChainSettings, value: String) -> Result<()> {
    if value.is_empty() {
        bail!("nothing to send: the message is empty");
    }
    let runtime = oneshot_runtime()?;
    runtime.block_on(send_flow(ChainClient::new(settings), value))
}

async fn read_flow(mut client: ChainClient) -> Result<String> {
    client.prepare().await?;
    Ok(client.read_message().await?)
}

async fn send_flow(mut client: ChainClient, value: String) -> Result<()> {
    client.prepare().await?;
    client.connect().await.map_err(|reason| anyhow!(reason))?;

    let pending = client.submit_message(value).await?;
    println!("Transaction sent: {}", pending.tx_hash());
    println!("Waiting for confirmation...");

    client.await_confirmation(pending).await?;
    println!("{WRITE_CONFIRMED_NOTICE}");

    // The write is already confirmed; a failed follow-up read is not worth
    // a non-zero exit.
    match client.read_message().await {
        Ok(message) => println!("Board now reads: {message}"),
        Err(error) => {
            tracing::warn!(error = %error, "follow-up read failed after a confirmed write");
        }
    }
    Ok(())
}

fn oneshot_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("could not start the async runtime")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::AppConfig;

    fn settings(mutate: impl FnOnce(&mut AppConfig)) -> ChainSettings {
        let mut config = AppConfig::default();
        mutate(&mut config);
        ChainSettings::from_config(&config, None).expect("test config should validate")
    }

    #[test]
    fn read_without_a_contract_address_fails_before_any_request() {
        let runtime = oneshot_runtime().expect("runtime should start");

        let error = runtime
            .block_on(read_flow(ChainClient::new(settings(|_| ()))))
            .expect_err("read should fail");

        assert!(error.to_string().contains("Contract address not set"));
    }

    #[test]
    fn read_without_an_rpc_route_explains_what_is_missing() {
        let runtime = oneshot_runtime().expect("runtime should start");
        let settings = settings(|config| {
            config.contract.address =
                Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string());
        });

        let error = runtime
            .block_on(read_flow(ChainClient::new(settings)))
            .expect_err("read should fail");

        assert!(error.to_string().contains("No RPC route available"));
    }

    #[test]
    fn send_without_a_wallet_key_fails_before_any_request() {
        let runtime = oneshot_runtime().expect("runtime should start");
        let settings = settings(|config| {
            config.contract.address =
                Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string());
        });

        let error = runtime
            .block_on(send_flow(ChainClient::new(settings), "gm".to_string()))
            .expect_err("send should fail");

        assert!(error.to_string().contains("no wallet key configured"));
    }

    #[test]
    fn empty_message_is_rejected_up_front() {
        let error = run_send(settings(|_| ()), String::new()).expect_err("send should fail");

        assert!(error.to_string().contains("nothing to send"));
    }
}
