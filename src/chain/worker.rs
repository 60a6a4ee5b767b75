//! Background worker owning all network traffic.
//!
//! The TUI thread never awaits anything: it sends [`ChainCommand`]s in and
//! drains [`ChainUpdate`]s out through channels. Reads, writes and balance
//! refreshes run as spawned tasks so a transaction waiting to be mined never
//! delays a board refresh. Session changes (connect/disconnect) mutate the
//! client and are handled inline, keeping it single-writer.

use std::sync::mpsc::Sender as UpdateSender;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::chain::client::ChainClient;
use crate::domain::events::{ChainCommand, ChainUpdate, SessionUpdate};
use crate::infra::contracts::ChainAdapter;

const CHAIN_WORKER_SHUTDOWN_FAILED: &str = "CHAIN_WORKER_SHUTDOWN_FAILED";

#[derive(Debug)]
pub struct ChainWorker {
    commands: UnboundedSender<ChainCommand>,
    worker: Option<JoinHandle<()>>,
}

impl ChainWorker {
    pub fn start(
        client: ChainClient,
        updates: UpdateSender<ChainUpdate>,
    ) -> Result<Self, WorkerStartError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ethdeck-chain-rt")
            .enable_all()
            .build()
            .map_err(WorkerStartError::Runtime)?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let worker = thread::Builder::new()
            .name("ethdeck-chain".to_owned())
            .spawn(move || runtime.block_on(run_worker(client, command_rx, updates)))
            .map_err(WorkerStartError::WorkerSpawn)?;

        Ok(Self {
            commands: command_tx,
            worker: Some(worker),
        })
    }

    /// Cloneable command side for the orchestrator.
    pub fn handle(&self) -> ChainHandle {
        ChainHandle {
            commands: self.commands.clone(),
        }
    }
}

impl Drop for ChainWorker {
    fn drop(&mut self) {
        let _ = self.commands.send(ChainCommand::Shutdown);

        if let Some(worker) = self.worker.take() {
            if let Err(error) = worker.join() {
                tracing::warn!(
                    code = CHAIN_WORKER_SHUTDOWN_FAILED,
                    error = ?error,
                    "chain worker panicked on shutdown"
                );
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChainHandle {
    commands: UnboundedSender<ChainCommand>,
}

impl ChainAdapter for ChainHandle {
    fn dispatch(&self, command: ChainCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|error| anyhow::anyhow!("chain worker is gone: {error}"))
    }
}

async fn run_worker(
    mut client: ChainClient,
    mut commands: UnboundedReceiver<ChainCommand>,
    updates: UpdateSender<ChainUpdate>,
) {
    if let Err(error) = client.prepare().await {
        tracing::warn!(error = %error, "direct RPC provider unavailable at startup");
    }

    while let Some(command) = commands.recv().await {
        tracing::debug!(command = ?command, "chain command received");
        match command {
            ChainCommand::Shutdown => break,
            ChainCommand::ReadMessage { seq } => {
                let client = client.clone();
                let updates = updates.clone();
                tokio::spawn(async move {
                    let result = client.read_message().await;
                    if let Err(error) = &result {
                        tracing::debug!(seq, kind = error.kind().as_label(), "read failed");
                    }
                    let _ = updates.send(ChainUpdate::MessageRead { seq, result });
                });
            }
            ChainCommand::SubmitMessage { value } => {
                let client = client.clone();
                let updates = updates.clone();
                tokio::spawn(async move {
                    run_write(client, value, updates).await;
                });
            }
            ChainCommand::Connect => {
                let update = match client.connect().await {
                    Ok(snapshot) => {
                        tracing::info!(
                            address = %snapshot.address,
                            chain_id = snapshot.chain_id,
                            "wallet session opened"
                        );
                        SessionUpdate::Connected {
                            address: snapshot.address,
                            chain_id: snapshot.chain_id,
                            balance: snapshot.balance,
                        }
                    }
                    Err(reason) => {
                        tracing::warn!(reason = %reason, "wallet connect failed");
                        SessionUpdate::ConnectFailed { reason }
                    }
                };
                let _ = updates.send(ChainUpdate::Session(update));
            }
            ChainCommand::Disconnect => {
                client.disconnect();
                let _ = updates.send(ChainUpdate::Session(SessionUpdate::Disconnected));
            }
            ChainCommand::RefreshBalance => {
                let client = client.clone();
                let updates = updates.clone();
                tokio::spawn(async move {
                    match client.refresh_balance().await {
                        Ok(balance) => {
                            let _ = updates.send(ChainUpdate::Session(
                                SessionUpdate::BalanceRefreshed { balance },
                            ));
                        }
                        Err(error) => {
                            tracing::warn!(kind = error.kind().as_label(), "balance refresh failed");
                        }
                    }
                });
            }
        }
    }
}

/// Submit, report acceptance, then follow the same transaction to its
/// receipt. Acceptance and confirmation are separate updates so the UI can
/// show the pending hash while it waits.
async fn run_write(client: ChainClient, value: String, updates: UpdateSender<ChainUpdate>) {
    match client.submit_message(value).await {
        Err(error) => {
            tracing::debug!(kind = error.kind().as_label(), "submission rejected");
            let _ = updates.send(ChainUpdate::WriteRejected { error });
        }
        Ok(write) => {
            let tx_hash = write.tx_hash().to_owned();
            let _ = updates.send(ChainUpdate::WriteAccepted {
                tx_hash: tx_hash.clone(),
            });

            let result = client.await_confirmation(write).await;
            if let Err(error) = &result {
                tracing::debug!(
                    tx_hash = %tx_hash,
                    kind = error.kind().as_label(),
                    "confirmation failed"
                );
            }
            let _ = updates.send(ChainUpdate::WriteConfirmed { tx_hash, result });
        }
    }
}

#[derive(Debug)]
pub enum WorkerStartError {
    Runtime(std::io::Error),
    WorkerSpawn(std::io::Error),
}

impl std::fmt::Display for WorkerStartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Runtime(source) => write!(f, "async runtime build failed: {source}"),
            Self::WorkerSpawn(source) => write!(f, "worker spawn failed: {source}"),
        }
    }
}

impl std::error::Error for WorkerStartError {}
