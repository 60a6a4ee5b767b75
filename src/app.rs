use std::path::Path;

use anyhow::Result;

use crate::{
    chain::{
        self,
        client::{ChainClient, ChainSettings},
        signer::{load_signer, StdPrompt},
        worker::ChainWorker,
    },
    cli::{Cli, Command},
    domain::shell_state::ShellState,
    infra, ui,
    usecases::{self, bootstrap, oneshot, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => run_dashboard(cli.config.as_deref()),
        Command::Read => {
            let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;
            let settings = ChainSettings::from_config(&context.config, None)?;
            oneshot::run_read(settings)
        }
        Command::Send { message } => {
            let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;
            let signer = load_signer(&context.config.wallet, &mut StdPrompt)?;
            let settings = ChainSettings::from_config(&context.config, signer)?;
            oneshot::run_send(settings, message)
        }
    }
}

fn run_dashboard(config_path: Option<&Path>) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(config_path)?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = crate::domain::module_name(),
        chain = chain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    // The keystore password prompt must finish before the TUI owns the
    // terminal.
    let signer = load_signer(&context.config.wallet, &mut StdPrompt)?;
    let wallet_key_loaded = signer.is_some();
    let settings = ChainSettings::from_config(&context.config, signer)?;

    let (updates_tx, updates_rx) = std::sync::mpsc::channel();
    let worker = ChainWorker::start(ChainClient::new(settings), updates_tx)?;

    let mut orchestrator = DefaultShellOrchestrator::new(
        ShellState::new(context.endpoint.clone(), infra::tokens::mock_tokens()),
        worker.handle(),
        infra::desktop::SystemClipboard::default(),
        infra::desktop::SystemOpener,
    );
    let mut event_source = ui::DashboardEventSource::new(updates_rx);

    tracing::info!(wallet_key_loaded, "dashboard composed");

    ui::shell::start(&context, &mut event_source, &mut orchestrator)
}
