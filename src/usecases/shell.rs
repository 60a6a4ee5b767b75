//! Dashboard orchestrator: interprets keys and applies chain updates.
//!
//! All state transitions happen here, synchronously, on the UI thread. The
//! chain worker only ever reports outcomes; whether an outcome still matters
//! (a superseded read, a write update arriving out of phase) is decided by
//! the domain state, not by the worker.

use anyhow::Result;

use crate::{
    domain::{
        board::ReadOutcome,
        events::{AppEvent, ChainCommand, ChainUpdate, KeyInput},
        network::network_for,
        shell_state::{InputMode, ShellState},
    },
    infra::contracts::{ChainAdapter, ClipboardAdapter, ExternalOpener},
    usecases::{
        read_message::plan_read,
        write_message::{plan_write, WriteDecision},
    },
};

use super::contracts::ShellOrchestrator;

pub struct DefaultShellOrchestrator<C, B, O>
where
    C: ChainAdapter,
    B: ClipboardAdapter,
    O: ExternalOpener,
{
    state: ShellState,
    chain: C,
    clipboard: B,
    opener: O,
}

impl<C, B, O> DefaultShellOrchestrator<C, B, O>
where
    C: ChainAdapter,
    B: ClipboardAdapter,
    O: ExternalOpener,
{
    pub fn new(state: ShellState, chain: C, clipboard: B, opener: O) -> Self {
        Self {
            state,
            chain,
            clipboard,
            opener,
        }
    }

    /// Starts a board refresh, or surfaces the precondition error that
    /// prevents one. Nothing reaches the worker unless the plan passes.
    fn request_read(&mut self) -> Result<()> {
        if let Err(error) = plan_read(self.state.endpoint(), self.state.session()) {
            self.state.board_mut().report_error(error);
            return Ok(());
        }

        let seq = self.state.board_mut().begin_read();
        self.chain.dispatch(ChainCommand::ReadMessage { seq })
    }

    fn attempt_submit(&mut self) -> Result<()> {
        if self.state.board().is_writing() {
            self.state.set_flash("A transaction is already pending");
            return Ok(());
        }

        let decision = plan_write(
            self.state.draft().text(),
            self.state.endpoint(),
            self.state.session(),
        );

        match decision {
            WriteDecision::Disabled => {
                self.state.set_flash("Nothing to send yet");
                Ok(())
            }
            WriteDecision::Blocked(error) => {
                self.state.board_mut().report_error(error);
                Ok(())
            }
            WriteDecision::Submit(value) => {
                self.state.board_mut().begin_submit();
                self.state.set_mode(InputMode::Normal);
                self.chain.dispatch(ChainCommand::SubmitMessage { value })
            }
        }
    }

    fn apply_chain_update(&mut self, update: ChainUpdate) -> Result<()> {
        match update {
            ChainUpdate::MessageRead { seq, result } => {
                let outcome = self.state.board_mut().apply_read(seq, result);
                if outcome == ReadOutcome::Stale {
                    tracing::debug!(seq, "discarded superseded read result");
                }
                Ok(())
            }
            ChainUpdate::WriteAccepted { tx_hash } => {
                self.state.board_mut().submit_accepted(tx_hash);
                Ok(())
            }
            ChainUpdate::WriteRejected { error } => {
                self.state.board_mut().submit_rejected(error);
                Ok(())
            }
            ChainUpdate::WriteConfirmed { tx_hash, result } => match result {
                Ok(()) => {
                    tracing::info!(tx_hash = %tx_hash, "write confirmed");
                    self.state.board_mut().confirm_succeeded();
                    self.state.draft_mut().clear();
                    self.request_read()
                }
                Err(error) => {
                    self.state.board_mut().confirm_failed(error);
                    Ok(())
                }
            },
            ChainUpdate::Session(update) => {
                let identity_changed = self.state.session_mut().apply(update);
                if identity_changed {
                    return self.request_read();
                }
                Ok(())
            }
        }
    }

    fn handle_normal_key(&mut self, key: &KeyInput) -> Result<()> {
        if key.ctrl {
            return Ok(());
        }

        match key.key.as_str() {
            "q" => self.state.stop(),
            "i" => self.state.set_mode(InputMode::Insert),
            "r" => return self.request_read(),
            "R" => {
                if self.state.session().is_connected() {
                    return self.chain.dispatch(ChainCommand::RefreshBalance);
                }
                self.state.set_flash("Connect a wallet first");
            }
            "c" => {
                self.state.set_flash("Connecting wallet...");
                return self.chain.dispatch(ChainCommand::Connect);
            }
            "d" => return self.chain.dispatch(ChainCommand::Disconnect),
            "y" => return self.copy_to_clipboard(CopyTarget::Address),
            "Y" => return self.copy_to_clipboard(CopyTarget::TxHash),
            "o" => return self.open_in_explorer(ExplorerTarget::Address),
            "O" => return self.open_in_explorer(ExplorerTarget::TxHash),
            _ => {}
        }

        Ok(())
    }

    fn handle_insert_key(&mut self, key: &KeyInput) -> Result<()> {
        if key.ctrl {
            return Ok(());
        }

        match key.key.as_str() {
            "esc" => self.state.set_mode(InputMode::Normal),
            "enter" => return self.attempt_submit(),
            "backspace" => self.state.draft_mut().backspace(),
            "delete" => self.state.draft_mut().delete(),
            "left" => self.state.draft_mut().move_left(),
            "right" => self.state.draft_mut().move_right(),
            "home" => self.state.draft_mut().move_home(),
            "end" => self.state.draft_mut().move_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    if !self.state.draft_mut().insert(ch) {
                        self.state.set_flash("Draft is at the length limit");
                    }
                }
            }
        }

        Ok(())
    }

    fn copy_to_clipboard(&mut self, target: CopyTarget) -> Result<()> {
        let (value, flash) = match target {
            CopyTarget::Address => (
                self.state.session().address().map(str::to_owned),
                "Address copied",
            ),
            CopyTarget::TxHash => (
                self.state.board().last_tx_hash().map(str::to_owned),
                "Transaction hash copied",
            ),
        };

        match value {
            Some(value) => {
                self.clipboard.copy(&value)?;
                self.state.set_flash(flash);
            }
            None => self.state.set_flash("Nothing to copy"),
        }

        Ok(())
    }

    fn open_in_explorer(&mut self, target: ExplorerTarget) -> Result<()> {
        let chain_id = self.state.session().chain_id();
        let value = match target {
            ExplorerTarget::Address => self.state.session().address().map(str::to_owned),
            ExplorerTarget::TxHash => self.state.board().last_tx_hash().map(str::to_owned),
        };

        let url = match (chain_id, value) {
            (Some(chain_id), Some(value)) => {
                let network = network_for(chain_id);
                match target {
                    ExplorerTarget::Address => network.address_url(&value),
                    ExplorerTarget::TxHash => network.tx_url(&value),
                }
            }
            _ => None,
        };

        match url {
            Some(url) => {
                self.opener.open(&url)?;
                self.state.set_flash("Opened in explorer");
            }
            None => self.state.set_flash("No explorer link available"),
        }

        Ok(())
    }
}

enum CopyTarget {
    Address,
    TxHash,
}

#[derive(Clone, Copy)]
enum ExplorerTarget {
    Address,
    TxHash,
}

impl<C, B, O> ShellOrchestrator for DefaultShellOrchestrator<C, B, O>
where
    C: ChainAdapter,
    B: ClipboardAdapter,
    O: ExternalOpener,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn on_mount(&mut self) -> Result<()> {
        self.request_read()
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => Ok(()),
            AppEvent::QuitRequested => {
                self.state.stop();
                Ok(())
            }
            AppEvent::Chain(update) => self.apply_chain_update(update),
            AppEvent::InputKey(key) => {
                self.state.clear_flash();
                match self.state.mode() {
                    InputMode::Normal => self.handle_normal_key(&key),
                    InputMode::Insert => self.handle_insert_key(&key),
                }
            }
        }
    }
}
