//! Test doubles for the infra ports.

use std::cell::RefCell;

use anyhow::Result;

use crate::domain::events::ChainCommand;
use crate::infra::contracts::{ChainAdapter, ClipboardAdapter, ExternalOpener};

/// Records every dispatched command so tests can assert what reached the
/// worker (and, just as often, what never did).
#[derive(Debug, Default)]
pub struct StubChainAdapter {
    pub dispatched: RefCell<Vec<ChainCommand>>,
}

impl StubChainAdapter {
    pub fn commands(&self) -> Vec<ChainCommand> {
        self.dispatched.borrow().clone()
    }
}

impl ChainAdapter for StubChainAdapter {
    fn dispatch(&self, command: ChainCommand) -> Result<()> {
        self.dispatched.borrow_mut().push(command);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubClipboard {
    pub copied: Option<String>,
}

impl ClipboardAdapter for StubClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.copied = Some(text.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopOpener;

impl ExternalOpener for NoopOpener {
    fn open(&self, _target: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_chain_adapter_records_commands() {
        let adapter = StubChainAdapter::default();
        adapter
            .dispatch(ChainCommand::ReadMessage { seq: 7 })
            .expect("stub dispatch must succeed");

        assert_eq!(adapter.commands(), vec![ChainCommand::ReadMessage { seq: 7 }]);
    }

    #[test]
    fn stub_clipboard_keeps_last_copy() {
        let mut clipboard = StubClipboard::default();
        clipboard.copy("0xabc").expect("stub copy must succeed");
        clipboard.copy("0xdef").expect("stub copy must succeed");

        assert_eq!(clipboard.copied.as_deref(), Some("0xdef"));
    }
}
