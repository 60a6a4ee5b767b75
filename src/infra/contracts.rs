use anyhow::Result;

use crate::domain::events::ChainCommand;

/// Command side of the background chain worker. Dispatch never blocks;
/// results come back as events through the worker's update channel.
pub trait ChainAdapter {
    fn dispatch(&self, command: ChainCommand) -> Result<()>;
}

pub trait ClipboardAdapter {
    fn copy(&mut self, text: &str) -> Result<()>;
}

pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}
