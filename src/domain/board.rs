//! Read/write state for the MessageBoard contract.
//!
//! The board tracks one value: the string stored on chain. Reads and writes
//! progress independently so a confirmation landing mid-refresh never cancels
//! the refresh, and vice versa. Every read carries a sequence token; a result
//! is applied only if it answers the most recent request, so a slow response
//! can never overwrite a newer one.

use crate::domain::errors::BoardError;

/// Banner shown after a write is mined and the follow-up read lands.
pub const WRITE_CONFIRMED_NOTICE: &str = "Message updated successfully!";

/// Where an in-flight write currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritePhase {
    Idle,
    /// Sent to the signer/node, no acceptance yet.
    Submitting,
    /// Accepted by the node, waiting to be mined.
    Confirming { tx_hash: String },
}

/// Whether a read result was applied or discarded as superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    message: Option<String>,
    read_seq: u64,
    read_in_flight: bool,
    write_phase: WritePhase,
    error: Option<BoardError>,
    notice: Option<String>,
    last_tx_hash: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            message: None,
            read_seq: 0,
            read_in_flight: false,
            write_phase: WritePhase::Idle,
            error: None,
            notice: None,
            last_tx_hash: None,
        }
    }

    /// Last value successfully read from the contract. `Some("")` means the
    /// board holds an empty string; `None` means no read has landed yet.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_reading(&self) -> bool {
        self.read_in_flight
    }

    pub fn write_phase(&self) -> &WritePhase {
        &self.write_phase
    }

    pub fn is_writing(&self) -> bool {
        !matches!(self.write_phase, WritePhase::Idle)
    }

    pub fn error(&self) -> Option<&BoardError> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn last_tx_hash(&self) -> Option<&str> {
        self.last_tx_hash.as_deref()
    }

    /// Starts a refresh and returns its sequence token. Issuing a new read
    /// supersedes any read still in flight and dismisses a displayed error;
    /// a success notice stays up until the next write begins.
    pub fn begin_read(&mut self) -> u64 {
        self.read_seq += 1;
        self.read_in_flight = true;
        self.error = None;
        self.read_seq
    }

    /// Applies a read result if `seq` is still current, otherwise discards
    /// it. Failed reads keep the previously shown value.
    pub fn apply_read(
        &mut self,
        seq: u64,
        result: Result<String, BoardError>,
    ) -> ReadOutcome {
        if seq != self.read_seq {
            return ReadOutcome::Stale;
        }
        self.read_in_flight = false;
        match result {
            Ok(value) => {
                self.message = Some(value);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
        ReadOutcome::Applied
    }

    /// Records a failure detected before any request was made (missing
    /// configuration, no session).
    pub fn report_error(&mut self, error: BoardError) {
        self.error = Some(error);
        self.notice = None;
    }

    pub fn begin_submit(&mut self) {
        self.write_phase = WritePhase::Submitting;
        self.error = None;
        self.notice = None;
    }

    pub fn submit_accepted(&mut self, tx_hash: String) {
        if self.write_phase != WritePhase::Submitting {
            return;
        }
        self.last_tx_hash = Some(tx_hash.clone());
        self.write_phase = WritePhase::Confirming { tx_hash };
    }

    pub fn submit_rejected(&mut self, error: BoardError) {
        if self.write_phase != WritePhase::Submitting {
            return;
        }
        self.write_phase = WritePhase::Idle;
        self.error = Some(error);
    }

    pub fn confirm_succeeded(&mut self) {
        if !matches!(self.write_phase, WritePhase::Confirming { .. }) {
            return;
        }
        self.write_phase = WritePhase::Idle;
        self.error = None;
        self.notice = Some(WRITE_CONFIRMED_NOTICE.to_string());
    }

    pub fn confirm_failed(&mut self, error: BoardError) {
        if !matches!(self.write_phase, WritePhase::Confirming { .. }) {
            return;
        }
        self.write_phase = WritePhase::Idle;
        self.error = Some(error);
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
