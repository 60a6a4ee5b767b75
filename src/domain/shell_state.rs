use super::board::BoardState;
use super::draft::DraftState;
use super::endpoint::ContractEndpoint;
use super::session::SessionView;
use super::token::TokenBalance;

/// Keyboard interpretation mode for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are dashboard actions (read, connect, quit, ...).
    Normal,
    /// Keys edit the message draft.
    Insert,
}

/// Everything the dashboard renders, in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    running: bool,
    mode: InputMode,
    board: BoardState,
    session: SessionView,
    draft: DraftState,
    tokens: Vec<TokenBalance>,
    endpoint: ContractEndpoint,
    flash: Option<String>,
}

impl ShellState {
    pub fn new(endpoint: ContractEndpoint, tokens: Vec<TokenBalance>) -> Self {
        Self {
            running: true,
            mode: InputMode::Normal,
            board: BoardState::new(),
            session: SessionView::disconnected(),
            draft: DraftState::default(),
            tokens,
            endpoint,
            flash: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    pub fn session(&self) -> &SessionView {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionView {
        &mut self.session
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftState {
        &mut self.draft
    }

    pub fn tokens(&self) -> &[TokenBalance] {
        &self.tokens
    }

    pub fn endpoint(&self) -> &ContractEndpoint {
        &self.endpoint
    }

    /// One-shot status-bar note ("Address copied"). Cleared on the next key
    /// press.
    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    pub fn clear_flash(&mut self) {
        self.flash = None;
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ContractEndpoint::default(), Vec::new())
    }
}
