use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::{
    board::{BoardState, WritePhase},
    network::network_for,
    session::SessionView,
    shell_state::{InputMode, ShellState},
    token::TokenBalance,
};

use super::message_input::render_draft_editor;
use super::styles;

/// Placeholder shown when the board holds no message (or an empty one).
const NO_MESSAGE_TEXT: &str = "No message available";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, banner_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [wallet_column, board_column] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .areas(content_area);

    // Wallet panel height: 5 content lines plus borders.
    let [wallet_area, tokens_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .areas(wallet_column);

    // 3 lines for the editor: 1 border + 1 text + 1 border
    let [board_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(board_column);

    render_wallet_panel(frame, wallet_area, state.session());
    render_tokens_panel(frame, tokens_area, state.tokens());
    render_board_panel(frame, board_area, state);
    render_draft_editor(frame, input_area, state.draft(), state.mode());

    let banner = Paragraph::new(banner_line(state));
    frame.render_widget(banner, banner_area);

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_wallet_panel(frame: &mut Frame<'_>, area: ratatui::layout::Rect, session: &SessionView) {
    let panel = Paragraph::new(wallet_lines(session)).block(
        Block::default()
            .title("Wallet")
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(panel, area);
}

fn wallet_lines(session: &SessionView) -> Vec<Line<'static>> {
    if !session.is_connected() {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Status:  ".to_owned(), styles::label_style()),
                Span::styled("Disconnected".to_owned(), styles::disconnected_style()),
            ]),
            Line::from(Span::styled(
                "Press 'c' to connect a wallet".to_owned(),
                styles::label_style(),
            )),
        ];
        if let Some(reason) = session.last_error() {
            lines.push(Line::from(Span::styled(
                reason.to_owned(),
                styles::session_error_style(),
            )));
        }
        return lines;
    }

    let chain_id = session.chain_id().unwrap_or_default();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status:  ".to_owned(), styles::label_style()),
            Span::styled("Connected".to_owned(), styles::connected_style()),
        ]),
        Line::from(vec![
            Span::styled("Address: ".to_owned(), styles::label_style()),
            Span::styled(
                short_hex(session.address().unwrap_or_default()),
                styles::value_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Network: ".to_owned(), styles::label_style()),
            Span::styled(
                network_for(chain_id).name().to_owned(),
                styles::network_badge_style(chain_id),
            ),
        ]),
        Line::from(vec![
            Span::styled("Balance: ".to_owned(), styles::label_style()),
            match session.balance() {
                Some(balance) => Span::styled(balance.to_owned(), styles::balance_style()),
                None => Span::styled("unavailable".to_owned(), styles::label_style()),
            },
        ]),
    ];

    if let Some(clock) = session_clock(session.updated_at_unix_ms()) {
        lines.push(Line::from(vec![
            Span::styled("Updated: ".to_owned(), styles::label_style()),
            Span::styled(clock, styles::label_style()),
        ]));
    }

    lines
}

fn render_tokens_panel(frame: &mut Frame<'_>, area: ratatui::layout::Rect, tokens: &[TokenBalance]) {
    let title = format!("Tokens ({})", tokens.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    if tokens.is_empty() {
        let panel = Paragraph::new("No tokens to display").block(block);
        frame.render_widget(panel, area);
        return;
    }

    let items: Vec<ListItem<'static>> = tokens
        .iter()
        .map(|token| ListItem::new(token_line(token)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn token_line(token: &TokenBalance) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<6}", token.symbol), styles::token_symbol_style()),
        Span::styled(
            format!("{:>10}  ", token.display_balance()),
            styles::value_style(),
        ),
        Span::styled(token.name.clone(), styles::token_name_style()),
    ])
}

fn render_board_panel(frame: &mut Frame<'_>, area: ratatui::layout::Rect, state: &ShellState) {
    // The board panel carries focus whenever the editor does not.
    let border_style = if state.mode() == InputMode::Normal {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let panel = Paragraph::new(board_lines(state))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(board_title(state.board()))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(panel, area);
}

fn board_title(board: &BoardState) -> String {
    if board.is_reading() {
        "Message Board (reading...)".to_owned()
    } else {
        "Message Board".to_owned()
    }
}

fn board_lines(state: &ShellState) -> Vec<Line<'static>> {
    let board = state.board();

    let contract = match state.endpoint().address() {
        Some(address) => Span::styled(address.to_owned(), styles::value_style()),
        None => Span::styled(
            "not configured".to_owned(),
            styles::message_missing_style(),
        ),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Contract: ".to_owned(), styles::label_style()),
            contract,
        ]),
        Line::default(),
        message_line(board),
    ];

    if let Some(status) = write_status_line(board) {
        lines.push(Line::default());
        lines.push(status);
    }

    lines
}

/// The board value line. Shows the last read verbatim; falls back to a
/// placeholder when nothing (or an empty string) is stored.
fn message_line(board: &BoardState) -> Line<'static> {
    match board.message() {
        None if board.is_reading() => Line::from(Span::styled(
            "Loading message...".to_owned(),
            styles::message_missing_style(),
        )),
        None => Line::from(Span::styled(
            NO_MESSAGE_TEXT.to_owned(),
            styles::message_missing_style(),
        )),
        Some(message) if message.is_empty() => Line::from(Span::styled(
            NO_MESSAGE_TEXT.to_owned(),
            styles::message_missing_style(),
        )),
        Some(message) => Line::from(Span::styled(message.to_owned(), styles::message_style())),
    }
}

fn write_status_line(board: &BoardState) -> Option<Line<'static>> {
    match board.write_phase() {
        WritePhase::Submitting => Some(Line::from(Span::styled(
            "Sending transaction...".to_owned(),
            styles::pending_style(),
        ))),
        WritePhase::Confirming { tx_hash } => Some(Line::from(Span::styled(
            format!("Confirming {}...", short_hex(tx_hash)),
            styles::pending_style(),
        ))),
        WritePhase::Idle => board.last_tx_hash().map(|tx_hash| {
            Line::from(vec![
                Span::styled("Last tx: ".to_owned(), styles::label_style()),
                Span::styled(short_hex(tx_hash), styles::tx_hash_style()),
            ])
        }),
    }
}

/// One line under the panels for whatever needs attention right now. A
/// fresh key-action note wins over a sticky error, which wins over the
/// success notice.
fn banner_line(state: &ShellState) -> Line<'static> {
    if let Some(flash) = state.flash() {
        return Line::from(Span::styled(flash.to_owned(), styles::flash_style()));
    }
    if let Some(error) = state.board().error() {
        return Line::from(Span::styled(
            error.to_string(),
            styles::error_banner_style(),
        ));
    }
    if let Some(notice) = state.board().notice() {
        return Line::from(Span::styled(
            notice.to_owned(),
            styles::notice_banner_style(),
        ));
    }
    Line::default()
}

fn status_line(state: &ShellState) -> String {
    let wallet = if state.session().is_connected() {
        "connected"
    } else {
        "disconnected"
    };
    let nav_hint = match state.mode() {
        InputMode::Normal => {
            "r: re-read | i: compose | c: connect | d: disconnect | y: copy | o: explorer | q: quit"
        }
        InputMode::Insert => "Enter: send | Esc: back | type your message",
    };
    format!("wallet: {wallet} | {nav_hint}")
}

/// Shortens a 0x-hex value to its familiar head/tail form ("0xf39F...2266").
/// Anything too short to truncate passes through unchanged.
fn short_hex(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 10 {
        return value.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

fn session_clock(unix_ms: u128) -> Option<String> {
    use chrono::{Local, TimeZone};

    let millis = i64::try_from(unix_ms).ok()?;
    let datetime = match Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(dt, _) => dt,
        chrono::LocalResult::None => return None,
    };
    Some(datetime.format("%H:%M:%S").to_string())
}
