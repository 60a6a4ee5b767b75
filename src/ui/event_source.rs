use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, ChainUpdate, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Merges chain worker updates and keyboard input into one event stream.
///
/// Updates are drained ahead of the keyboard so completions land in state
/// before the next key is interpreted. When the worker is gone the receiver
/// just stays silent; the keyboard keeps working.
pub struct DashboardEventSource {
    updates: Receiver<ChainUpdate>,
}

impl DashboardEventSource {
    pub fn new(updates: Receiver<ChainUpdate>) -> Self {
        Self { updates }
    }
}

impl AppEventSource for DashboardEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Ok(update) = self.updates.try_recv() {
            return Ok(Some(AppEvent::Chain(update)));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(key_event_for(key.code, key.modifiers));
        }

        Ok(None)
    }
}

/// Maps a key press to an event. Only Ctrl-C quits here; a plain 'q' is an
/// ordinary key so it stays typeable while composing.
fn key_event_for(code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if code == KeyCode::Char('c') && ctrl {
        return Some(AppEvent::QuitRequested);
    }

    let name = match code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        _ => return None,
    };

    let input = if ctrl {
        KeyInput::ctrl(name)
    } else {
        KeyInput::plain(name)
    };
    Some(AppEvent::InputKey(input))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::SessionUpdate;

    #[test]
    fn chain_updates_are_delivered_before_the_keyboard_is_polled() {
        let (sender, receiver) = std::sync::mpsc::channel();
        let mut source = DashboardEventSource::new(receiver);

        sender
            .send(ChainUpdate::Session(SessionUpdate::Disconnected))
            .expect("channel should accept the update");

        let event = source.next_event().expect("next_event should succeed");
        assert_eq!(
            event,
            Some(AppEvent::Chain(ChainUpdate::Session(
                SessionUpdate::Disconnected
            )))
        );
    }

    #[test]
    fn ctrl_c_is_the_only_quit_chord() {
        assert_eq!(
            key_event_for(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(
            key_event_for(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(AppEvent::InputKey(KeyInput::plain("q")))
        );
    }

    #[test]
    fn named_keys_map_to_their_editor_names() {
        for (code, name) in [
            (KeyCode::Enter, "enter"),
            (KeyCode::Esc, "esc"),
            (KeyCode::Backspace, "backspace"),
            (KeyCode::Delete, "delete"),
            (KeyCode::Left, "left"),
            (KeyCode::Right, "right"),
            (KeyCode::Home, "home"),
            (KeyCode::End, "end"),
        ] {
            assert_eq!(
                key_event_for(code, KeyModifiers::NONE),
                Some(AppEvent::InputKey(KeyInput::plain(name))),
                "key {code:?} should map to {name}"
            );
        }
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(key_event_for(KeyCode::F(5), KeyModifiers::NONE), None);
        assert_eq!(key_event_for(KeyCode::Tab, KeyModifiers::NONE), None);
    }
}
