use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        contract = ?context.endpoint.address(),
        rpc_configured = context.endpoint.has_rpc_url(),
        "starting dashboard shell"
    );

    let mut terminal = TerminalSession::new()?;
    orchestrator.on_mount()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{events::AppEvent, shell_state::ShellState},
        infra::stubs::{NoopOpener, StubChainAdapter, StubClipboard},
        ui::event_source::MockEventSource,
        usecases::shell::DefaultShellOrchestrator,
    };

    fn orchestrator() -> DefaultShellOrchestrator<StubChainAdapter, StubClipboard, NoopOpener> {
        DefaultShellOrchestrator::new(
            ShellState::default(),
            StubChainAdapter::default(),
            StubClipboard::default(),
            NoopOpener,
        )
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn orchestrator_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator();

        if let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator
                .handle_event(event)
                .expect("must handle quit event");
        }

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn ticks_keep_the_loop_alive_until_quit() {
        let mut source =
            MockEventSource::from(vec![AppEvent::Tick, AppEvent::Tick, AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator();

        while let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator.handle_event(event).expect("must handle event");
            if !orchestrator.state().is_running() {
                break;
            }
        }

        assert!(!orchestrator.state().is_running());
    }
}
