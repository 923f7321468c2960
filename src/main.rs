//! qjoin binary: terminal setup, event loop, cleanup.
//!
//! Loop shape: terminal events are polled on a background task and mapped to
//! actions by the visible view; actions run through the reducer; effects are
//! handled against the injected position source; a render happens only when
//! state changed.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use qjoin::action::Action;
use qjoin::dispatch::{EffectStore, EventKind, RawEvent, process_raw_event, spawn_event_poller};
use qjoin::effect::handle_effect;
use qjoin::position::{DEFAULT_POSITION, FixedPosition, PositionSource};
use qjoin::reducer::reducer;
use qjoin::state::AppState;
use qjoin::ui::AppUi;

/// Terminal queue-join form
#[derive(Parser, Debug)]
#[command(name = "qjoin")]
#[command(about = "Join a queue and get a ticket with your position")]
struct Args {
    /// Position handed out by the mock assignment source (>= 1)
    #[arg(long, default_value_t = DEFAULT_POSITION, value_parser = clap::value_parser!(u64).range(1..))]
    position: u64,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, FixedPosition(args.position)).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Ctrl+C / Ctrl+Q always quit, whichever view is up.
fn is_quit_combo(key: &crossterm::event::KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    source: impl PositionSource,
) -> io::Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Store = state + reducer
    let mut store = EffectStore::new(AppState::new(), reducer);

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut ui = AppUi::new();
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                ui.render(frame, frame.area(), store.state());
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                match &event {
                    EventKind::Resize(_, _) => should_render = true,
                    EventKind::Key(key) if is_quit_combo(key) => {
                        let _ = action_tx.send(Action::Quit);
                    }
                    _ => {
                        for action in ui.map_event(&event, store.state()) {
                            let _ = action_tx.send(action);
                        }
                    }
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                let result = store.dispatch(action);
                if result.changed {
                    should_render = true;
                }
                for effect in result.effects {
                    handle_effect(effect, &source, &action_tx);
                }
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}
