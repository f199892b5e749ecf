//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms for a smooth spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.
//!
//! ## Threading
//!
//! `App` is only ever touched on this loop's thread. The spawned lookup task
//! sends its outcome back as a single `Action` over an mpsc channel, so the
//! success/failure transition is applied in one `update` call between draws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::lookup::{CountrySource, RestCountriesClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CountrySource> =
        Arc::new(RestCountriesClient::new(Some(config.base_url.clone())));
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background lookup tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.dimmed = app.is_loading;

        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Esc and Ctrl+C both quit; an in-flight lookup is abandoned
            if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Enter while a lookup is in flight is swallowed here so the
            // typed text survives in the buffer.
            if matches!(event, TuiEvent::Submit) && app.is_loading {
                debug!("Enter ignored: lookup already in flight");
                continue;
            }

            // InputBox handles everything else
            if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                let effect = update(&mut app, Action::Submit(text));
                if let Effect::SpawnLookup(name) = effect {
                    spawn_lookup(app.source.clone(), name, tx.clone());
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (settled lookups)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnLookup(name) => {
                    spawn_lookup(app.source.clone(), name, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawn the lookup task for `name`. The task never touches `App`; it sends
/// exactly one `LookupFinished` back over `tx` when it settles.
pub fn spawn_lookup(source: Arc<dyn CountrySource>, name: String, tx: mpsc::Sender<Action>) {
    info!("Spawning lookup for '{}'", name);
    tokio::spawn(async move {
        let result = source.lookup(&name).await;
        if tx.send(Action::LookupFinished(result)).is_err() {
            warn!("Failed to publish lookup result: receiver dropped");
        }
    });
}
