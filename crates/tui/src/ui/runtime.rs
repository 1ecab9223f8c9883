//! Runtime: terminal lifecycle, event loop, and effect execution.
//!
//! Responsibilities
//! - Own the terminal (raw mode, alternate screen, mouse capture).
//! - Drive a single event loop over input, a housekeeping tick, and Ctrl+C.
//! - Route events through `MainView` and execute the returned `Effect`s;
//!   navigation effects move the router and trigger a reconciliation pass,
//!   so the header is re-derived from the path after every location change.
//! - Render only after something happened.
//!
//! Input is read on a dedicated task that blocks on `crossterm` and forwards
//! events over a channel; keeping `poll()` and `read()` together avoids lost
//! events in some terminals. Handlers run to completion before the next
//! event is taken, so a frame never observes a half-applied transition.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kiosk_site::SiteRegistry;
use kiosk_types::{Effect, Msg};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::RunOptions;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a channel. Mouse-move events are throttled to one
/// per 16 ms; everything else passes through untouched.
fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(sixteen_ms) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            if last_mouse_move.elapsed() < sixteen_ms {
                                continue;
                            }
                            last_mouse_move = Instant::now();
                        }
                        if sender.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!(%error, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!(%error, "failed to poll terminal events");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Rebuilds focus over the header items and draws one frame.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(&app.nav, Some(old_focus));
    if app.focus.focused().is_none() {
        app.focus.first();
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes pending effects. Returns `true` when the application should exit.
fn process_effects(app: &mut App, effects: &mut Vec<Effect>) -> bool {
    let mut quit = false;
    for effect in effects.drain(..) {
        match effect {
            Effect::Navigate(path) => {
                if app.router.navigate(&path) {
                    app.apply_location_change();
                }
            }
            Effect::NavigateBack => {
                if app.router.back() {
                    app.apply_location_change();
                }
            }
            Effect::NavigateForward => {
                if app.router.forward() {
                    app.apply_location_change();
                }
            }
            Effect::CopyToClipboard(text) => copy_to_clipboard(&text),
            Effect::Quit => quit = true,
        }
    }
    quit
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(error) = clipboard.set_text(text.to_string()) {
                tracing::warn!(%error, "failed to copy to clipboard");
            }
        }
        Err(error) => tracing::warn!(%error, "clipboard unavailable"),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on the way out.
pub async fn run_app(site: SiteRegistry, options: RunOptions) -> Result<()> {
    let mut input_receiver = spawn_input_task();
    let mut main_view = MainView::default();
    let mut app = App::new(site, &options);
    let mut terminal = setup_terminal()?;

    // Classify the initial layout before the first frame.
    let mut last_size = crossterm::terminal::size().ok();
    if let Some((width, height)) = last_size {
        let _ = app.update(&Msg::Resize(width, height));
    }

    let mut effects: Vec<Effect> = Vec::new();
    let mut ticker = time::interval(Duration::from_millis(500));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(event) => {
                        if let Event::Key(key_event) = event
                            && key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, &Msg::Tick));
                // Fallback: some terminals drop resize notifications, so poll
                // the size on every tick as well.
                if let Ok((width, height)) = crossterm::terminal::size()
                    && last_size != Some((width, height))
                {
                    last_size = Some((width, height));
                    effects.extend(main_view.handle_message(&mut app, &Msg::Resize(width, height)));
                    needs_render = true;
                }
            }

            _ = signal::ctrl_c() => break,
        }

        if !effects.is_empty() {
            needs_render = true;
            if process_effects(&mut app, &mut effects) {
                break;
            }
        }
        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
