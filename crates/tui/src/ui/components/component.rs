//! Component trait for the kiosk UI.
//!
//! Components own local presentation behavior: they react to events with
//! state changes on `App` (through its handlers), report side effects back
//! to the runtime as `Effect`s, and render into the area the main view
//! allocates for them.

use crossterm::event::{KeyEvent, MouseEvent};
use kiosk_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

pub(crate) trait Component {
    /// Handle an application-level message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component. State changes belong in the event handlers; the
    /// exception is recording rendered areas for hit testing.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints to show in the bottom bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
