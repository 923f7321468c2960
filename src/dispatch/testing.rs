//! Test utilities: key event constructors, a render harness over ratatui's
//! `TestBackend`, and assertion helpers for emitted actions.

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer};

/// Create a `KeyEvent` for a plain character.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a non-character key.
pub fn code_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Render components into an in-memory terminal for assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Render a frame and return its contents as plain text, one line per
    /// terminal row, styling stripped.
    pub fn render_to_string_plain(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(render).expect("draw failed");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer to plain text, dropping all styling.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Assertions over the actions a component emitted.
pub trait ActionAssertions<A: Debug + PartialEq> {
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
    fn assert_empty(&self);
}

impl<A: Debug + PartialEq> ActionAssertions<A> for Vec<A> {
    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {} actions, got: {:?}",
            expected,
            self
        );
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "expected first action {:?}, got: {:?}",
            expected,
            self
        );
    }

    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {:?}", self);
    }
}
