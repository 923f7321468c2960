//! Single-line labeled text input.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::Component;
use crate::dispatch::EventKind;

/// Props for TextInput.
pub struct TextInputProps<'a, A> {
    /// Current input value.
    pub value: &'a str,
    /// Field label rendered as the border title.
    pub label: &'a str,
    /// Placeholder text when empty.
    pub placeholder: &'a str,
    /// Whether this input has focus.
    pub is_focused: bool,
    /// Callback when the value changes.
    pub on_change: fn(String) -> A,
    /// Callback when the user presses Enter.
    pub on_submit: fn() -> A,
}

/// A single-line text input with cursor.
///
/// Handles typing, backspace, delete, and cursor movement. Emits `on_change`
/// for each edit and `on_submit` for Enter. The value itself lives in app
/// state; only the cursor is internal UI state.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index).
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bordered input needs three terminal rows.
    pub const HEIGHT: u16 = 3;

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !value.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < value.len() && !value.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let before_cursor = &value[..self.cursor];
        let char_start = before_cursor
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(new_value)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        // The value may have been reset since the last event.
        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A: start of line
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                // Ctrl+E: end of line
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                // Ctrl+U: clear line
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Delete => self.delete_char_at(props.value).map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)()),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let display_text = if props.value.is_empty() {
            props.placeholder
        } else {
            props.value
        };

        let style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(display_text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", props.label)),
        );

        frame.render_widget(paragraph, area);

        if props.is_focused {
            // Inside the border, clamped to the drawable width.
            let cursor_x = area.x + 1 + self.cursor as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::{ActionAssertions, RenderHarness, char_key, code_key, ctrl_key};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Submit,
    }

    fn props(value: &str, is_focused: bool) -> TextInputProps<'_, TestAction> {
        TextInputProps {
            value,
            label: "Business Name",
            placeholder: "Enter business name",
            is_focused,
            on_change: TestAction::Change,
            on_submit: || TestAction::Submit,
        }
    }

    #[test]
    fn typing_emits_change() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(char_key('a')), props("", true))
            .into_iter()
            .collect();
        actions.assert_first(TestAction::Change("a".into()));
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(char_key('!')), props("hello", true))
            .into_iter()
            .collect();
        actions.assert_first(TestAction::Change("hello!".into()));
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let actions: Vec<_> = input
            .handle_event(
                &EventKind::Key(code_key(KeyCode::Backspace)),
                props("hello", true),
            )
            .into_iter()
            .collect();
        actions.assert_first(TestAction::Change("hell".into()));
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn backspace_at_start_is_inert() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(
                &EventKind::Key(code_key(KeyCode::Backspace)),
                props("hello", true),
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(ctrl_key('u')), props("hello", true))
            .into_iter()
            .collect();
        actions.assert_first(TestAction::Change(String::new()));
    }

    #[test]
    fn enter_submits() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(code_key(KeyCode::Enter)), props("hello", true))
            .into_iter()
            .collect();
        actions.assert_first(TestAction::Submit);
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(char_key('a')), props("", false))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut harness = RenderHarness::new(30, 3);
        let mut input = TextInput::new();
        let output = harness.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("", true));
        });
        assert!(output.contains("Enter business name"));
        assert!(output.contains("Business Name"));
    }

    #[test]
    fn renders_value_over_placeholder() {
        let mut harness = RenderHarness::new(30, 3);
        let mut input = TextInput::new();
        let output = harness.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("Joe's Diner", true));
        });
        assert!(output.contains("Joe's Diner"));
        assert!(!output.contains("Enter business name"));
    }
}
