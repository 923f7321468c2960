//! Join form: the two text inputs and the submit control.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::action::Action;
use crate::components::{Component, HelpBar, HelpBarProps, TextInput, TextInputProps};
use crate::dispatch::EventKind;
use crate::state::{AppState, FormField, ViewState};

/// Props for JoinForm - read-only view of state.
pub struct JoinFormProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The join form component. Owns the two inputs' cursor state; all field
/// values live in `AppState` and flow back in through props.
#[derive(Default)]
pub struct JoinForm {
    business_input: TextInput,
    queue_input: TextInput,
}

impl JoinForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn business_props<'a>(state: &'a AppState, is_focused: bool) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: &state.join.business_name,
            label: "Business Name",
            placeholder: "Enter business name",
            is_focused,
            on_change: Action::JoinBusinessNameChange,
            on_submit: || Action::JoinSubmit,
        }
    }

    fn queue_props<'a>(state: &'a AppState, is_focused: bool) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: &state.join.queue_id,
            label: "Queue ID",
            placeholder: "Enter queue ID",
            is_focused,
            on_change: Action::JoinQueueIdChange,
            on_submit: || Action::JoinSubmit,
        }
    }
}

impl Component<Action> for JoinForm {
    type Props<'a> = JoinFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                return vec![Action::JoinFocusNext];
            }
            KeyCode::Esc => return vec![Action::Quit],
            _ => {}
        }

        let state = props.state;
        match state.focus {
            FormField::BusinessName => self
                .business_input
                .handle_event(event, Self::business_props(state, true))
                .into_iter()
                .collect(),
            FormField::QueueId => self
                .queue_input
                .handle_event(event, Self::queue_props(state, true))
                .into_iter()
                .collect(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: JoinFormProps<'_>) {
        let state = props.state;

        // Centered card, help bar on the bottom row of the full area.
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let [card] = Layout::vertical([Constraint::Length(13)])
            .flex(Flex::Center)
            .areas(main_area);
        let [card] = Layout::horizontal([Constraint::Length(44)])
            .flex(Flex::Center)
            .areas(card);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Join Queue ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(block.clone(), card);
        let inner = block.inner(card);

        let [business_area, queue_area, error_area, _, button_area] = Layout::vertical([
            Constraint::Length(TextInput::HEIGHT),
            Constraint::Length(TextInput::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let business_focused =
            props.is_focused && state.view == ViewState::Form && state.focus == FormField::BusinessName;
        let queue_focused =
            props.is_focused && state.view == ViewState::Form && state.focus == FormField::QueueId;

        self.business_input
            .render(frame, business_area, Self::business_props(state, business_focused));
        self.queue_input
            .render(frame, queue_area, Self::queue_props(state, queue_focused));

        if let Some(error) = &state.join_error {
            let line = Line::from(error.as_str())
                .style(Style::default().fg(Color::Red))
                .centered();
            frame.render_widget(Paragraph::new(line), error_area);
        }

        // The submit control: inert and gray until the form is complete.
        let (label, style) = if state.view == ViewState::Ticket {
            ("[ Joined! ]", Style::default().fg(Color::DarkGray))
        } else if state.can_submit() {
            ("[ Join Queue ]", Style::default().fg(Color::Cyan).bold())
        } else {
            ("[ Join Queue ]", Style::default().fg(Color::DarkGray))
        };
        let button = Paragraph::new(Line::from(label).style(style)).alignment(Alignment::Center);
        frame.render_widget(button, button_area);

        let mut help = HelpBar;
        help.render(frame, help_area, HelpBarProps { view: state.view });
    }
}
