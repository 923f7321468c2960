//! Ticket view: read-only confirmation modal shown after a successful join.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::action::Action;
use crate::components::{Component, modal};
use crate::dispatch::EventKind;
use crate::state::Ticket;

pub const TICKET_ICON: &str = "🎟 ";

/// Props for TicketView.
pub struct TicketViewProps<'a> {
    pub ticket: &'a Ticket,
    pub is_focused: bool,
}

/// Modal presentation of the current ticket. Pure projection: nothing here
/// mutates the ticket.
#[derive(Default)]
pub struct TicketView;

impl TicketView {
    fn detail_row<'a>(label: &'a str, value: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{:<15}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White).bold()),
        ])
    }
}

impl Component<Action> for TicketView {
    type Props<'a> = TicketViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => vec![Action::TicketClose],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: TicketViewProps<'_>) {
        if area.width < 30 || area.height < 10 {
            return;
        }

        let ticket = props.ticket;
        let modal_area = modal::centered_rect(40, 10, area);
        modal::render_modal(frame, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" {}Queue Ticket ", TICKET_ICON))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        frame.render_widget(block.clone(), modal_area);
        let inner = block.inner(modal_area);

        let [details_area, _, close_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Fixed label ordering: Queue ID, Business, Position.
        let position = ticket.position.to_string();
        let details = vec![
            Self::detail_row("Queue ID:", &ticket.queue_id),
            Line::default(),
            Self::detail_row("Business:", &ticket.business_name),
            Line::default(),
            Self::detail_row("Your Position:", &position),
        ];
        frame.render_widget(Paragraph::new(details), details_area);

        let close = Line::from(vec![
            Span::styled("[ Close ]", Style::default().fg(Color::Cyan).bold()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(close), close_area);
    }
}
