//! Contextual key hints for the bottom row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::Component;
use crate::state::ViewState;

pub struct HelpBar;

pub struct HelpBarProps {
    pub view: ViewState,
}

fn hint(key: &'static str, description: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Cyan).bold()),
        Span::styled(description, Style::default().fg(Color::DarkGray)),
    ]
}

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hints: Vec<Span> = match props.view {
            ViewState::Form => [
                hint(" tab", " field  "),
                hint("enter", " join  "),
                hint("esc", " quit "),
            ]
            .concat(),
            ViewState::Ticket => [hint(" enter", " close ")].concat(),
        };

        let help = Line::from(hints).centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
