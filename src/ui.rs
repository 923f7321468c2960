//! Top-level UI composition: routes events to the visible view and renders
//! the form with the ticket modal on top.

use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::components::{Component, JoinForm, JoinFormProps, TicketView, TicketViewProps};
use crate::dispatch::EventKind;
use crate::state::{AppState, ViewState};

/// Owns the component instances for the lifetime of the app.
#[derive(Default)]
pub struct AppUi {
    form: JoinForm,
    ticket: TicketView,
}

impl AppUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current view. The form is always drawn; the ticket modal
    /// dims it when shown.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let ticket_shown = state.view == ViewState::Ticket;

        self.form.render(
            frame,
            area,
            JoinFormProps {
                state,
                is_focused: !ticket_shown,
            },
        );

        if let Some(ticket) = &state.ticket {
            if ticket_shown {
                self.ticket.render(
                    frame,
                    area,
                    TicketViewProps {
                        ticket,
                        is_focused: true,
                    },
                );
            }
        }
    }

    /// Map a terminal event to actions for the visible view. Exactly one of
    /// the two views receives input at any time.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        match state.view {
            ViewState::Ticket => match &state.ticket {
                Some(ticket) => self
                    .ticket
                    .handle_event(
                        event,
                        TicketViewProps {
                            ticket,
                            is_focused: true,
                        },
                    )
                    .into_iter()
                    .collect(),
                None => vec![],
            },
            ViewState::Form => self
                .form
                .handle_event(
                    event,
                    JoinFormProps {
                        state,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
        }
    }
}
