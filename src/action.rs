//! Application actions.
//!
//! Naming convention: prefix groups the action (Join*, Ticket*), a `Did`
//! infix marks the result of external work fed back into the reducer.

use crate::dispatch;
use crate::state::Ticket;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Overwrite the business name with the latest input value.
    JoinBusinessNameChange(String),

    /// Overwrite the queue id with the latest input value.
    JoinQueueIdChange(String),

    /// Move keyboard focus to the other form input.
    JoinFocusNext,

    /// Intent: submit the form. A no-op unless the form is complete and
    /// visible; triggers the position-assignment effect.
    JoinSubmit,

    /// Result: the position source issued a ticket.
    JoinDidIssue(Ticket),

    /// Result: the position source failed; stay on the form.
    JoinDidError(String),

    /// Close the ticket and reset the form.
    TicketClose,

    /// Exit the application (handled in the main loop).
    Quit,
}

impl dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::JoinBusinessNameChange(_) => "JoinBusinessNameChange",
            Action::JoinQueueIdChange(_) => "JoinQueueIdChange",
            Action::JoinFocusNext => "JoinFocusNext",
            Action::JoinSubmit => "JoinSubmit",
            Action::JoinDidIssue(_) => "JoinDidIssue",
            Action::JoinDidError(_) => "JoinDidError",
            Action::TicketClose => "TicketClose",
            Action::Quit => "Quit",
        }
    }
}
