//! Reducer - the join-flow state machine as a pure function.
//!
//! Two views, two transitions:
//!
//! ```text
//! Form --JoinSubmit [form complete]--> (AssignPosition) --JoinDidIssue--> Ticket
//! Ticket --TicketClose--> Form (full reset)
//! ```
//!
//! Nothing here can fail: invalid submissions are no-ops, guarded by
//! `AppState::can_submit`, and the UI renders the submit control disabled for
//! the same condition. Disablement is the only feedback for incomplete input.

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::{AppState, ViewState};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::JoinBusinessNameChange(value) => {
            state.join.business_name = value;
            DispatchResult::changed()
        }

        Action::JoinQueueIdChange(value) => {
            state.join.queue_id = value;
            DispatchResult::changed()
        }

        Action::JoinFocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::JoinSubmit => {
            // Inert while the form is incomplete or a ticket is already
            // shown. No error is raised; the state simply does not move.
            if !state.can_submit() {
                return DispatchResult::unchanged();
            }
            state.join_error = None;
            DispatchResult::changed_with(Effect::AssignPosition {
                business_name: state.join.business_name.clone(),
                queue_id: state.join.queue_id.clone(),
            })
        }

        Action::JoinDidIssue(ticket) => {
            if state.view == ViewState::Ticket {
                return DispatchResult::unchanged();
            }
            state.ticket = Some(ticket);
            state.view = ViewState::Ticket;
            DispatchResult::changed()
        }

        Action::JoinDidError(message) => {
            // Stay on the form, re-submittable.
            state.join_error = Some(message);
            DispatchResult::changed()
        }

        Action::TicketClose => {
            if state.view != ViewState::Ticket {
                return DispatchResult::unchanged();
            }
            // Single-step transition and reset: afterwards the form is
            // indistinguishable from initial mount.
            state.view = ViewState::Form;
            state.ticket = None;
            state.join.clear();
            state.focus = Default::default();
            state.join_error = None;
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(), // handled in main loop
    }
}
