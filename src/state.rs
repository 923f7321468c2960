//! Application state - single source of truth.
//!
//! Components receive `&AppState` through props; only the reducer mutates it.

/// The in-progress, editable entry form data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinRequest {
    pub business_name: String,
    pub queue_id: String,
}

impl JoinRequest {
    /// Whether both fields are non-empty after trimming. This is the
    /// precondition for issuing a ticket; raw values are kept as typed.
    pub fn is_complete(&self) -> bool {
        !self.business_name.trim().is_empty() && !self.queue_id.trim().is_empty()
    }

    /// Reset both fields to empty, as on ticket close.
    pub fn clear(&mut self) {
        self.business_name.clear();
        self.queue_id.clear();
    }
}

/// The read-only confirmation record shown after a successful join.
///
/// `queue_id` and `business_name` are verbatim snapshots of the JoinRequest
/// at submission, untrimmed. Dropped on close; a re-join creates an entirely
/// new ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub queue_id: String,
    pub business_name: String,
    pub position: u64,
}

/// Which of the two screens is presented. Mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Form,
    Ticket,
}

/// Which form input has keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    BusinessName,
    QueueId,
}

impl FormField {
    /// Cycle focus to the other input.
    pub fn next(self) -> Self {
        match self {
            FormField::BusinessName => FormField::QueueId,
            FormField::QueueId => FormField::BusinessName,
        }
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Form data, mutated on every keystroke.
    pub join: JoinRequest,

    /// Current ticket (Some only while `view == Ticket`).
    pub ticket: Option<Ticket>,

    /// Which screen is visible.
    pub view: ViewState,

    /// Focused form input.
    pub focus: FormField,

    /// Error from the position source (shown on the form).
    pub join_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control is invocable: the form must be visible and
    /// both fields non-empty after trimming. While the ticket is shown the
    /// control is inert, so no second ticket can be issued.
    pub fn can_submit(&self) -> bool {
        self.view == ViewState::Form && self.join.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_is_incomplete() {
        assert!(!JoinRequest::default().is_complete());
    }

    #[test]
    fn whitespace_only_fields_are_incomplete() {
        let request = JoinRequest {
            business_name: "  ".into(),
            queue_id: "Q1".into(),
        };
        assert!(!request.is_complete());

        let request = JoinRequest {
            business_name: "Joe's Diner".into(),
            queue_id: "\t".into(),
        };
        assert!(!request.is_complete());
    }

    #[test]
    fn padded_fields_are_complete() {
        let request = JoinRequest {
            business_name: " Joe's Diner ".into(),
            queue_id: "Q42".into(),
        };
        assert!(request.is_complete());
    }

    #[test]
    fn cannot_submit_while_ticket_shown() {
        let mut state = AppState::new();
        state.join.business_name = "Cafe X".into();
        state.join.queue_id = "Q9".into();
        assert!(state.can_submit());

        state.view = ViewState::Ticket;
        assert!(!state.can_submit());
    }

    #[test]
    fn focus_cycles_between_both_fields() {
        assert_eq!(FormField::BusinessName.next(), FormField::QueueId);
        assert_eq!(FormField::QueueId.next(), FormField::BusinessName);
    }
}
