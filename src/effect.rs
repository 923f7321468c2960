//! Effects - side effects declared by the reducer.
//!
//! Effects are descriptions of external work, not the work itself. The
//! handler runs them against the injected position source and feeds the
//! outcome back as actions, keeping the reducer pure.

use tokio::sync::mpsc;

use crate::action::Action;
use crate::position::PositionSource;
use crate::state::Ticket;

/// Side effects that can be triggered by actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the position source for a spot in the queue. Field values are
    /// verbatim snapshots of the form at submission.
    AssignPosition {
        business_name: String,
        queue_id: String,
    },
}

/// Run an effect and feed the result back through the action channel.
pub fn handle_effect(
    effect: Effect,
    source: &dyn PositionSource,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        Effect::AssignPosition {
            business_name,
            queue_id,
        } => {
            let action = match source.assign(&business_name, &queue_id) {
                Ok(position) => Action::JoinDidIssue(Ticket {
                    queue_id,
                    business_name,
                    position,
                }),
                Err(e) => Action::JoinDidError(e.to_string()),
            };
            let _ = action_tx.send(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{FixedPosition, PositionError};

    struct FailingSource;

    impl PositionSource for FailingSource {
        fn assign(&self, _business_name: &str, _queue_id: &str) -> Result<u64, PositionError> {
            Err(PositionError::Unavailable("queue service offline".into()))
        }
    }

    #[test]
    fn assign_position_issues_ticket() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let effect = Effect::AssignPosition {
            business_name: "Joe's Diner".into(),
            queue_id: "Q42".into(),
        };

        handle_effect(effect, &FixedPosition::default(), &tx);

        let action = rx.try_recv().unwrap();
        assert_eq!(
            action,
            Action::JoinDidIssue(Ticket {
                queue_id: "Q42".into(),
                business_name: "Joe's Diner".into(),
                position: 7,
            })
        );
    }

    #[test]
    fn failing_source_reports_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let effect = Effect::AssignPosition {
            business_name: "Cafe X".into(),
            queue_id: "Q9".into(),
        };

        handle_effect(effect, &FailingSource, &tx);

        match rx.try_recv().unwrap() {
            Action::JoinDidError(msg) => assert!(msg.contains("queue service offline")),
            other => panic!("expected JoinDidError, got {:?}", other),
        }
    }
}
