//! Component trait for pure UI elements.

use ratatui::{Frame, layout::Rect};

use crate::dispatch::event::EventKind;

/// A UI component that renders from props and emits actions.
///
/// Rules:
/// 1. Props carry ALL read-only data needed for rendering.
/// 2. `handle_event` returns actions, never mutates external state.
/// 3. `render` is a function of props plus internal UI state (cursor position,
///    scroll offset) kept in `&mut self`.
///
/// Focus is passed through props, not inferred from the event.
pub trait Component<A = ()> {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = A>`: `None`, `Some(action)`, or a
    /// `Vec`. Render-only components use the default (no actions).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
