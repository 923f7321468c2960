//! Effect-aware state store with a reducer pattern.
//!
//! The reducer is a pure function: it mutates state, reports whether a
//! re-render is needed, and returns declarative effects. The work an effect
//! describes happens outside the store, so every state transition stays
//! synchronous and testable.

use std::fmt::Debug;
use std::marker::PhantomData;

/// An action that can be dispatched to the store.
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for dispatch logging.
    fn name(&self) -> &'static str;
}

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified (re-render hint).
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed and a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

/// A reducer that handles an action and declares resulting effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Centralized state store. All mutations go through `dispatch`.
pub struct EffectStore<S, A: Action, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<A>,
}

impl<S, A: Action, E> EffectStore<S, A, E> {
    /// Create a store with initial state and reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Run the action through the reducer, logging the dispatch.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        tracing::debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "action dispatched"
        );
        result
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Set(i32),
        Ping,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Set(_) => "Set",
                TestAction::Ping => "Ping",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum TestEffect {
        Pong,
    }

    fn reducer(state: &mut i32, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Set(v) => {
                *state = v;
                DispatchResult::changed()
            }
            TestAction::Ping => DispatchResult::effect(TestEffect::Pong),
        }
    }

    #[test]
    fn dispatch_mutates_state() {
        let mut store = EffectStore::new(0, reducer);
        let result = store.dispatch(TestAction::Set(42));
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(*store.state(), 42);
    }

    #[test]
    fn dispatch_returns_effects() {
        let mut store = EffectStore::new(0, reducer);
        let result = store.dispatch(TestAction::Ping);
        assert!(!result.changed);
        assert_eq!(result.effects, vec![TestEffect::Pong]);
    }
}
