//! Minimal action-dispatch layer: store, component trait, event plumbing.
//!
//! The pattern is Redux-like: components translate terminal events into
//! actions, a pure reducer folds actions into state and declares effects,
//! and the main loop processes effects outside the reducer.

mod component;
mod event;
mod store;

pub mod testing;

pub use component::Component;
pub use event::{EventKind, RawEvent, process_raw_event, spawn_event_poller};
pub use store::{Action, DispatchResult, EffectReducer, EffectStore};
