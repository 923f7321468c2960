//! qjoin - terminal queue-join form.
//!
//! The user enters a business name and queue ID, submits, and is shown a
//! ticket with their (mocked) position in line. Closing the ticket resets
//! the form.
//!
//! All behavior lives in a pure reducer over [`state::AppState`]; components
//! only translate key events into [`action::Action`]s and render from state.
//! Position assignment is an injected [`position::PositionSource`], reached
//! through a declarative [`effect::Effect`].

pub mod action;
pub mod components;
pub mod dispatch;
pub mod effect;
pub mod position;
pub mod reducer;
pub mod state;
pub mod ui;
