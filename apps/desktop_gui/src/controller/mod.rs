//! Controller layer: UI events, reducer-like state transitions, and command orchestration.

pub mod events;
pub mod form;
pub mod orchestration;
pub mod state;
