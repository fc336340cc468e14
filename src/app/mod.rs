//! App layer - session state machine
//!
//! The session receives UI events and network responses, updates its state,
//! and emits execution commands to the network layer.

pub mod state;
pub mod commands;
pub mod session;

pub use state::{Pane, SessionState};
pub use session::Session;
