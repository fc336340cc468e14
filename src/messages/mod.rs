//! Message types for inter-layer communication.
//!
//! Input events flow from the terminal into the session; execution commands
//! flow from the session to the network task and its responses flow back.

pub mod ui_events;
pub mod network;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
