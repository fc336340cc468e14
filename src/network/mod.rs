//! Network layer - HTTP request execution
//!
//! The network actor receives execution commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
