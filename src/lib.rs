//! # Courier
//!
//! A terminal browser for saved HTTP request collections.
//!
//! ## Features
//! - Load a collection of requests from a JSON document
//! - Browse requests and inspect method, URL, headers and body
//! - Execute the selected request without blocking the interface
//! - Save collections back with stable formatting
//!
//! ## Architecture
//! Event loop with channels:
//! - UI Layer (Ratatui) - input polling and drawing
//! - App Layer (Session state machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod cli;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use app::{Pane, Session, SessionState};
pub use error::{ExecuteError, StoreError};
pub use messages::{NetworkCommand, NetworkResponse, UiEvent};
pub use models::{Collection, ExecutionResult, HttpMethod, RequestDefinition};
pub use network::NetworkActor;
pub use storage::{load_collection, save_collection};
