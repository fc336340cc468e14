//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Collection document opened when no path is given
pub const DEFAULT_COLLECTION_PATH: &str = "collection.json";

/// Fixed timeout applied to every executed request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long the input loop waits for a terminal event before redrawing
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "courier.log";

/// Application name
pub const APP_NAME: &str = "Courier";
