//! Network messages - communication between the session and the network task

use crate::error::ExecuteError;
use crate::models::{ExecutionResult, RequestDefinition};

/// Commands sent from the session to the network task
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute one request. `epoch` identifies the selection it was issued for.
    Execute {
        id: u64,
        epoch: u64,
        request: RequestDefinition,
    },
    /// Abandon everything in flight and stop
    Shutdown,
}

/// Responses sent from the network task back to the session
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Success {
        id: u64,
        epoch: u64,
        result: ExecutionResult,
    },
    Error {
        id: u64,
        epoch: u64,
        error: ExecuteError,
    },
}

impl NetworkResponse {
    pub fn from_outcome(id: u64, epoch: u64, outcome: Result<ExecutionResult, ExecuteError>) -> Self {
        match outcome {
            Ok(result) => NetworkResponse::Success { id, epoch, result },
            Err(error) => NetworkResponse::Error { id, epoch, error },
        }
    }

    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Success { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    /// Selection epoch the originating command was tagged with
    pub fn epoch(&self) -> u64 {
        match self {
            NetworkResponse::Success { epoch, .. } => *epoch,
            NetworkResponse::Error { epoch, .. } => *epoch,
        }
    }

    pub fn into_outcome(self) -> Result<ExecutionResult, ExecuteError> {
        match self {
            NetworkResponse::Success { result, .. } => Ok(result),
            NetworkResponse::Error { error, .. } => Err(error),
        }
    }
}
