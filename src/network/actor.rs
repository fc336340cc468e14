//! Network actor - runs request executions in the Tokio runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::ExecuteError;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_request};

/// Network actor that executes requests off the input path
pub struct NetworkActor {
    client: reqwest::Client,
    timeout: Duration,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
        timeout: Duration,
    ) -> Result<Self, ExecuteError> {
        Ok(NetworkActor {
            client: create_client(timeout)?,
            timeout,
            response_tx,
            active_requests: JoinSet::new(),
        })
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, epoch, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let timeout = self.timeout;

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %request.url, method = %request.method, "Executing request");
                                let outcome = execute_request(&client, &request, timeout).await;
                                match &outcome {
                                    Ok(result) => tracing::info!(
                                        id,
                                        status = result.status_code,
                                        elapsed_ms = result.duration.as_millis() as u64,
                                        "Request completed"
                                    ),
                                    Err(e) => tracing::warn!(id, error = %e, "Request failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::from_outcome(id, epoch, outcome));
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            if !self.active_requests.is_empty() {
                                tracing::info!(pending = self.active_requests.len(), "Abandoning in-flight requests");
                            }
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                Some(_result) = self.active_requests.join_next() => {
                    // Task completed; it already reported its outcome
                }
            }
        }
    }
}
