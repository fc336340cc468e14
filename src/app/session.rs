//! Session - dispatches UI events and network responses against the state
//! and the borrowed collection

use ratatui::text::Text;
use tokio::sync::mpsc;

use crate::app::state::SessionState;
use crate::messages::{NetworkCommand, NetworkResponse, UiEvent};
use crate::models::{Collection, RequestDefinition};
use crate::ui::{self, Theme};

/// Interactive session over one collection
pub struct Session<'c> {
    state: SessionState,
    collection: &'c mut Collection,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    theme: Theme,
}

impl<'c> Session<'c> {
    pub fn new(
        collection: &'c mut Collection,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
    ) -> Self {
        Session {
            state: SessionState::new(collection),
            collection,
            network_tx,
            theme: Theme::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn collection(&self) -> &Collection {
        &*self.collection
    }

    pub fn is_terminated(&self) -> bool {
        self.state.terminated
    }

    /// Handle a UI event, returns true if quit was requested
    pub fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        if self.state.terminated {
            return true;
        }

        match event {
            UiEvent::Resize { width, height } => self.state.resize(width, height),
            UiEvent::FocusNext => self.state.focus_next(),
            UiEvent::MoveUp => self.state.move_up(self.collection),
            UiEvent::MoveDown => self.state.move_down(self.collection),
            UiEvent::Activate => {
                if let Some(cmd) = self.state.activate(self.collection) {
                    if let Err(mpsc::error::SendError(cmd)) = self.network_tx.send(cmd) {
                        tracing::warn!("Network task is gone, execution dropped");
                        if let NetworkCommand::Execute { id, .. } = cmd {
                            self.state.settle(id);
                        }
                    }
                }
            }
            UiEvent::Quit => {
                self.state.quit();
                let _ = self.network_tx.send(NetworkCommand::Shutdown);
                return true;
            }
        }

        false
    }

    /// Feed back an execution outcome. Returns whether the view changed.
    pub fn handle_response(&mut self, response: NetworkResponse) -> bool {
        self.state.handle_response(response)
    }

    pub fn add_request(&mut self, request: RequestDefinition) {
        self.state.add_request(self.collection, request);
    }

    pub fn remove_request(&mut self, name: &str) -> bool {
        self.state.remove_request(self.collection, name)
    }

    /// Produce the next frame's text from the current state
    pub fn render(&self) -> Text<'static> {
        ui::render(&self.state, &*self.collection, &self.theme)
    }
}
