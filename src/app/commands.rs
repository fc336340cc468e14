//! Command handlers - state transitions for each session event

use crate::app::state::{PendingExecution, Pane, SessionState};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Collection, RequestDefinition};

impl SessionState {
    // ========================
    // Viewport and focus
    // ========================

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn focus_next(&mut self) {
        self.active_pane = self.active_pane.next();
    }

    // ========================
    // Cursor
    // ========================

    pub fn move_up(&mut self, collection: &Collection) {
        if self.active_pane != Pane::List {
            return;
        }
        if let Some(i) = self.selected {
            if i > 0 {
                self.reselect(Some(i - 1));
            }
        }
        debug_assert!(self.cursor_is_valid(collection));
    }

    pub fn move_down(&mut self, collection: &Collection) {
        if self.active_pane != Pane::List {
            return;
        }
        if let Some(i) = self.selected {
            if i + 1 < collection.len() {
                self.reselect(Some(i + 1));
            }
        }
        debug_assert!(self.cursor_is_valid(collection));
    }

    /// Point the cursor at a (possibly) different request. Results of calls
    /// issued before this point become stale; the calls stay outstanding.
    fn reselect(&mut self, selected: Option<usize>) {
        self.selected = selected;
        self.selection_epoch += 1;
        self.last_result = None;
    }

    // ========================
    // Collection mutations
    // ========================

    /// Append a request, selecting it if the collection was empty.
    pub fn add_request(&mut self, collection: &mut Collection, request: RequestDefinition) {
        collection.add_request(request);
        if self.selected.is_none() {
            self.reselect(Some(0));
        }
    }

    /// Remove the first request named `name` and re-clamp the cursor.
    /// Returns false when nothing matched.
    pub fn remove_request(&mut self, collection: &mut Collection, name: &str) -> bool {
        let Some(removed) = collection.remove_request(name) else {
            return false;
        };

        // A deleted request's call can no longer be matched to a row
        self.in_flight.retain(|p| p.index != removed);
        for p in &mut self.in_flight {
            if p.index > removed {
                p.index -= 1;
            }
        }

        match self.selected {
            Some(_) if collection.is_empty() => self.reselect(None),
            // Same request, new position
            Some(sel) if removed < sel => self.selected = Some(sel - 1),
            Some(sel) if removed == sel => self.reselect(Some(sel.min(collection.len() - 1))),
            _ => {}
        }
        true
    }

    // ========================
    // Request execution
    // ========================

    /// Prepare an execution for the selected request.
    ///
    /// Returns `None` when nothing is selected, the session is over, or the
    /// selected request already has a call in flight (even one issued before
    /// the cursor last moved).
    pub fn activate(&mut self, collection: &Collection) -> Option<NetworkCommand> {
        if self.terminated {
            return None;
        }
        let index = self.selected?;
        let request = collection.get(index)?.clone();

        if self.is_executing() {
            tracing::debug!(name = %request.name, "Execution already in flight, ignoring");
            return None;
        }

        let id = self.next_id();
        let epoch = self.selection_epoch;
        self.in_flight.push(PendingExecution { id, epoch, index });

        Some(NetworkCommand::Execute { id, epoch, request })
    }

    /// Apply a response if it still belongs to the current selection.
    /// Returns whether the state changed.
    pub fn handle_response(&mut self, response: NetworkResponse) -> bool {
        if self.terminated {
            return false;
        }
        self.settle(response.id());

        if response.epoch() != self.selection_epoch {
            tracing::debug!(
                id = response.id(),
                epoch = response.epoch(),
                current = self.selection_epoch,
                "Discarding stale result"
            );
            return false;
        }

        self.last_result = Some(response.into_outcome());
        true
    }

    // ========================
    // Lifecycle
    // ========================

    pub fn quit(&mut self) {
        self.terminated = true;
        self.in_flight.clear();
    }
}
