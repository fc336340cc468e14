//! Session state - pure data structure with no I/O logic

use crate::error::ExecuteError;
use crate::models::{Collection, ExecutionResult};

/// Pane holding input focus
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Pane {
    #[default]
    List,
    Detail,
}

impl Pane {
    pub fn next(&self) -> Pane {
        match self {
            Pane::List => Pane::Detail,
            Pane::Detail => Pane::List,
        }
    }
}

/// A call that has not answered yet
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingExecution {
    pub id: u64,
    pub epoch: u64,
    /// Position of the executed request in the collection
    pub index: usize,
}

/// Outcome of the latest execution for the current selection
pub type LastResult = Result<ExecutionResult, ExecuteError>;

/// Session state - pure data, no I/O
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Cursor into the collection; `None` only when the collection is empty
    pub selected: Option<usize>,
    pub active_pane: Pane,
    pub viewport_width: u16,
    pub viewport_height: u16,
    pub last_result: Option<LastResult>,

    /// Advances whenever the cursor moves to a different request. Responses
    /// tagged with an older epoch are stale.
    pub selection_epoch: u64,
    /// Outstanding calls, at most one per request
    pub in_flight: Vec<PendingExecution>,
    pub next_request_id: u64,
    pub terminated: bool,
}

impl SessionState {
    pub fn new(collection: &Collection) -> Self {
        SessionState {
            selected: if collection.is_empty() { None } else { Some(0) },
            active_pane: Pane::List,
            viewport_width: 0,
            viewport_height: 0,
            last_result: None,
            selection_epoch: 0,
            in_flight: Vec::new(),
            next_request_id: 1,
            terminated: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// True while the selected request has a call in flight
    pub fn is_executing(&self) -> bool {
        self.selected.is_some_and(|i| self.in_flight.iter().any(|p| p.index == i))
    }

    /// Forget the outstanding call `id`, returning it if it was known
    pub fn settle(&mut self, id: u64) -> Option<PendingExecution> {
        let pos = self.in_flight.iter().position(|p| p.id == id)?;
        Some(self.in_flight.remove(pos))
    }

    /// Whether the cursor is a valid position for `collection`
    pub fn cursor_is_valid(&self, collection: &Collection) -> bool {
        match self.selected {
            None => collection.is_empty(),
            Some(i) => i < collection.len(),
        }
    }
}
