//! Last-queried legal moves for the selected square
//!
//! Queries are tagged with a sequence number when issued. A response is only
//! stored if no newer query was issued in the meantime, so a slow answer for
//! a previously selected square cannot overwrite the current selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use boardsync_domain::{LegalMove, Square};

/// Proof that a query was issued; hand it back with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    seq: u64,
    square: Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub moves: Vec<LegalMove>,
}

#[derive(Default)]
pub struct LegalMoveSelection {
    issued: AtomicU64,
    current: Mutex<Option<Selection>>,
}

impl LegalMoveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new query for `square`, superseding any in flight.
    pub fn begin(&self, square: Square) -> SelectionTicket {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        SelectionTicket { seq, square }
    }

    /// Store the response for `ticket`. Returns false if the ticket is stale.
    pub fn complete(&self, ticket: SelectionTicket, moves: Vec<LegalMove>) -> bool {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if ticket.seq != self.issued.load(Ordering::SeqCst) {
            tracing::debug!(
                square = %ticket.square,
                "Dropping legal moves for a superseded selection"
            );
            return false;
        }
        *current = Some(Selection {
            square: ticket.square,
            moves,
        });
        true
    }

    pub fn current(&self) -> Option<Selection> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Forget the selection and invalidate any query still in flight.
    pub fn clear(&self) {
        self.issued.fetch_add(1, Ordering::SeqCst);
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
