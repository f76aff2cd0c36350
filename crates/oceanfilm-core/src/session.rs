//! Stale completion guard for overlapping queries
//!
//! Two searches fired in quick succession may resolve out of order, and
//! a dispatched query cannot be cancelled. [`QuerySession`] issues
//! monotonically increasing tickets so the caller can discard any
//! completion that is no longer the newest query:
//!
//! ```no_run
//! # async fn example(service: oceanfilm_core::MovieService) {
//! use oceanfilm_core::QuerySession;
//!
//! let session = QuerySession::new();
//! let ticket = session.begin();
//! let outcome = service.search_movies("matrix").await;
//! if session.is_current(ticket) {
//!     // render the outcome; otherwise a newer query superseded it
//! }
//! # }
//! ```
//!
//! The service itself stays stateless; the session is owned by the view
//! layer that spawns the queries.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues query tickets and remembers the newest one
#[derive(Debug, Default)]
pub struct QuerySession {
    latest: AtomicU64,
}

/// Proof of a started query; compare against the session on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

impl QuerySession {
    /// Creates a session with no queries issued
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new query, superseding all earlier tickets
    pub fn begin(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket still identifies the newest query
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticket_is_current() {
        let session = QuerySession::new();
        let ticket = session.begin();
        assert!(session.is_current(ticket));
    }

    #[test]
    fn test_newer_query_supersedes_older_ticket() {
        let session = QuerySession::new();
        let stale = session.begin();
        let fresh = session.begin();

        assert!(!session.is_current(stale));
        assert!(session.is_current(fresh));
    }

    #[test]
    fn test_out_of_order_completion_is_discarded() {
        let session = QuerySession::new();
        let first = session.begin();
        let second = session.begin();

        // Completions arrive in reverse dispatch order: the second
        // query's result lands and is rendered, then the first query's
        // late result must be dropped.
        assert!(session.is_current(second));
        assert!(!session.is_current(first));
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = QuerySession::new();
        let b = QuerySession::new();
        let ticket_a = a.begin();
        b.begin();
        b.begin();

        assert!(a.is_current(ticket_a));
    }
}
