//! Search input debouncing.
//!
//! Screens delay free-text search until typing pauses, so the engine doesn't
//! rerun on every keystroke. The delay is a policy in front of
//! [`crate::controller::FilterController::set_search_query`]. It never changes
//! how a query is computed.
//!
//! [`SearchDebouncer`] has no timer of its own: the caller passes the current
//! [`Instant`] in and polls. Every `push` bumps a generation counter and
//! replaces the pending query, so a superseded keystroke can never be
//! delivered. Results computed elsewhere can be checked with
//! [`SearchDebouncer::is_current`] before they are applied: newest input
//! wins, regardless of which computation finishes first.

use std::time::{Duration, Instant};

/// Identifies one pushed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    query: String,
    due: Instant,
}

#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    generation: u64,
    pending: Option<Pending>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new input, superseding anything still pending.
    pub fn push(&mut self, query: impl Into<String>, now: Instant) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(Pending {
            ticket,
            query: query.into(),
            due: now + self.delay,
        });
        ticket
    }

    /// Take the pending query if its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return self.pending.take().map(|p| p.query);
        }
        None
    }

    /// Deliver the pending query immediately (e.g. the user pressed Enter).
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// Drop the pending query and invalidate every ticket issued so far.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The ticket of the pending query, if any.
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Whether `ticket` belongs to the most recent input.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
