//! Reload bookkeeping for list views.
//!
//! The view asks the loader before every fetch. A fetch is only needed when
//! the effective query changed, and only the newest request may land in state.

use super::ListQuery;
use log::*;

/// Generation number tagging one data-source request.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Tracks the last requested query and the newest ticket.
///
#[derive(Debug, Default)]
pub struct Loader {
    last: Option<ListQuery>,
    generation: u64,
}

impl Loader {
    pub fn new() -> Loader {
        Loader::default()
    }

    /// Return a ticket when `query` differs from the last requested one.
    ///
    pub fn begin(&mut self, query: &ListQuery) -> Option<Ticket> {
        if self.last.as_ref() == Some(query) {
            trace!("List query unchanged, skipping reload");
            return None;
        }
        Some(self.force(query))
    }

    /// Return a ticket unconditionally.
    ///
    pub fn force(&mut self, query: &ListQuery) -> Ticket {
        self.generation += 1;
        self.last = Some(query.clone());
        debug!("Issuing list ticket {} for {:?}", self.generation, query);
        Ticket(self.generation)
    }

    /// Whether a response carrying `ticket` is still wanted.
    ///
    pub fn accept(&self, ticket: Ticket) -> bool {
        let current = ticket.0 == self.generation;
        if !current {
            debug!(
                "Dropping stale list response (ticket {}, newest {})",
                ticket.0, self.generation
            );
        }
        current
    }

    /// Forget the last requested query so the next `begin` always fetches.
    ///
    pub fn reset(&mut self) {
        self.last = None;
    }
}
