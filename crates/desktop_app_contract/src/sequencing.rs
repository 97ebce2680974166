//! Request sequencing for cached collections fetched by several panels.
//!
//! Every fetch takes a ticket before it is issued. A response may replace the cached
//! collection only if its ticket is newer than the last one applied, so the most recently
//! issued request wins regardless of arrival order.

use std::{cell::Cell, rc::Rc};

/// Issue-order stamp attached to one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

#[derive(Debug, Clone, Default)]
/// Shared ticket counter for one cached collection.
pub struct FetchSequencer {
    last_issued: Rc<Cell<u64>>,
}

impl FetchSequencer {
    /// Issues the next ticket.
    pub fn issue(&self) -> FetchTicket {
        let next = self.last_issued.get() + 1;
        self.last_issued.set(next);
        FetchTicket(next)
    }

    /// Returns whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        self.last_issued.get() == ticket.0
    }
}

/// Cached collection plus the ticket of the snapshot it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedCache<T> {
    /// Latest accepted snapshot.
    pub items: Vec<T>,
    applied: Option<FetchTicket>,
}

impl<T> Default for SequencedCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            applied: None,
        }
    }
}

impl<T> SequencedCache<T> {
    /// Replaces the snapshot when `ticket` is newer than the applied one.
    ///
    /// Returns whether the snapshot was accepted.
    pub fn accept(&mut self, ticket: FetchTicket, items: Vec<T>) -> bool {
        if self.applied.is_some_and(|applied| ticket <= applied) {
            return false;
        }
        self.items = items;
        self.applied = Some(ticket);
        true
    }

    /// Drops cached items and refuses every ticket up to and including `floor`.
    ///
    /// `floor` is issued at clear time, so responses to requests still in flight are dropped.
    pub fn clear_through(&mut self, floor: FetchTicket) {
        self.items.clear();
        self.applied = Some(self.applied.map_or(floor, |applied| applied.max(floor)));
    }

    /// Ticket of the held snapshot.
    pub fn applied(&self) -> Option<FetchTicket> {
        self.applied
    }
}
