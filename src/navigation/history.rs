//! History types.

use crate::query::QueryMap;
use log::*;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Holder of the current location query.
///
/// Implementations own the query; readers always get a fresh copy and writers
/// always replace it whole.
pub trait History {
    /// Return the current query.
    fn query(&self) -> QueryMap;

    /// Replace the current query.
    fn set_query(&mut self, query: QueryMap);
}

impl<H: History + ?Sized> History for &mut H {
    fn query(&self) -> QueryMap {
        (**self).query()
    }

    fn set_query(&mut self, query: QueryMap) {
        (**self).set_query(query)
    }
}

impl<H: History> History for Rc<RefCell<H>> {
    fn query(&self) -> QueryMap {
        self.borrow().query()
    }

    fn set_query(&mut self, query: QueryMap) {
        self.borrow_mut().set_query(query)
    }
}

type Listener = Box<dyn FnMut(&QueryMap)>;

/// In-memory history with back/forward navigation and change notification.
///
pub struct MemoryHistory {
    entries: Vec<QueryMap>,
    cursor: usize,
    version: u64,
    listeners: Vec<Listener>,
}

impl MemoryHistory {
    /// Return a new history positioned on an empty query.
    ///
    pub fn new() -> MemoryHistory {
        MemoryHistory::with_query(QueryMap::new())
    }

    /// Return a new history positioned on the given query.
    ///
    pub fn with_query(query: QueryMap) -> MemoryHistory {
        MemoryHistory {
            entries: vec![query],
            cursor: 0,
            version: 0,
            listeners: vec![],
        }
    }

    /// Register a callback invoked with the new query after every change.
    ///
    pub fn subscribe(&mut self, listener: impl FnMut(&QueryMap) + 'static) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Replace the current entry without pushing a new one.
    ///
    pub fn replace_query(&mut self, query: QueryMap) {
        self.entries[self.cursor] = query;
        self.notify();
    }

    /// Step back one entry. Returns whether the cursor moved.
    ///
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.notify();
        true
    }

    /// Step forward one entry. Returns whether the cursor moved.
    ///
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        self.notify();
        true
    }

    /// Counter bumped on every observable change.
    ///
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&mut self) {
        self.version += 1;
        trace!(
            "History changed (version {}, entry {} of {})",
            self.version,
            self.cursor + 1,
            self.entries.len()
        );
        let current = &self.entries[self.cursor];
        for listener in self.listeners.iter_mut() {
            listener(current);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        MemoryHistory::new()
    }
}

impl History for MemoryHistory {
    fn query(&self) -> QueryMap {
        self.entries[self.cursor].clone()
    }

    /// Push the query as a new entry, dropping any forward entries.
    fn set_query(&mut self, query: QueryMap) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query);
        self.cursor += 1;
        self.notify();
    }
}

impl fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
