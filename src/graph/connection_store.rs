//! Edge store: the list of undirected connections.

use crate::types::{normalize_name, Connection, GraphError, GraphResult};

/// Capacity-limited list of unordered station pairs.
///
/// The store only guards its own invariants (capacity, no self-links, no
/// duplicate pairs). Checking that both endpoints are real stations is the
/// job of [`StationGraph`](super::StationGraph), which owns both stores.
#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    connections: Vec<Connection>,
    /// `None` means unbounded.
    capacity: Option<usize>,
}

impl ConnectionStore {
    /// Create an empty store. `None` disables the capacity check.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            connections: Vec::with_capacity(capacity.unwrap_or(0)),
            capacity,
        }
    }

    /// Append a connection between two names, returning its index.
    pub fn insert(&mut self, raw_a: &str, raw_b: &str) -> GraphResult<usize> {
        let a = normalize_name(raw_a);
        let b = normalize_name(raw_b);
        if a.is_empty() || b.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if a == b {
            return Err(GraphError::SelfConnection(a));
        }
        if self.connections.iter().any(|c| c.links(&a, &b)) {
            return Err(GraphError::DuplicateConnection { a, b });
        }
        if let Some(capacity) = self.capacity {
            if self.connections.len() >= capacity {
                return Err(GraphError::ConnectionsFull { capacity });
            }
        }

        let index = self.connections.len();
        log::debug!("connection {}-{} added at index {}", a, b, index);
        self.connections.push(Connection::new(a, b));
        Ok(index)
    }

    /// Remove every connection mentioning `name` and return them in their
    /// former display order.
    pub fn delete_by_name(&mut self, raw_name: &str) -> Vec<Connection> {
        let name = normalize_name(raw_name);
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.connections)
            .into_iter()
            .partition(|c| c.involves(&name));
        self.connections = kept;
        for c in &removed {
            log::debug!("connection {}-{} removed with station {}", c.a, c.b, name);
        }
        removed
    }

    /// Remove the connection at `index`.
    pub fn delete_by_index(&mut self, index: usize) -> GraphResult<Connection> {
        if index >= self.connections.len() {
            return Err(GraphError::IndexOutOfBounds {
                index,
                len: self.connections.len(),
            });
        }
        let removed = self.connections.remove(index);
        log::debug!(
            "connection {}-{} removed from index {}",
            removed.a,
            removed.b,
            index
        );
        Ok(removed)
    }

    /// True when a capacity is configured and reached.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.connections.len() >= capacity)
    }

    /// Unordered, normalized lookup.
    pub fn contains(&self, raw_a: &str, raw_b: &str) -> bool {
        let a = normalize_name(raw_a);
        let b = normalize_name(raw_b);
        self.connections.iter().any(|c| c.links(&a, &b))
    }

    /// Connections touching the named station.
    pub fn involving<'a>(&'a self, raw_name: &str) -> impl Iterator<Item = &'a Connection> + 'a {
        let name = normalize_name(raw_name);
        self.connections.iter().filter(move |c| c.involves(&name))
    }

    /// Connection at `index`.
    pub fn get(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    /// All connections in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Connection> {
        self.connections.iter()
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// True if there are no connections.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Configured capacity, `None` if unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
