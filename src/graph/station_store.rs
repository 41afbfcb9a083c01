//! Vertex store: the list of stations.

use crate::types::{normalize_name, GraphError, GraphResult, Station};

/// Capacity-limited list of uniquely named stations.
///
/// Indices are display handles only. Removing a station shifts every later
/// station down by one.
#[derive(Debug, Clone, Default)]
pub struct StationStore {
    stations: Vec<Station>,
    /// `None` means unbounded.
    capacity: Option<usize>,
}

impl StationStore {
    /// Create an empty store. `None` disables the capacity check.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            stations: Vec::with_capacity(capacity.unwrap_or(0)),
            capacity,
        }
    }

    /// Add a station, returning its index.
    ///
    /// Fails without modifying the store if the store is full, the name is
    /// blank, or a station with the same normalized name exists.
    pub fn add(&mut self, raw_name: &str) -> GraphResult<usize> {
        if let Some(capacity) = self.capacity {
            if self.stations.len() >= capacity {
                return Err(GraphError::StationsFull { capacity });
            }
        }

        let station = Station::new(raw_name)?;
        if self.position(&station.name).is_some() {
            return Err(GraphError::DuplicateStation(station.name));
        }

        let index = self.stations.len();
        log::debug!("station {} added at index {}", station.name, index);
        self.stations.push(station);
        Ok(index)
    }

    /// Whether a station with this name (after normalization) exists.
    pub fn exists(&self, raw_name: &str) -> bool {
        self.position(raw_name).is_some()
    }

    /// Index of the station with this name (after normalization).
    pub fn position(&self, raw_name: &str) -> Option<usize> {
        let name = normalize_name(raw_name);
        self.stations.iter().position(|s| s.name == name)
    }

    /// Remove the station at `index`.
    ///
    /// This does not touch connections; use
    /// [`StationGraph::delete_station`](super::StationGraph::delete_station)
    /// to cascade.
    pub fn delete(&mut self, index: usize) -> GraphResult<Station> {
        if index >= self.stations.len() {
            return Err(GraphError::IndexOutOfBounds {
                index,
                len: self.stations.len(),
            });
        }
        let removed = self.stations.remove(index);
        log::debug!("station {} removed from index {}", removed.name, index);
        Ok(removed)
    }

    /// True when a capacity is configured and reached.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.stations.len() >= capacity)
    }

    /// Station at `index`.
    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    /// All stations in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// True if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Configured capacity, `None` if unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
