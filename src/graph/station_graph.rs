//! Core graph structure: stations plus connections with referential integrity.

use crate::config::Config;
use crate::types::{
    normalize_name, Connection, GraphError, GraphResult, Station, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_STATIONS,
};

use super::{ConnectionStore, StationStore};

/// Optional capacities for the two stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of stations, `None` for unbounded.
    pub stations: Option<usize>,
    /// Maximum number of connections, `None` for unbounded.
    pub connections: Option<usize>,
}

impl Limits {
    /// No capacity checks at all.
    pub const UNBOUNDED: Limits = Limits {
        stations: None,
        connections: None,
    };

    /// Fixed capacities for both stores.
    pub fn fixed(stations: usize, connections: usize) -> Self {
        Self {
            stations: Some(stations),
            connections: Some(connections),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::fixed(DEFAULT_MAX_STATIONS, DEFAULT_MAX_CONNECTIONS)
    }
}

/// Outcome of deleting a station: the station and every connection that was
/// removed along with it.
#[derive(Debug, Clone)]
pub struct StationRemoval {
    /// Index the station occupied before removal.
    pub index: usize,
    /// The removed station.
    pub station: Station,
    /// Connections that referenced the station, in former display order.
    pub connections: Vec<Connection>,
}

/// Owns one station store and one connection store and keeps them
/// consistent: every connection endpoint names an existing station.
#[derive(Debug, Clone)]
pub struct StationGraph {
    stations: StationStore,
    connections: ConnectionStore,
}

impl StationGraph {
    /// Create an empty graph with the given limits.
    pub fn new(limits: Limits) -> Self {
        Self {
            stations: StationStore::new(limits.stations),
            connections: ConnectionStore::new(limits.connections),
        }
    }

    /// Create an empty graph with the limits from a loaded config.
    pub fn with_config(config: &Config) -> Self {
        Self::new(config.limits())
    }

    /// Create an empty graph with no capacity limits.
    pub fn unbounded() -> Self {
        Self::new(Limits::UNBOUNDED)
    }

    /// Current limits.
    pub fn limits(&self) -> Limits {
        Limits {
            stations: self.stations.capacity(),
            connections: self.connections.capacity(),
        }
    }

    /// Add a station, returning its index.
    pub fn add_station(&mut self, raw_name: &str) -> GraphResult<usize> {
        self.stations.add(raw_name)
    }

    /// Whether a station with this name exists (after normalization).
    pub fn station_exists(&self, raw_name: &str) -> bool {
        self.stations.exists(raw_name)
    }

    /// Delete the station at `index` and every connection mentioning it.
    pub fn delete_station(&mut self, index: usize) -> GraphResult<StationRemoval> {
        let station = self.stations.delete(index)?;
        let connections = self.connections.delete_by_name(&station.name);
        if !connections.is_empty() {
            log::info!(
                "deleting station {} removed {} connection(s)",
                station.name,
                connections.len()
            );
        }
        Ok(StationRemoval {
            index,
            station,
            connections,
        })
    }

    /// Delete a station by name and every connection mentioning it.
    pub fn delete_station_by_name(&mut self, raw_name: &str) -> GraphResult<StationRemoval> {
        let index = self
            .stations
            .position(raw_name)
            .ok_or_else(|| GraphError::StationNotFound(normalize_name(raw_name)))?;
        self.delete_station(index)
    }

    /// Connect two existing stations.
    ///
    /// Both names are normalized. Unknown stations, self-connections,
    /// duplicates (in either orientation) and a full connection list are
    /// rejected without modifying the graph.
    pub fn connect(&mut self, raw_a: &str, raw_b: &str) -> GraphResult<&Connection> {
        for raw in [raw_a, raw_b] {
            let name = normalize_name(raw);
            if name.is_empty() {
                return Err(GraphError::EmptyName);
            }
            if !self.stations.exists(&name) {
                return Err(GraphError::StationNotFound(name));
            }
        }
        let index = self.connections.insert(raw_a, raw_b)?;
        self.connections
            .get(index)
            .ok_or(GraphError::IndexOutOfBounds {
                index,
                len: self.connections.len(),
            })
    }

    /// Delete the connection at `index`.
    pub fn disconnect(&mut self, index: usize) -> GraphResult<Connection> {
        self.connections.delete_by_index(index)
    }

    /// Unordered, normalized connection lookup.
    pub fn connection_exists(&self, raw_a: &str, raw_b: &str) -> bool {
        self.connections.contains(raw_a, raw_b)
    }

    /// Number of connections touching a station.
    pub fn degree(&self, raw_name: &str) -> usize {
        self.connections.involving(raw_name).count()
    }

    /// Names of the stations directly connected to `raw_name`.
    pub fn neighbours(&self, raw_name: &str) -> Vec<&str> {
        let name = normalize_name(raw_name);
        self.connections
            .iter()
            .filter_map(|c| c.other(&name))
            .collect()
    }

    /// The station store.
    pub fn stations(&self) -> &StationStore {
        &self.stations
    }

    /// The connection store.
    pub fn connections(&self) -> &ConnectionStore {
        &self.connections
    }

    /// True if no more stations can be added.
    pub fn stations_full(&self) -> bool {
        self.stations.is_full()
    }

    /// True if no more connections can be added.
    pub fn connections_full(&self) -> bool {
        self.connections.is_full()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl Default for StationGraph {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
