//! station-graph: an in-memory undirected graph of named stations.
//!
//! Stations are unique, whitespace/case-normalized names. Connections are
//! unordered pairs of existing stations. Both stores can be capped by a
//! configurable capacity. The `stations` binary drives the graph through a
//! numeric console menu.

pub mod cli;
pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use graph::{
    ConnectionStore, GraphBuilder, Limits, StationGraph, StationRemoval, StationStore,
};
pub use types::{
    normalize_name, now_micros, Connection, GraphError, GraphResult, Station,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_STATIONS,
};
