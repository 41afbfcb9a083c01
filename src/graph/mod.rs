//! In-memory graph operations: the two stores and the graph that owns them.

pub mod builder;
pub mod connection_store;
pub mod station_graph;
pub mod station_store;

pub use builder::GraphBuilder;
pub use connection_store::ConnectionStore;
pub use station_graph::{Limits, StationGraph, StationRemoval};
pub use station_store::StationStore;
