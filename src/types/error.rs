//! Error types for the station graph.

use thiserror::Error;

/// All errors that can occur while editing a station graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The station store reached its configured capacity.
    #[error("Station list is full (capacity {capacity})")]
    StationsFull { capacity: usize },

    /// The connection store reached its configured capacity.
    #[error("The connections list is full (capacity {capacity})")]
    ConnectionsFull { capacity: usize },

    /// Name is empty after whitespace was stripped.
    #[error("Station name cannot be empty")]
    EmptyName,

    /// A station with the same normalized name already exists.
    #[error("Station name {0} already exists")]
    DuplicateStation(String),

    /// No station with this normalized name.
    #[error("Station {0} does not exist")]
    StationNotFound(String),

    /// Both endpoints name the same station.
    #[error("Cannot connect station {0} to itself")]
    SelfConnection(String),

    /// The unordered pair is already connected.
    #[error("Connection {a}-{b} already exists")]
    DuplicateConnection { a: String, b: String },

    /// Display index outside the current list.
    #[error("Index {index} is out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid configuration value or unreadable config file.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for station graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
