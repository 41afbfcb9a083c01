//! The station (vertex) record.

use super::{normalize_name, now_micros, GraphError, GraphResult};

/// A named vertex in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Normalized name, unique within a store.
    pub name: String,
    /// When this station was created (Unix epoch microseconds).
    pub created_at: u64,
}

impl Station {
    /// Create a station from a raw name, normalizing it first.
    ///
    /// Fails with [`GraphError::EmptyName`] if nothing is left after
    /// whitespace is stripped.
    pub fn new(raw_name: &str) -> GraphResult<Self> {
        Self::with_timestamp(raw_name, now_micros())
    }

    /// Create a station with an explicit timestamp.
    pub fn with_timestamp(raw_name: &str, created_at: u64) -> GraphResult<Self> {
        let name = normalize_name(raw_name);
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        Ok(Self { name, created_at })
    }

    /// Whether `raw_name` refers to this station after normalization.
    pub fn is_named(&self, raw_name: &str) -> bool {
        self.name == normalize_name(raw_name)
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
