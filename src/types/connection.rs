//! The connection (undirected edge) record.

use super::now_micros;

/// An undirected link between two stations, stored by normalized name.
///
/// `a` and `b` keep the order the user gave them for display; equality of
/// endpoints is checked without regard to order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// First endpoint (normalized station name).
    pub a: String,
    /// Second endpoint (normalized station name).
    pub b: String,
    /// When this connection was created (Unix epoch microseconds).
    pub created_at: u64,
}

impl Connection {
    /// Create a connection between two already-normalized names.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::with_timestamp(a, b, now_micros())
    }

    /// Create a connection with an explicit timestamp.
    pub fn with_timestamp(a: impl Into<String>, b: impl Into<String>, created_at: u64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            created_at,
        }
    }

    /// True if either endpoint is `name`.
    pub fn involves(&self, name: &str) -> bool {
        self.a == name || self.b == name
    }

    /// Unordered endpoint match.
    pub fn links(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint opposite `name`, if `name` is one of them.
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.a == name {
            Some(&self.b)
        } else if self.b == name {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Connected {} with {}", self.a, self.b)
    }
}
