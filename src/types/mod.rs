//! All data types for the station graph.

pub mod connection;
pub mod error;
pub mod station;

pub use connection::Connection;
pub use error::{GraphError, GraphResult};
pub use station::Station;

/// Station capacity used when no configuration overrides it.
pub const DEFAULT_MAX_STATIONS: usize = 5;

/// Connection capacity used when no configuration overrides it.
pub const DEFAULT_MAX_CONNECTIONS: usize = 6;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}

/// Normalize a user-supplied station name: strip all whitespace and lowercase.
///
/// Two names refer to the same station exactly when their normalized forms
/// are equal.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
