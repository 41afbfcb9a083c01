//! Fluent API for building StationGraph instances.

use crate::types::GraphResult;

use super::{Limits, StationGraph};

enum Step {
    Station(String),
    Link(String, String),
}

/// Fluent builder for constructing a StationGraph.
///
/// Steps are replayed in order through the validating graph operations, so
/// `build` fails on the first station or connection the graph would reject.
pub struct GraphBuilder {
    limits: Limits,
    steps: Vec<Step>,
}

impl GraphBuilder {
    /// Create a new builder with the default limits.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            steps: Vec::new(),
        }
    }

    /// Create a new builder with no capacity limits.
    pub fn unbounded() -> Self {
        Self {
            limits: Limits::UNBOUNDED,
            steps: Vec::new(),
        }
    }

    /// Set the limits for the built graph.
    pub fn limits(&mut self, limits: Limits) -> &mut Self {
        self.limits = limits;
        self
    }

    /// Add a station.
    pub fn station(&mut self, name: &str) -> &mut Self {
        self.steps.push(Step::Station(name.to_string()));
        self
    }

    /// Add several stations.
    pub fn stations(&mut self, names: &[&str]) -> &mut Self {
        for name in names {
            self.station(name);
        }
        self
    }

    /// Connect two stations.
    pub fn link(&mut self, a: &str, b: &str) -> &mut Self {
        self.steps.push(Step::Link(a.to_string(), b.to_string()));
        self
    }

    /// Build the final StationGraph.
    pub fn build(&self) -> GraphResult<StationGraph> {
        let mut graph = StationGraph::new(self.limits);
        for step in &self.steps {
            match step {
                Step::Station(name) => {
                    graph.add_station(name)?;
                }
                Step::Link(a, b) => {
                    graph.connect(a, b)?;
                }
            }
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
