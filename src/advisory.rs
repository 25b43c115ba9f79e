/*!
# Advisories

Non-fatal conditions that are worth telling the caller about but never abort an operation.
Each advisory is logged as a `tracing` warning where it is detected and can also be queried
from the object it concerns.
*/

use std::fmt::Display;

use crate::node::{Node, NumNodes};

/// A non-fatal condition detected during construction or a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Every weight is `0` or `1`; a breadth-first search finds the same paths cheaper
    UnitWeights,
    /// An edge-list graph was built without explicit names, so indices follow input order
    UnnamedEdgeList,
    /// A matrix graph was built without explicit names; subgraph tests compare index names only
    UnnamedMatrix,
    /// A breadth-first search from `start` left `unreachable` vertices undiscovered
    Unreachable { start: Node, unreachable: NumNodes },
}

impl Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::UnitWeights => write!(
                f,
                "all edge weights are 0 or 1; a breadth-first search is the better fit for shortest paths"
            ),
            Advisory::UnnamedEdgeList => write!(
                f,
                "no vertex names supplied for edge-list input; vertex indices follow order of first appearance"
            ),
            Advisory::UnnamedMatrix => write!(
                f,
                "no vertex names supplied for matrix input; subgraph relations cannot be recognized reliably"
            ),
            Advisory::Unreachable { start, unreachable } => write!(
                f,
                "breadth-first search from vertex {start} could not reach {unreachable} vertices"
            ),
        }
    }
}

impl Advisory {
    /// Logs the advisory as a warning and returns it
    pub(crate) fn emit(self) -> Self {
        tracing::warn!(advisory = ?self, "{self}");
        self
    }
}
