//! Travel direction along the graph's edges.

use std::fmt;

use petgraph::Direction;

/// Which neighbor set a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Along edges: `from -> to`.
    Downstream,
    /// Against edges: `to -> from`.
    Upstream,
}

impl Flow {
    /// The petgraph direction whose neighbors this flow visits.
    pub fn direction(self) -> Direction {
        match self {
            Self::Downstream => Direction::Outgoing,
            Self::Upstream => Direction::Incoming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Downstream => "downstream",
            Self::Upstream => "upstream",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
