//! Error type shared by graph construction, cell access and search.

use std::fmt;

/// Errors raised by [`GridGraph`](crate::GridGraph) and by searches over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The requested grid width is zero or negative.
    InvalidDimension { width: i32 },
    /// A coordinate lies outside `[0, width)` on some axis.
    OutOfBounds { x: i32, y: i32, width: i32 },
    /// A step cost of zero was requested.
    InvalidCost { orthogonal: u32, diagonal: u32 },
    /// A node handle that does not belong to the graph.
    UnknownNode { index: usize, len: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width } => {
                write!(f, "grid width must be positive, got {width}")
            }
            Self::OutOfBounds { x, y, width } => {
                write!(f, "cell ({x}, {y}) is outside a {width}x{width} grid")
            }
            Self::InvalidCost {
                orthogonal,
                diagonal,
            } => write!(
                f,
                "step costs must be positive, got orthogonal {orthogonal} and diagonal {diagonal}"
            ),
            Self::UnknownNode { index, len } => {
                write!(f, "node #{index} does not belong to a graph of {len} nodes")
            }
        }
    }
}

impl std::error::Error for GraphError {}
