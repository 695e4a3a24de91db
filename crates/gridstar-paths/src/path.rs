use gridstar_core::{GridGraph, NodeId, Point};

/// A route through a graph, from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: u64,
}

impl Path {
    /// Wrap an ordered node sequence and its total edge cost.
    pub fn new(nodes: Vec<NodeId>, cost: u64) -> Self {
        Self { nodes, cost }
    }

    /// All nodes, start first and goal last.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of the edge costs along the path.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of nodes, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of steps (edges) taken.
    #[inline]
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Nodes strictly between start and goal.
    pub fn intermediate(&self) -> &[NodeId] {
        match self.nodes.len() {
            0..=2 => &[],
            n => &self.nodes[1..n - 1],
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Coordinates of every node, in path order.
    pub fn points(&self, graph: &GridGraph) -> Vec<Point> {
        self.nodes.iter().map(|&id| graph.point(id)).collect()
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The cheapest path from start to goal.
    Found(Path),
    /// No path exists.
    NotFound,
    /// The configured expansion limit stopped the search first.
    LimitReached { expanded: usize },
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}
