//! The [`GridGraph`] type: a square grid of nodes with 8-way adjacency.
//!
//! Nodes live in a flat row-major array and are addressed by [`NodeId`]
//! handles. Every node is linked to each Chebyshev-adjacent cell when the
//! graph is built; after that the only mutation is toggling a cell's
//! `enabled` flag. Search state is never stored here, so one graph can be
//! searched any number of times.

use std::slice;

use crate::error::GraphError;
use crate::geom::{Point, STEPS_8};

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Handle to a node: its index in the graph's row-major node array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw array index. The handle is only meaningful for a graph
    /// with more than `index` nodes.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// The raw array index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

// ---------------------------------------------------------------------------
// EdgeCosts
// ---------------------------------------------------------------------------

/// Movement cost of a single orthogonal or diagonal step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeCosts {
    pub orthogonal: u32,
    pub diagonal: u32,
}

impl EdgeCosts {
    /// 100 per orthogonal step and round(100·√2) per diagonal step.
    pub const OCTILE: Self = Self {
        orthogonal: 100,
        diagonal: 141,
    };

    /// Same cost for every step, diagonal or not.
    #[inline]
    pub const fn uniform(cost: u32) -> Self {
        Self {
            orthogonal: cost,
            diagonal: cost,
        }
    }

    /// Cost of the single step between two adjacent cells.
    #[inline]
    pub fn step(self, from: Point, to: Point) -> u32 {
        if from.is_diagonal_to(to) {
            self.diagonal
        } else {
            self.orthogonal
        }
    }

    fn validate(self) -> Result<Self, GraphError> {
        if self.orthogonal == 0 || self.diagonal == 0 {
            return Err(GraphError::InvalidCost {
                orthogonal: self.orthogonal,
                diagonal: self.diagonal,
            });
        }
        Ok(self)
    }
}

impl Default for EdgeCosts {
    fn default() -> Self {
        Self::OCTILE
    }
}

// ---------------------------------------------------------------------------
// Edge / Node
// ---------------------------------------------------------------------------

/// A directed arc to an adjacent node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: u32,
}

/// One grid cell.
#[derive(Clone, Debug)]
pub struct Node {
    pos: Point,
    enabled: bool,
    edges: Vec<Edge>,
}

impl Node {
    /// Coordinates of the cell.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// Whether the cell may be traversed.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Outgoing edges in [`STEPS_8`] order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

// ---------------------------------------------------------------------------
// GridGraph
// ---------------------------------------------------------------------------

/// A `width × width` grid graph. Coordinates run from 0 to `width - 1` on
/// both axes.
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: i32,
    costs: EdgeCosts,
    nodes: Vec<Node>,
}

impl GridGraph {
    /// Build a graph with the default [`EdgeCosts::OCTILE`] step costs.
    pub fn new(width: i32) -> Result<Self, GraphError> {
        Self::with_costs(width, EdgeCosts::default())
    }

    /// Build a graph with explicit step costs.
    pub fn with_costs(width: i32, costs: EdgeCosts) -> Result<Self, GraphError> {
        if width <= 0 {
            return Err(GraphError::InvalidDimension { width });
        }
        let costs = costs.validate()?;
        let w = width as usize;

        let mut nodes = Vec::with_capacity(w * w);
        for y in 0..width {
            for x in 0..width {
                nodes.push(Node {
                    pos: Point::new(x, y),
                    enabled: true,
                    edges: Vec::with_capacity(8),
                });
            }
        }

        let mut graph = Self {
            width,
            costs,
            nodes,
        };
        graph.link_nodes();
        log::debug!(
            "built {width}x{width} grid graph: {} nodes, {} edges",
            graph.nodes.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn link_nodes(&mut self) {
        for i in 0..self.nodes.len() {
            let pos = self.nodes[i].pos;
            let edges: Vec<Edge> = STEPS_8
                .iter()
                .map(|&d| pos + d)
                .filter_map(|q| {
                    self.index_of(q).map(|j| Edge {
                        to: NodeId(j),
                        cost: self.costs.step(pos, q),
                    })
                })
                .collect();
            self.nodes[i].edges = edges;
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    /// Number of cells along each side.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Total number of nodes (`width²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a graph has at least one node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The step costs the edges were built with.
    #[inline]
    pub fn costs(&self) -> EdgeCosts {
        self.costs
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.width
    }

    #[inline]
    fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Handle of the node at `(x, y)`.
    pub fn node_at(&self, x: i32, y: i32) -> Result<NodeId, GraphError> {
        self.locate(Point::new(x, y))
    }

    /// Handle of the node at `p`.
    pub fn locate(&self, p: Point) -> Result<NodeId, GraphError> {
        self.index_of(p).map(NodeId).ok_or(GraphError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
        })
    }

    /// Fail with [`GraphError::UnknownNode`] unless `id` belongs to this graph.
    #[inline]
    pub fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode {
                index: id.0,
                len: self.nodes.len(),
            })
        }
    }

    /// The node behind `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.check(id)?;
        Ok(&self.nodes[id.0])
    }

    /// The node behind `id`, or `None` for a foreign handle.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Coordinates encoded by `id`.
    ///
    /// `id` must come from this graph. A foreign handle panics in debug
    /// builds and decodes to coordinates outside the grid otherwise; use
    /// [`GridGraph::node`] to check a handle first.
    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        debug_assert!(
            id.0 < self.nodes.len(),
            "node {} does not belong to a graph of {} nodes",
            id.0,
            self.nodes.len()
        );
        let w = self.width as usize;
        Point::new((id.0 % w) as i32, (id.0 / w) as i32)
    }

    /// Whether `id` is a node of this graph that may be traversed.
    #[inline]
    pub fn is_enabled(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_enabled)
    }

    /// Outgoing edges of `id`; empty for a foreign handle.
    #[inline]
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.get(id).map(Node::edges).unwrap_or_default()
    }

    /// Cost of the direct edge from `from` to `to`, if they are adjacent.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.edges(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.cost)
    }

    // -----------------------------------------------------------------------
    // Blocking
    // -----------------------------------------------------------------------

    /// Mark `(x, y)` impassable.
    pub fn disable(&mut self, x: i32, y: i32) -> Result<(), GraphError> {
        self.set_enabled(x, y, false)
    }

    /// Mark `(x, y)` passable again.
    pub fn enable(&mut self, x: i32, y: i32) -> Result<(), GraphError> {
        self.set_enabled(x, y, true)
    }

    /// Set the `enabled` flag of `(x, y)`.
    pub fn set_enabled(&mut self, x: i32, y: i32, enabled: bool) -> Result<(), GraphError> {
        let id = self.node_at(x, y)?;
        self.nodes[id.0].enabled = enabled;
        Ok(())
    }

    /// Disable every listed cell. Stops at the first cell outside the grid;
    /// cells before it stay disabled.
    pub fn disable_all<I>(&mut self, cells: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Point>,
    {
        for p in cells {
            self.disable(p.x, p.y)?;
        }
        Ok(())
    }

    /// Coordinates of every disabled cell, in row-major order.
    pub fn disabled_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().filter(|n| !n.enabled).map(|n| n.pos)
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Row-major iterator over `(NodeId, &Node)` pairs.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            inner: self.nodes.iter().enumerate(),
        }
    }

    /// Call `visit` for every node in row-major order.
    pub fn for_each(&self, mut visit: impl FnMut(NodeId, &Node)) {
        for (id, node) in self.iter() {
            visit(id, node);
        }
    }
}

impl<'a> IntoIterator for &'a GridGraph {
    type Item = (NodeId, &'a Node);
    type IntoIter = Nodes<'a>;
    fn into_iter(self) -> Nodes<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Row-major iterator over the nodes of a [`GridGraph`].
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    inner: std::iter::Enumerate<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (NodeId, &'a Node);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, n)| (NodeId(i), n))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_width() {
        assert_eq!(
            GridGraph::new(0).unwrap_err(),
            GraphError::InvalidDimension { width: 0 }
        );
        assert!(GridGraph::new(-3).is_err());
    }

    #[test]
    fn rejects_zero_costs() {
        let err = GridGraph::with_costs(3, EdgeCosts::uniform(0)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCost { .. }));
    }

    #[test]
    fn builds_width_squared_nodes() {
        let g = GridGraph::new(4).unwrap();
        assert_eq!(g.len(), 16);
        assert_eq!(g.width(), 4);
        assert!(g.iter().all(|(_, n)| n.is_enabled()));
    }

    #[test]
    fn node_at_round_trips_coordinates() {
        let g = GridGraph::new(5).unwrap();
        let id = g.node_at(3, 1).unwrap();
        assert_eq!(id.index(), 8);
        assert_eq!(g.point(id), Point::new(3, 1));
        assert_eq!(g.node(id).unwrap().pos(), Point::new(3, 1));
    }

    #[test]
    fn node_at_out_of_bounds() {
        let g = GridGraph::new(3).unwrap();
        assert_eq!(
            g.node_at(3, 0).unwrap_err(),
            GraphError::OutOfBounds { x: 3, y: 0, width: 3 }
        );
        assert!(g.node_at(0, -1).is_err());
        assert!(g.node_at(-1, 2).is_err());
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let g = GridGraph::new(2).unwrap();
        let foreign = NodeId::from_index(4);
        assert_eq!(
            g.node(foreign).unwrap_err(),
            GraphError::UnknownNode { index: 4, len: 4 }
        );
        assert!(g.get(foreign).is_none());
        assert!(g.edges(foreign).is_empty());
        assert!(!g.is_enabled(foreign));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not belong")]
    fn point_of_foreign_handle_panics() {
        let g = GridGraph::new(2).unwrap();
        let _ = g.point(NodeId::from_index(4));
    }

    #[test]
    fn neighbor_counts() {
        let g = GridGraph::new(3).unwrap();
        let corner = g.node_at(0, 0).unwrap();
        let side = g.node_at(1, 0).unwrap();
        let center = g.node_at(1, 1).unwrap();
        assert_eq!(g.edges(corner).len(), 3);
        assert_eq!(g.edges(side).len(), 5);
        assert_eq!(g.edges(center).len(), 8);
        // 4 corners * 3 + 4 sides * 5 + 1 center * 8
        assert_eq!(g.edge_count(), 40);
    }

    #[test]
    fn single_cell_graph_has_no_edges() {
        let g = GridGraph::new(1).unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn edges_follow_step_order() {
        let g = GridGraph::new(3).unwrap();
        let center = g.node_at(1, 1).unwrap();
        let targets: Vec<Point> = g.edges(center).iter().map(|e| g.point(e.to)).collect();
        assert_eq!(targets, Point::new(1, 1).neighbors_8().to_vec());
    }

    #[test]
    fn edges_are_symmetric_with_octile_costs() {
        let g = GridGraph::new(4).unwrap();
        for (id, node) in &g {
            for e in node.edges() {
                assert_eq!(g.edge_cost(e.to, id), Some(e.cost));
                let expected = if node.pos().is_diagonal_to(g.point(e.to)) { 141 } else { 100 };
                assert_eq!(e.cost, expected);
            }
        }
    }

    #[test]
    fn edge_cost_of_non_adjacent_is_none() {
        let g = GridGraph::new(4).unwrap();
        let a = g.node_at(0, 0).unwrap();
        let b = g.node_at(2, 0).unwrap();
        assert_eq!(g.edge_cost(a, b), None);
        assert_eq!(g.edge_cost(a, a), None);
    }

    #[test]
    fn uniform_costs() {
        let g = GridGraph::with_costs(3, EdgeCosts::uniform(7)).unwrap();
        assert!(g.iter().flat_map(|(_, n)| n.edges()).all(|e| e.cost == 7));
    }

    #[test]
    fn disable_and_enable() {
        let mut g = GridGraph::new(3).unwrap();
        let id = g.node_at(1, 2).unwrap();
        g.disable(1, 2).unwrap();
        assert!(!g.is_enabled(id));
        // Disabled cells keep their edges.
        assert_eq!(g.edges(id).len(), 5);
        g.enable(1, 2).unwrap();
        assert!(g.is_enabled(id));
        assert!(g.disable(3, 3).is_err());
    }

    #[test]
    fn disable_all_stops_at_first_bad_cell() {
        let mut g = GridGraph::new(3).unwrap();
        let err = g
            .disable_all([Point::new(0, 0), Point::new(5, 5), Point::new(2, 2)])
            .unwrap_err();
        assert!(matches!(err, GraphError::OutOfBounds { x: 5, y: 5, .. }));
        let disabled: Vec<Point> = g.disabled_cells().collect();
        assert_eq!(disabled, vec![Point::new(0, 0)]);
    }

    #[test]
    fn iteration_is_row_major_and_restartable() {
        let g = GridGraph::new(3).unwrap();
        let first: Vec<Point> = g.iter().map(|(_, n)| n.pos()).collect();
        let mut second = Vec::new();
        g.for_each(|_, n| second.push(n.pos()));
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
        assert_eq!(first[0], Point::new(0, 0));
        assert_eq!(first[1], Point::new(1, 0));
        assert_eq!(first[3], Point::new(0, 1));
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(g.iter().len(), 9);
    }
}
