use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::{GraphError, GridGraph, NodeId, Point};

use crate::heuristic::Heuristic;
use crate::path::Outcome;

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Tunables for a [`Searcher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Remaining-cost estimate used to order the open set.
    pub heuristic: Heuristic,
    /// Give up after expanding this many nodes. `None` means no limit.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the open set to the closed set.
    pub expanded: usize,
    /// Entries pushed onto the open heap, including re-pushes after a
    /// cheaper route was found.
    pub pushed: usize,
    /// Heap entries discarded because a cheaper copy was already handled.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct NodeState {
    pub(crate) g: u64,
    pub(crate) f: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
            closed: false,
        }
    }
}

/// Open-heap entry. Pops the lowest `f` first and, among equal `f`, the
/// entry pushed earliest.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) f: u64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Runs A* queries over [`GridGraph`]s.
///
/// A `Searcher` owns every piece of mutable search state (costs, parents,
/// open/closed flags and the open heap) in side tables indexed by
/// [`NodeId`]. The graph is only borrowed immutably, so the same graph can
/// be searched repeatedly, and by several searchers at once. Tables are
/// reused between queries: a generation counter marks entries written by
/// older searches as stale instead of clearing them.
pub struct Searcher {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<NodeState>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<HeapEntry>,
    pub(crate) stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            generation: 0,
            open: BinaryHeap::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters of the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search between two coordinates, failing with
    /// [`GraphError::OutOfBounds`] if either lies outside the graph.
    pub fn search_points(
        &mut self,
        graph: &GridGraph,
        from: Point,
        to: Point,
    ) -> Result<Outcome, GraphError> {
        let start = graph.locate(from)?;
        let goal = graph.locate(to)?;
        self.search(graph, start, goal)
    }

    /// Size the side table for `len` nodes and start a new generation.
    /// Returns the generation tag of the new search.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.resize(len, NodeState::default());
        }
        self.open.clear();
        self.stats = SearchStats::default();

        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: entries tagged by the previous cycle would look current.
            self.nodes.fill(NodeState::default());
            self.generation = 1;
        }
        self.generation
    }

    /// Follow parents back from `goal`, returning the nodes in start-to-goal
    /// order.
    pub(crate) fn trace_back(&self, goal: usize) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            nodes.push(NodeId::from_index(ci));
            ci = self.nodes[ci].parent;
        }
        nodes.reverse();
        nodes
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default()
            .with_heuristic(Heuristic::Chebyshev)
            .with_max_expansions(64);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn config_fields_default_when_missing() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"heuristic":"zero"}"#).unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Zero);
        assert_eq!(cfg.max_expansions, None);
    }
}
