//! Scenarios for the `gridstar` demo program.
//!
//! A [`Scenario`] describes one search problem: grid width, blocked cells,
//! endpoints, step costs and search settings. Scenarios come from the
//! built-in reference layout, from a JSON file, or from a seeded random
//! generator.

use std::fmt;
use std::path::Path;

use gridstar_core::{EdgeCosts, GraphError, GridGraph, NodeId, Point};
use gridstar_paths::{Heuristic, SearchConfig};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DemoError
// ---------------------------------------------------------------------------

/// Errors that stop the demo before a search runs.
#[derive(Debug)]
pub enum DemoError {
    /// The scenario file could not be read.
    Io(std::io::Error),
    /// The scenario file is not valid scenario JSON.
    Json(serde_json::Error),
    /// The scenario does not fit its own grid.
    Graph(GraphError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading scenario: {e}"),
            Self::Json(e) => write!(f, "parsing scenario: {e}"),
            Self::Graph(e) => write!(f, "building grid: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Graph(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<GraphError> for DemoError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// One search problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: i32,
    #[serde(default)]
    pub blocked: Vec<Point>,
    pub start: Point,
    pub goal: Point,
    #[serde(default)]
    pub costs: EdgeCosts,
    #[serde(default)]
    pub search: SearchConfig,
}

/// A scenario turned into a graph plus endpoint handles.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub graph: GridGraph,
    pub start: NodeId,
    pub goal: NodeId,
}

impl Scenario {
    /// The classic 8x8 layout: a wall at `x = 5` from the bottom edge, a
    /// wall at `x = 2` from the top edge and a lone block at (4, 4), with
    /// the route running from (0, 3) to (7, 0).
    pub fn reference() -> Self {
        let mut blocked: Vec<Point> = (0..5).map(|n| Point::new(5, n)).collect();
        blocked.extend((0..5).map(|n| Point::new(2, 7 - n)));
        blocked.push(Point::new(4, 4));
        Self {
            width: 8,
            blocked,
            start: Point::new(0, 3),
            goal: Point::new(7, 0),
            costs: EdgeCosts::default(),
            search: SearchConfig::default(),
        }
    }

    /// A `width × width` grid with up to `count` distinct blocked cells,
    /// routed corner to corner. The endpoints are never blocked. The same
    /// seed always gives the same scenario. A non-positive `width` is kept
    /// as is, with nothing blocked, so [`Scenario::prepare`] rejects it.
    pub fn random(width: i32, count: usize, seed: u64) -> Self {
        let start = Point::new(0, 0);
        let goal = Point::new(width - 1, width - 1);
        let cells = usize::try_from(width).map_or(0, |w| w * w);
        let count = count.min(cells.saturating_sub(2));

        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut blocked: Vec<Point> = Vec::with_capacity(count);
        while blocked.len() < count {
            let p = Point::new(rng.random_range(0..width), rng.random_range(0..width));
            if p == start || p == goal || blocked.contains(&p) {
                continue;
            }
            blocked.push(p);
        }
        blocked.sort();

        Self {
            width,
            blocked,
            start,
            goal,
            costs: EdgeCosts::default(),
            search: SearchConfig::default(),
        }
    }

    /// Replace the search settings that are given, keep the others.
    pub fn override_search(
        &mut self,
        heuristic: Option<Heuristic>,
        max_expansions: Option<usize>,
    ) {
        if let Some(h) = heuristic {
            self.search.heuristic = h;
        }
        if let Some(limit) = max_expansions {
            self.search.max_expansions = Some(limit);
        }
    }

    pub fn from_json(s: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, DemoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the graph, block the listed cells and resolve the endpoints.
    pub fn prepare(&self) -> Result<Prepared, DemoError> {
        let mut graph = GridGraph::with_costs(self.width, self.costs)?;
        graph.disable_all(self.blocked.iter().copied())?;
        let start = graph.locate(self.start)?;
        let goal = graph.locate(self.goal)?;
        log::info!(
            "scenario: {w}x{w} grid, {} blocked, {} -> {}",
            self.blocked.len(),
            self.start,
            self.goal,
            w = self.width
        );
        Ok(Prepared { graph, start, goal })
    }
}
