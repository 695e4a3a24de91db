use gridstar_core::{GraphError, GridGraph, NodeId};

use crate::path::{Outcome, Path};
use crate::searcher::{HeapEntry, NO_PARENT, Searcher};

/// Find the cheapest path from `start` to `goal` with a default [`Searcher`].
pub fn search(graph: &GridGraph, start: NodeId, goal: NodeId) -> Result<Outcome, GraphError> {
    Searcher::default().search(graph, start, goal)
}

impl Searcher {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// The returned path includes both endpoints. Disabled cells are never
    /// entered; if `start` or `goal` itself is disabled the result is
    /// [`Outcome::NotFound`]. Among several equally cheap paths the one
    /// whose nodes were discovered first wins.
    pub fn search(
        &mut self,
        graph: &GridGraph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Outcome, GraphError> {
        graph.check(start)?;
        graph.check(goal)?;
        let cur_gen = self.begin(graph.len());

        if !graph.is_enabled(start) || !graph.is_enabled(goal) {
            log::debug!(
                "astar {} -> {}: endpoint disabled",
                graph.point(start),
                graph.point(goal)
            );
            return Ok(Outcome::NotFound);
        }

        if start == goal {
            return Ok(Outcome::Found(Path::new(vec![start], 0)));
        }

        let costs = graph.costs();
        let heuristic = self.config.heuristic;
        let limit = self.config.max_expansions;
        let goal_idx = goal.index();
        let goal_point = graph.point(goal);

        let start_idx = start.index();
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = heuristic.estimate(costs, graph.point(start), goal_point);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
            node.closed = false;
        }

        let mut seq: u64 = 0;
        self.open.push(HeapEntry {
            f: self.nodes[start_idx].f,
            seq,
            idx: start_idx,
        });
        self.stats.pushed = 1;

        let outcome = loop {
            let Some(current) = self.open.pop() else {
                break Outcome::NotFound;
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper push.
            {
                let n = &self.nodes[ci];
                if n.generation != cur_gen || !n.open || n.f != current.f {
                    self.stats.stale += 1;
                    continue;
                }
            }

            if ci == goal_idx {
                let nodes = self.trace_back(goal_idx);
                break Outcome::Found(Path::new(nodes, self.nodes[goal_idx].g));
            }

            if limit.is_some_and(|max| self.stats.expanded >= max) {
                break Outcome::LimitReached {
                    expanded: self.stats.expanded,
                };
            }

            let current_g = {
                let n = &mut self.nodes[ci];
                n.open = false;
                n.closed = true;
                n.g
            };
            self.stats.expanded += 1;

            let current_id = NodeId::from_index(ci);
            log::trace!(
                "expand {} g={} f={}",
                graph.point(current_id),
                current_g,
                current.f
            );

            for edge in graph.edges(current_id) {
                if !graph.is_enabled(edge.to) {
                    continue;
                }
                let ni = edge.to.index();
                let tentative_g = current_g + u64::from(edge.cost);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative_g;
                n.f = tentative_g + heuristic.estimate(costs, graph.point(edge.to), goal_point);
                n.parent = ci;
                n.open = true;

                seq += 1;
                self.open.push(HeapEntry {
                    f: n.f,
                    seq,
                    idx: ni,
                });
                self.stats.pushed += 1;
            }
        };

        log::debug!(
            "astar {} -> {}: {} after {} expansions ({} pushes, {} stale)",
            graph.point(start),
            goal_point,
            match &outcome {
                Outcome::Found(path) => format!("cost {} over {} steps", path.cost(), path.steps()),
                Outcome::NotFound => "no path".to_string(),
                Outcome::LimitReached { .. } => "limit reached".to_string(),
            },
            self.stats.expanded,
            self.stats.pushed,
            self.stats.stale
        );

        Ok(outcome)
    }
}
