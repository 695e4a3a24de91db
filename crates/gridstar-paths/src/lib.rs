//! A* shortest-path search over [`gridstar_core::GridGraph`]s.
//!
//! All searching goes through a [`Searcher`], which owns the per-search
//! side tables (best costs, parents, open/closed flags, the open heap) so
//! that the graph itself is never mutated and repeated queries reuse the
//! same allocations. [`search`] is a one-shot shortcut with the default
//! configuration.
//!
//! | Item | Purpose |
//! |---|---|
//! | [`Searcher::search`] | A* between two node handles |
//! | [`Heuristic`] | remaining-cost estimate (octile by default) |
//! | [`SearchConfig`] | heuristic choice and expansion limit |
//! | [`Outcome`] / [`Path`] | search result |

mod astar;
mod heuristic;
mod path;
mod searcher;

pub use astar::search;
pub use heuristic::{Heuristic, chebyshev, manhattan, octile};
pub use path::{Outcome, Path};
pub use searcher::{SearchConfig, SearchStats, Searcher};
