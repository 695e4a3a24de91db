//! **gridstar-core**: square grid graphs for shortest-path search.
//!
//! This crate provides the graph side of *gridstar*: integer [`Point`]s, the
//! [`GridGraph`] with its 8-way adjacency and fixed [`EdgeCosts`], and the
//! shared [`GraphError`] type. Searching lives in `gridstar-paths`.

pub mod error;
pub mod geom;
pub mod graph;

pub use error::GraphError;
pub use geom::{Point, STEPS_8};
pub use graph::{Edge, EdgeCosts, GridGraph, Node, NodeId, Nodes};
