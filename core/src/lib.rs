//! route-graph-core: route queries over an immutable weighted directed graph.
//!
//! A pure Rust library that indexes a fixed edge list both ways and answers
//! five route problems: distance along a route, walk counts bounded by or
//! exactly matching a number of stops, the shortest path with at least one
//! stop, and walk counts bounded by total distance.
//!
//! Input parsing and label mapping live in the `route-graph-cli` crate; this
//! crate only sees dense integer vertex ids.

mod error;
mod graph;
pub mod matrix;
mod query;
mod traversal;
mod walks;

pub use error::{Result, RouteError};
pub use graph::{Edge, Graph, VertexId};
pub use matrix::Matrix;
pub use query::{ProblemKind, Query, UnknownProblem};
pub use traversal::{
    bounded_distance_route_count, route_distance, shortest_path_with_stop, Outcome,
};
pub use walks::{bounded_stops_route_count, exact_stops_route_count};
