//! Walk counting by powers of the connectivity matrix.
//!
//! `C^k[i][j]` is the number of walks from `i` to `j` using exactly `k`
//! edges, counting parallel edges once (the connectivity matrix is 0/1).

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::matrix;
use crate::traversal::check_vertex;

/// Number of walks from `start` to `finish` with between 1 and `max_stops`
/// edges, inclusive.
///
/// Keeps a running power of the connectivity matrix, so the cost is
/// O(V³ · max_stops). Zero is an ordinary answer.
pub fn bounded_stops_route_count(
    graph: &Graph,
    start: VertexId,
    finish: VertexId,
    max_stops: u32,
) -> Result<u64> {
    check_vertex(graph, start)?;
    check_vertex(graph, finish)?;

    let connectivity = graph.connectivity_matrix();
    let mut power = matrix::identity(connectivity.rows());
    let mut routes: u64 = 0;

    for _ in 0..max_stops {
        power = matrix::multiply(&power, connectivity)?;
        routes = routes.wrapping_add(power[(start, finish)]);
    }

    debug!(start, finish, max_stops, routes, "bounded stops route count");
    Ok(routes)
}

/// Number of walks from `start` to `finish` with exactly `stops` edges.
///
/// Binary exponentiation of the connectivity matrix: O(V³ · log(stops)).
/// `stops == 0` counts the empty walk, so it is 1 when `start == finish`.
pub fn exact_stops_route_count(
    graph: &Graph,
    start: VertexId,
    finish: VertexId,
    stops: u32,
) -> Result<u64> {
    check_vertex(graph, start)?;
    check_vertex(graph, finish)?;

    let power = matrix::pow(graph.connectivity_matrix(), stops)?;
    let routes = power[(start, finish)];

    debug!(start, finish, stops, routes, "exact stops route count");
    Ok(routes)
}
