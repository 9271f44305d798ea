use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::error::{Result, RouteError};
use crate::graph::{Graph, VertexId};

/// Result of a route query that may legitimately find nothing.
///
/// `NotFound` is a normal answer ("no such route"), distinct from the
/// validation failures reported through [`RouteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
}

impl<T> Outcome<T> {
    /// Convert to `Option`, dropping the distinction from errors.
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(v) => Some(v),
            Outcome::NotFound => None,
        }
    }
}

impl Outcome<u64> {
    /// `Found(value)` unless `value` is zero.
    pub fn nonzero(value: u64) -> Self {
        if value == 0 {
            Outcome::NotFound
        } else {
            Outcome::Found(value)
        }
    }
}

/// Sentinel for "not reached yet". Absorbing under [`add_distance`].
const UNREACHED: u64 = u64::MAX;

fn add_distance(base: u64, distance: u32) -> u64 {
    if base == UNREACHED {
        UNREACHED
    } else {
        base.saturating_add(u64::from(distance))
    }
}

pub(crate) fn check_vertex(graph: &Graph, vertex: VertexId) -> Result<VertexId> {
    if graph.contains_vertex(vertex) {
        Ok(vertex)
    } else {
        Err(RouteError::VertexOutOfRange {
            vertex,
            vertex_count: graph.vertex_count(),
        })
    }
}

/// Total distance along an explicit route.
///
/// Each consecutive pair is looked up in the weighted matrix; a zero cell
/// means there is no direct edge and the whole route is `NotFound`. A route
/// with fewer than two vertices has no edges and is also `NotFound`.
///
/// O(V²) to materialize the matrix on first use, then O(k) for k vertices.
pub fn route_distance(graph: &Graph, route: &[VertexId]) -> Result<Outcome<u64>> {
    for &vertex in route {
        check_vertex(graph, vertex)?;
    }

    let matrix = graph.weighted_matrix();
    let mut total: u64 = 0;

    for pair in route.windows(2) {
        let hop = matrix[(pair[0], pair[1])];
        if hop == 0 {
            trace!(from = pair[0], to = pair[1], "route has no direct edge");
            return Ok(Outcome::NotFound);
        }
        total = total.saturating_add(hop);
    }

    Ok(Outcome::nonzero(total))
}

/// Shortest distance from `start` to `finish` traversing at least one edge.
///
/// Naive O(V²) Dijkstra: each round finalizes the remaining vertex with the
/// smallest tentative distance and relaxes its outgoing edges into the
/// remaining set. When `start == finish` the trivial zero distance is replaced
/// by the cheapest closing edge into `finish`, computed from the finalized
/// distances, so the answer is the shortest cycle through `start`.
pub fn shortest_path_with_stop(
    graph: &Graph,
    start: VertexId,
    finish: VertexId,
) -> Result<Outcome<u64>> {
    check_vertex(graph, start)?;
    check_vertex(graph, finish)?;

    let n = graph.vertex_count();
    let mut distance = vec![UNREACHED; n];
    let mut finalized = vec![false; n];
    distance[start] = 0;

    loop {
        let next = (0..n)
            .filter(|&v| !finalized[v] && distance[v] != UNREACHED)
            .min_by_key(|&v| distance[v]);

        let current = match next {
            Some(v) => v,
            None => break,
        };
        finalized[current] = true;

        for edge in graph.outgoing_edges(current) {
            if finalized[edge.to] {
                continue;
            }
            let candidate = add_distance(distance[current], edge.distance);
            if candidate < distance[edge.to] {
                distance[edge.to] = candidate;
            }
        }
    }

    if start == finish {
        distance[finish] = graph
            .incoming_edges(finish)
            .iter()
            .map(|edge| add_distance(distance[edge.from], edge.distance))
            .min()
            .unwrap_or(UNREACHED);
    }

    let result = if distance[finish] == UNREACHED {
        Outcome::NotFound
    } else {
        Outcome::Found(distance[finish])
    };
    debug!(start, finish, ?result, "shortest path with stop");
    Ok(result)
}

/// Number of distinct walks from `start` to `finish` with total distance
/// strictly below `max_distance_exclusive`.
///
/// The problem is NP-hard in general (longest path reduces to it), so this is
/// an exhaustive enumeration bounded by the distance cap. Exploration runs
/// backward from `finish`: a state `(v, d)` holds the number of walks from `v`
/// to `finish` of total distance exactly `d`. States are kept in a work queue
/// ordered by distance; equal states are merged before being expanded, and
/// because every edge is positive a state is complete by the time it is
/// popped. A predecessor state `(u, d + w)` is kept while `d + w` is at most
/// the cap; only distances strictly below the cap are counted.
///
/// The seed `(finish, 0)` is the empty walk and never counts as a route.
/// Worst case is exponential in the cap on densely cyclic graphs.
pub fn bounded_distance_route_count(
    graph: &Graph,
    start: VertexId,
    finish: VertexId,
    max_distance_exclusive: u64,
) -> Result<Outcome<u64>> {
    check_vertex(graph, start)?;
    check_vertex(graph, finish)?;

    // distance -> (vertex -> walks from vertex to finish at that distance)
    let mut queue: BTreeMap<u64, HashMap<VertexId, u64>> = BTreeMap::new();
    queue.entry(0).or_default().insert(finish, 1);

    let mut routes: u64 = 0;
    let mut states_expanded: usize = 0;

    while let Some((walked, layer)) = queue.pop_first() {
        for (vertex, walks) in layer {
            states_expanded += 1;

            if vertex == start && walked > 0 && walked < max_distance_exclusive {
                routes = routes.wrapping_add(walks);
            }

            for edge in graph.incoming_edges(vertex) {
                let extended = walked.saturating_add(u64::from(edge.distance));
                if extended > max_distance_exclusive {
                    continue;
                }
                let slot = queue
                    .entry(extended)
                    .or_default()
                    .entry(edge.from)
                    .or_insert(0);
                *slot = slot.wrapping_add(walks);
            }
        }
    }

    debug!(
        start,
        finish,
        max_distance_exclusive,
        states_expanded,
        routes,
        "bounded distance route count"
    );
    Ok(Outcome::nonzero(routes))
}
