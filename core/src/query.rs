use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::error::{Result, RouteError};
use crate::graph::{Graph, VertexId};
use crate::traversal::{self, Outcome};
use crate::walks;

/// The five supported route problems, tagged `P1`..`P5` in text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// P1: distance along an explicit route.
    RouteDistance,
    /// P2: walks with at most N stops.
    BoundedStops,
    /// P3: walks with exactly N stops.
    ExactStops,
    /// P4: shortest distance with at least one stop.
    ShortestWithStop,
    /// P5: walks shorter than a distance cap.
    BoundedDistance,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 5] = [
        ProblemKind::RouteDistance,
        ProblemKind::BoundedStops,
        ProblemKind::ExactStops,
        ProblemKind::ShortestWithStop,
        ProblemKind::BoundedDistance,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ProblemKind::RouteDistance => "P1",
            ProblemKind::BoundedStops => "P2",
            ProblemKind::ExactStops => "P3",
            ProblemKind::ShortestWithStop => "P4",
            ProblemKind::BoundedDistance => "P5",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Unrecognized problem tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown problem '{0}', expected one of P1..P5")]
pub struct UnknownProblem(pub String);

impl FromStr for ProblemKind {
    type Err = UnknownProblem;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProblemKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownProblem(s.to_string()))
    }
}

/// A fully resolved route query.
///
/// Vertices are dense ids already mapped by the caller. Counts and bounds are
/// signed as they arrive from text input; negative values are rejected by
/// [`Query::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    RouteDistance {
        route: Vec<VertexId>,
    },
    BoundedStops {
        start: VertexId,
        finish: VertexId,
        max_stops: i64,
    },
    ExactStops {
        start: VertexId,
        finish: VertexId,
        stops: i64,
    },
    ShortestWithStop {
        start: VertexId,
        finish: VertexId,
    },
    BoundedDistance {
        start: VertexId,
        finish: VertexId,
        max_distance: i64,
    },
}

impl Query {
    pub fn kind(&self) -> ProblemKind {
        match self {
            Query::RouteDistance { .. } => ProblemKind::RouteDistance,
            Query::BoundedStops { .. } => ProblemKind::BoundedStops,
            Query::ExactStops { .. } => ProblemKind::ExactStops,
            Query::ShortestWithStop { .. } => ProblemKind::ShortestWithStop,
            Query::BoundedDistance { .. } => ProblemKind::BoundedDistance,
        }
    }

    /// Run the query against `graph`.
    ///
    /// Counting problems (P2, P3) always answer `Found`, zero included.
    pub fn execute(&self, graph: &Graph) -> Result<Outcome<u64>> {
        debug!(problem = %self.kind(), query = ?self, "executing query");

        match self {
            Query::RouteDistance { route } => traversal::route_distance(graph, route),
            Query::BoundedStops {
                start,
                finish,
                max_stops,
            } => {
                let max_stops = check_stop_count(*max_stops, "max_stops")?;
                walks::bounded_stops_route_count(graph, *start, *finish, max_stops)
                    .map(Outcome::Found)
            }
            Query::ExactStops {
                start,
                finish,
                stops,
            } => {
                let stops = check_stop_count(*stops, "stops")?;
                walks::exact_stops_route_count(graph, *start, *finish, stops).map(Outcome::Found)
            }
            Query::ShortestWithStop { start, finish } => {
                traversal::shortest_path_with_stop(graph, *start, *finish)
            }
            Query::BoundedDistance {
                start,
                finish,
                max_distance,
            } => {
                let max_distance = check_non_negative(*max_distance, "max_distance")?;
                traversal::bounded_distance_route_count(graph, *start, *finish, max_distance)
            }
        }
    }
}

/// Validate that a count/bound parameter is non-negative.
fn check_non_negative(value: i64, name: &'static str) -> Result<u64> {
    u64::try_from(value).map_err(|_| RouteError::NegativeParameter { name, value })
}

fn check_stop_count(value: i64, name: &'static str) -> Result<u32> {
    let value_u64 = check_non_negative(value, name)?;
    u32::try_from(value_u64).map_err(|_| RouteError::ParameterTooLarge { name, value })
}
