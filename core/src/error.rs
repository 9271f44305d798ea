use thiserror::Error;

use crate::graph::VertexId;

/// Validation failures raised while building a graph or running a query.
///
/// "No such route" is not an error; see [`crate::Outcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("edges are missing")]
    EmptyGraph,

    #[error("vertex {vertex} is out of range, graph has {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("distance must be positive, edge {from}->{to} has {distance}")]
    NonPositiveDistance {
        from: VertexId,
        to: VertexId,
        distance: u32,
    },

    #[error("{name} must be non-negative, was {value}")]
    NegativeParameter { name: &'static str, value: i64 },

    #[error("{name} is too large, was {value}")]
    ParameterTooLarge { name: &'static str, value: i64 },

    #[error("cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, RouteError>;
