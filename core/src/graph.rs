use std::collections::BTreeSet;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Result, RouteError};
use crate::matrix::Matrix;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// A directed, weighted edge. Distances are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub distance: u32,
}

impl Edge {
    /// Validated constructor. Endpoint ranges are checked later by
    /// [`Graph::build`], which knows the vertex count.
    pub fn new(from: VertexId, to: VertexId, distance: u32) -> Result<Self> {
        if distance == 0 {
            return Err(RouteError::NonPositiveDistance { from, to, distance });
        }
        Ok(Self { from, to, distance })
    }
}

/// Immutable weighted directed multigraph.
///
/// Edges are indexed both ways: `outgoing[a]` holds edges leaving a,
/// `incoming[b]` holds edges entering b, each in input edge-list order.
/// Every vertex in `[0, vertex_count)` has an entry in both indexes.
///
/// Dense matrix views are derived from the edge list on first use and cached;
/// the cache is filled at most once, so a `Graph` can be shared across threads
/// for read-only queries.
#[derive(Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<Edge>>,
    incoming: Vec<Vec<Edge>>,
    weighted: OnceLock<Matrix>,
    connectivity: OnceLock<Matrix>,
}

impl Graph {
    /// Build a graph from its complete edge list.
    ///
    /// Fails if the edge list is empty, if an endpoint is outside
    /// `[0, vertex_count)`, or if a distance is zero.
    pub fn build<I>(edges: I, vertex_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(RouteError::EmptyGraph);
        }

        let mut outgoing: Vec<Vec<Edge>> = vec![Vec::new(); vertex_count];
        let mut incoming: Vec<Vec<Edge>> = vec![Vec::new(); vertex_count];

        for edge in &edges {
            for endpoint in [edge.from, edge.to] {
                if endpoint >= vertex_count {
                    return Err(RouteError::VertexOutOfRange {
                        vertex: endpoint,
                        vertex_count,
                    });
                }
            }
            if edge.distance == 0 {
                return Err(RouteError::NonPositiveDistance {
                    from: edge.from,
                    to: edge.to,
                    distance: edge.distance,
                });
            }
            outgoing[edge.from].push(*edge);
            incoming[edge.to].push(*edge);
        }

        debug!(
            vertices = vertex_count,
            edges = edges.len(),
            "built route graph"
        );

        Ok(Self {
            vertex_count,
            edges,
            outgoing,
            incoming,
            weighted: OnceLock::new(),
            connectivity: OnceLock::new(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in the order they were supplied.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count
    }

    /// Edges starting at `vertex`. Empty for unknown vertices.
    pub fn outgoing_edges(&self, vertex: VertexId) -> &[Edge] {
        self.outgoing.get(vertex).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Edges ending at `vertex`. Empty for unknown vertices.
    pub fn incoming_edges(&self, vertex: VertexId) -> &[Edge] {
        self.incoming.get(vertex).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Vertex ids that appear as an endpoint of some edge.
    pub fn vertices(&self) -> BTreeSet<VertexId> {
        self.edges.iter().flat_map(|e| [e.from, e.to]).collect()
    }

    /// Dense `V×V` matrix of edge distances; 0 means "no edge".
    ///
    /// With parallel edges the last one in edge-list order wins.
    pub fn weighted_matrix(&self) -> &Matrix {
        self.weighted
            .get_or_init(|| self.fill_matrix(|e| u64::from(e.distance)))
    }

    /// Dense `V×V` 0/1 matrix of direct-edge existence.
    pub fn connectivity_matrix(&self) -> &Matrix {
        self.connectivity.get_or_init(|| self.fill_matrix(|_| 1))
    }

    fn fill_matrix(&self, cell: impl Fn(&Edge) -> u64) -> Matrix {
        let mut m = Matrix::zeros(self.vertex_count, self.vertex_count);
        for from in 0..self.vertex_count {
            for edge in self.outgoing_edges(from) {
                m.set(from, edge.to, cell(edge));
            }
        }
        m
    }

    /// Approximate memory usage in bytes, including any cached matrices.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let edge_mem = self.edges.len() * size_of::<Edge>() * 3;
        let index_mem = self.vertex_count * size_of::<Vec<Edge>>() * 2;
        let matrix_cells = [self.weighted.get(), self.connectivity.get()]
            .iter()
            .flatten()
            .map(|m| m.rows() * m.cols())
            .sum::<usize>();

        edge_mem + index_mem + matrix_cells * size_of::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: VertexId, to: VertexId, distance: u32) -> Edge {
        Edge { from, to, distance }
    }

    fn make_triangle() -> Graph {
        Graph::build(vec![edge(0, 2, 1), edge(1, 0, 2), edge(1, 2, 3)], 3).unwrap()
    }

    #[test]
    fn test_outgoing_edges() {
        let g = make_triangle();
        assert_eq!(g.outgoing_edges(0), &[edge(0, 2, 1)]);
        assert_eq!(g.outgoing_edges(1), &[edge(1, 0, 2), edge(1, 2, 3)]);
        assert!(g.outgoing_edges(2).is_empty());
    }

    #[test]
    fn test_incoming_edges() {
        let g = Graph::build(vec![edge(0, 1, 1)], 2).unwrap();
        assert!(g.incoming_edges(0).is_empty());
        assert_eq!(g.incoming_edges(1), &[edge(0, 1, 1)]);
    }

    #[test]
    fn test_unknown_vertex_has_no_edges() {
        let g = make_triangle();
        assert!(g.outgoing_edges(99).is_empty());
        assert!(g.incoming_edges(99).is_empty());
        assert!(!g.contains_vertex(3));
    }

    #[test]
    fn test_vertices() {
        let g = make_triangle();
        assert_eq!(g.vertices().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_isolated_vertex_not_in_vertices() {
        let g = Graph::build(vec![edge(0, 1, 4)], 3).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(!g.vertices().contains(&2));
        assert!(g.outgoing_edges(2).is_empty());
    }

    #[test]
    fn test_connectivity_matrix() {
        let g = make_triangle();
        let m = g.connectivity_matrix();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(0), &[0, 0, 1]);
        assert_eq!(m.row(1), &[1, 0, 1]);
        assert_eq!(m.row(2), &[0, 0, 0]);
    }

    #[test]
    fn test_weighted_matrix() {
        let g = make_triangle();
        let m = g.weighted_matrix();
        assert_eq!(m[(0, 2)], 1);
        assert_eq!(m[(1, 0)], 2);
        assert_eq!(m[(1, 2)], 3);
        assert_eq!(m[(2, 1)], 0);
    }

    #[test]
    fn test_parallel_edges_last_wins() {
        let g = Graph::build(vec![edge(0, 1, 7), edge(0, 1, 3)], 2).unwrap();
        assert_eq!(g.weighted_matrix()[(0, 1)], 3);
        assert_eq!(g.connectivity_matrix()[(0, 1)], 1);
        assert_eq!(g.outgoing_edges(0).len(), 2);
    }

    #[test]
    fn test_self_loop() {
        let g = Graph::build(vec![edge(0, 0, 2)], 1).unwrap();
        assert_eq!(g.outgoing_edges(0), g.incoming_edges(0));
        assert_eq!(g.weighted_matrix()[(0, 0)], 2);
    }

    #[test]
    fn test_matrix_cached() {
        let g = make_triangle();
        let first = g.weighted_matrix() as *const Matrix;
        let second = g.weighted_matrix() as *const Matrix;
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_edges_rejected() {
        let err = Graph::build(Vec::new(), 3).unwrap_err();
        assert_eq!(err, RouteError::EmptyGraph);
    }

    #[test]
    fn test_out_of_range_endpoint_rejected() {
        let err = Graph::build(vec![edge(0, 3, 1)], 3).unwrap_err();
        assert_eq!(
            err,
            RouteError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_zero_distance_rejected() {
        assert!(Edge::new(0, 1, 0).is_err());
        assert!(Graph::build(vec![edge(0, 1, 0)], 2).is_err());
    }

    #[test]
    fn test_graph_counts() {
        let g = make_triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn test_memory_usage_grows_with_matrix_cache() {
        let g = make_triangle();
        let before = g.memory_usage();
        g.connectivity_matrix();
        assert!(g.memory_usage() > before);
    }

    #[test]
    fn test_graph_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }
}
