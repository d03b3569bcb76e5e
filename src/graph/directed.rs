//! The directed adjacency-matrix graph.

use bitvec::slice::BitSlice;

use super::matrix::BitMatrix;
use super::{check_pair, check_vertex, Adjacency, GraphError};
use crate::{Edge, Vertex};

/// A directed graph over `N` vertices.
///
/// Writes are asymmetric: `connect(u, v)` establishes only the `u → v`
/// adjacency and makes no guarantee about `v → u`. This variant exists for
/// graph storage; the circuit algorithms operate on [`UndirectedGraph`]
/// only.
///
/// [`UndirectedGraph`]: crate::UndirectedGraph
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectedGraph<const N: usize> {
    matrix: BitMatrix<N>,
}

impl<const N: usize> DirectedGraph<N> {
    /// Creates a graph with no connections.
    pub fn new() -> Self {
        Self {
            matrix: BitMatrix::new(),
        }
    }

    /// Creates a graph from an explicit list of `source → target` edges.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let edge = edge.into();
            graph.connect(edge.source(), edge.target())?;
        }
        Ok(graph)
    }

    /// The number of vertices `v` points at.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not below `N`.
    pub fn out_degree(&self, v: Vertex) -> usize {
        self.matrix.row(v).count_ones()
    }

    /// The number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.matrix.count_ones()
    }
}

impl<const N: usize> Adjacency<N> for DirectedGraph<N> {
    fn connect(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        check_pair::<N>(u, v)?;
        self.matrix.set(u, v, true);
        Ok(())
    }

    fn disconnect(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        check_pair::<N>(u, v)?;
        self.matrix.set(u, v, false);
        Ok(())
    }

    fn connected(&self, u: Vertex, v: Vertex) -> Result<bool, GraphError> {
        check_vertex::<N>(u)?;
        check_vertex::<N>(v)?;
        Ok(u != v && self.matrix.get(u, v))
    }

    fn row(&self, v: Vertex) -> &BitSlice {
        self.matrix.row(v)
    }
}
