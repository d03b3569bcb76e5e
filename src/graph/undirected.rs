//! The undirected adjacency-matrix graph.

use bitvec::slice::BitSlice;

use super::matrix::BitMatrix;
use super::{check_pair, check_vertex, Adjacency, GraphError};
use crate::{Edge, Vertex};

/// An undirected graph over `N` vertices.
///
/// Every write keeps the adjacency relation symmetric:
/// `connected(u, v) == connected(v, u)` holds at all times. Vertices are the
/// dense integers `[0, N)` and `N` is fixed for the graph's lifetime.
///
/// # Example
///
/// ```
/// use eulerian::{Adjacency, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::<4>::new();
/// graph.connect(0, 3).unwrap();
/// assert!(graph.connected(3, 0).unwrap());
/// assert_eq!(graph.degree(0), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndirectedGraph<const N: usize> {
    matrix: BitMatrix<N>,
}

impl<const N: usize> UndirectedGraph<N> {
    /// Creates a graph with no connections.
    pub fn new() -> Self {
        Self {
            matrix: BitMatrix::new(),
        }
    }

    /// Creates a graph from an explicit edge list.
    ///
    /// # Example
    ///
    /// ```
    /// # use eulerian::UndirectedGraph;
    /// let triangle = UndirectedGraph::<3>::from_edges([(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert_eq!(triangle.edge_count(), 3);
    /// ```
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

    /// The number of vertices incident to `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not below `N`.
    pub fn degree(&self, v: Vertex) -> usize {
        self.matrix.row(v).count_ones()
    }

    /// The number of distinct edges in the graph.
    pub fn edge_count(&self) -> usize {
        // Each edge sets a bit in both endpoint rows.
        self.matrix.count_ones() / 2
    }

    /// Iterates over the distinct edges, each reported once with
    /// `source < target`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..N).flat_map(move |u| {
            self.matrix.row(u).iter_ones().filter_map(move |v| {
                if u < v {
                    Some(Edge::new(u, v))
                } else {
                    None
                }
            })
        })
    }

    /// Whether every non-isolated vertex is reachable from every other.
    ///
    /// Isolated vertices are ignored; a graph with no edges at all counts as
    /// connected. This is the reachability half of the Eulerian
    /// precondition.
    pub fn is_connected(&self) -> bool {
        let Some(seed) = (0..N).find(|&v| self.degree(v) > 0) else {
            return true;
        };

        let mut seen = vec![false; N];
        let mut stack = vec![seed];
        seen[seed] = true;

        while let Some(v) = stack.pop() {
            for w in self.matrix.row(v).iter_ones() {
                if !seen[w] {
                    seen[w] = true;
                    stack.push(w);
                }
            }
        }

        (0..N).all(|v| seen[v] || self.degree(v) == 0)
    }
}

impl<const N: usize> Adjacency<N> for UndirectedGraph<N> {
    fn connect(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        check_pair::<N>(u, v)?;
        self.matrix.set(u, v, true);
        self.matrix.set(v, u, true);
        Ok(())
    }

    fn disconnect(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        check_pair::<N>(u, v)?;
        self.matrix.set(u, v, false);
        self.matrix.set(v, u, false);
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
