//! Adjacency-matrix graphs over a compile-time-fixed vertex count.
//!
//! Two variants share the [`Adjacency`] capability: [`UndirectedGraph`]
//! keeps its relation symmetric on every write, [`DirectedGraph`] writes a
//! single direction. Both are backed by a heap-allocated `N×N` bit matrix
//! and never resize.

pub mod directed;
mod matrix;
pub mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

use bitvec::slice::BitSlice;
use thiserror::Error;

use crate::Vertex;

/// Error returned by the checked graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex argument was not in `[0, N)`.
    #[error("vertex {vertex} is out of bounds for a graph of {bound} vertices")]
    IndexOutOfBounds { vertex: Vertex, bound: usize },

    /// Both endpoints of a connection were the same vertex.
    #[error("cannot connect vertex {vertex} to itself")]
    SelfLoop { vertex: Vertex },
}

/// Capability trait for graphs over `N` dense vertices.
///
/// This is a closed abstraction over the two matrix-backed variants; it
/// exists so that code which only reads or writes single adjacencies can
/// take either one.
pub trait Adjacency<const N: usize> {
    /// Establishes the connection between `u` and `v`.
    ///
    /// Undirected graphs write both `(u, v)` and `(v, u)`; directed graphs
    /// write only `(u, v)`. Connecting an already connected pair is a no-op:
    /// parallel edges are not representable.
    fn connect(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError>;

    /// Clears the connection between `u` and `v`.
    fn disconnect(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError>;

    /// Whether `u` is connected to `v`.
    fn connected(&self, u: Vertex, v: Vertex) -> Result<bool, GraphError>;

    /// Borrows the adjacency row of `v`: bit `w` is set iff `v` connects
    /// to `w`.
    ///
    /// The row is exposed by reference because the tour algorithms scan it
    /// repeatedly.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not below `N`.
    fn row(&self, v: Vertex) -> &BitSlice;

    /// The vertex count `N`.
    #[inline]
    fn size(&self) -> usize {
        N
    }
}

/// Validates that a vertex argument is in `[0, N)`.
pub(crate) fn check_vertex<const N: usize>(vertex: Vertex) -> Result<(), GraphError> {
    if vertex >= N {
        return Err(GraphError::IndexOutOfBounds { vertex, bound: N });
    }
    Ok(())
}

/// Validates that both endpoints name distinct in-range vertices.
pub(crate) fn check_pair<const N: usize>(u: Vertex, v: Vertex) -> Result<(), GraphError> {
    check_vertex::<N>(u)?;
    check_vertex::<N>(v)?;
    if u == v {
        return Err(GraphError::SelfLoop { vertex: u });
    }
    Ok(())
}
