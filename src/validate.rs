//! Tour validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::graph::{Adjacency, UndirectedGraph};
use crate::{Edge, Vertex};

/// The reason a tour failed validation.
///
/// A graph legitimately may not admit the claimed circuit, so validation
/// reports its verdict as a structured result rather than treating failure
/// as exceptional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TourViolation {
    /// The tour does not end where it began.
    #[error("tour starts at vertex {start} but ends at vertex {end}")]
    NotClosed { start: Vertex, end: Vertex },

    /// An edge appears more than once in the tour.
    #[error("edge {edge} appears more than once in the tour")]
    DuplicateEdge { edge: Edge },

    /// The tour contains an edge the graph does not have.
    #[error("edge {edge} is not an edge of the graph")]
    ForeignEdge { edge: Edge },

    /// The tour misses some of the graph's edges.
    #[error("tour covers {covered} of {expected} graph edges")]
    CoverageMismatch { covered: usize, expected: usize },
}

/// Checks that `tour` is an Eulerian circuit of `graph`.
///
/// Verifies, in order: the tour is closed (first source equals last
/// target), no edge is repeated, and the tour's edge set equals the graph's
/// edge set in both membership and size. An empty tour is valid exactly for
/// a graph with no edges.
///
/// This is a pure query — it never mutates its inputs and repeated calls
/// return the same verdict.
///
/// # Example
///
/// ```
/// # use eulerian::{validate, Edge, UndirectedGraph, TourViolation};
/// let triangle = UndirectedGraph::<3>::from_edges([(0, 1), (1, 2), (2, 0)]).unwrap();
/// let tour = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
/// assert!(validate(&triangle, &tour).is_ok());
///
/// assert_eq!(
///     validate(&triangle, &tour[..2]),
///     Err(TourViolation::NotClosed { start: 0, end: 2 })
/// );
/// ```
pub fn validate<const N: usize>(
    graph: &UndirectedGraph<N>,
    tour: &[Edge],
) -> Result<(), TourViolation> {
    let expected = graph.edge_count();

    let (Some(first), Some(last)) = (tour.first(), tour.last()) else {
        return if expected == 0 {
            Ok(())
        } else {
            Err(TourViolation::CoverageMismatch {
                covered: 0,
                expected,
            })
        };
    };

    if first.source() != last.target() {
        return Err(TourViolation::NotClosed {
            start: first.source(),
            end: last.target(),
        });
    }

    let mut seen: HashSet<Edge> = HashSet::with_capacity(tour.len());
    for &edge in tour {
        if !seen.insert(edge) {
            return Err(TourViolation::DuplicateEdge { edge });
        }
    }

    for &edge in tour {
        let (u, v) = edge.endpoints();
        if v >= graph.size() || !graph.row(u)[v] {
            return Err(TourViolation::ForeignEdge { edge });
        }
    }

    if tour.len() != expected {
        return Err(TourViolation::CoverageMismatch {
            covered: tour.len(),
            expected,
        });
    }

    Ok(())
}
