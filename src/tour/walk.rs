//! Greedy discovery of closed trails.

use std::collections::HashSet;

use crate::graph::{Adjacency, UndirectedGraph};
use crate::tour::TourError;
use crate::{Edge, Vertex};

/// One trail search: a walk that starts at a vertex and keeps taking the
/// most recently discovered unused edge until it arrives back at the start.
///
/// The walk owns its local bookkeeping — the edges taken by *this* walk and
/// the stack of discovered-but-untaken edges — while the globally committed
/// edges are a read-only collaborator. The graph itself is never mutated.
pub(crate) struct Walk<'a, const N: usize> {
    graph: &'a UndirectedGraph<N>,
    start: Vertex,
    taken: HashSet<Edge>,
    pending: Vec<Edge>,
    trail: Vec<Edge>,
}

impl<'a, const N: usize> Walk<'a, N> {
    pub fn new(graph: &'a UndirectedGraph<N>, start: Vertex) -> Self {
        Self {
            graph,
            start,
            taken: HashSet::new(),
            pending: Vec::new(),
            trail: Vec::new(),
        }
    }

    /// Runs the walk to completion.
    ///
    /// Returns the raw trail — a closed walk from the start back to the
    /// start, possibly with detours — together with the leftover stack of
    /// edges that were discovered but not taken. Any leftover edge the
    /// caller finds to still be unused becomes a future splice point.
    ///
    /// Fails with [`TourError::ExhaustedPath`] when some vertex offers no
    /// unused edge while the walk is still open; on a connected graph with
    /// all degrees even this cannot happen.
    pub fn run(mut self, visited: &HashSet<Edge>) -> Result<(Vec<Edge>, Vec<Edge>), TourError> {
        let mut current = self.start;

        loop {
            // Offer every unused edge at the current vertex, most recent on
            // top. At least one must appear: an open walk always leaves an
            // odd number of unused edges at its head.
            let before = self.pending.len();
            for neighbour in self.graph.row(current).iter_ones() {
                let edge = Edge::new(current, neighbour);
                if !self.taken.contains(&edge) && !visited.contains(&edge) {
                    self.pending.push(edge);
                }
            }

            if self.pending.len() == before {
                return Err(TourError::ExhaustedPath { vertex: current });
            }

            // The top of the stack was pushed this round, so it is oriented
            // away from `current`.
            let next = self.pending.pop().ok_or(TourError::ExhaustedPath { vertex: current })?;
            current = next.target();
            self.taken.insert(next);
            self.trail.push(next);

            if current == self.start {
                return Ok((self.pending, self.trail));
            }
        }
    }
}
