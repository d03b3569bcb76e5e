//! Eulerian circuit construction.
//!
//! The builder repeatedly discovers a closed trail, trims it to a simple
//! sub-circuit, and splices the result into the accumulated tour at the
//! vertex where the two touch. This is Hierholzer's algorithm with local
//! bookkeeping only: a global set of committed edges and a frontier of
//! discovered, still-unused edges.

mod trim;
mod walk;

use std::collections::HashSet;

use thiserror::Error;

use crate::graph::{check_vertex, GraphError, UndirectedGraph};
use crate::{Edge, Vertex};

use trim::trim_trail;
use walk::Walk;

/// Error returned by [`find_eulerian_circuit`].
///
/// All variants signal violated preconditions or broken invariants; none is
/// recoverable by retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TourError {
    /// A trail search reached a vertex with no unused edge before closing.
    /// The input graph has a vertex of odd degree.
    #[error("no unused edge at vertex {vertex} while the trail is still open")]
    ExhaustedPath { vertex: Vertex },

    /// A sub-circuit did not touch the existing tour. This indicates an
    /// internal invariant break and cannot occur on valid Eulerian inputs.
    #[error("no splice point in the tour for a sub-circuit starting at vertex {vertex}")]
    Splice { vertex: Vertex },

    /// The frontier drained with edges left uncovered. The input graph is
    /// not connected.
    #[error("tour covers {covered} of {total} edges; the graph is not connected")]
    IncompleteCover { covered: usize, total: usize },

    /// The starting vertex was out of range.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Constructs an Eulerian circuit through `graph`, starting and ending at
/// `start`.
///
/// The returned edges form a closed walk that uses every edge of the graph
/// exactly once, each oriented in traversal order. The input must be
/// connected with every vertex of even degree — the generator guarantees
/// this for its graphs; hand-built graphs that violate it are reported via
/// [`TourError::ExhaustedPath`] or [`TourError::IncompleteCover`], never as
/// a malformed tour.
///
/// # Example
///
/// ```
/// # use eulerian::{find_eulerian_circuit, UndirectedGraph};
/// let square = UndirectedGraph::<4>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let tour = find_eulerian_circuit(&square, 2).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour[0].source(), 2);
/// assert_eq!(tour[3].target(), 2);
/// ```
pub fn find_eulerian_circuit<const N: usize>(
    graph: &UndirectedGraph<N>,
    start: Vertex,
) -> Result<Vec<Edge>, TourError> {
    check_vertex::<N>(start)?;

    let mut tour: Vec<Edge> = Vec::new();
    let mut visited: HashSet<Edge> = HashSet::new();
    let mut frontier: HashSet<Edge> = HashSet::new();
    let mut current = start;

    loop {
        let (leftover, raw) = Walk::new(graph, current).run(&visited)?;
        let circuit = trim_trail(raw);

        splice(&mut tour, &circuit)?;

        for &edge in &circuit {
            frontier.remove(&edge);
            visited.insert(edge);
        }

        for edge in leftover {
            if !visited.contains(&edge) {
                frontier.insert(edge);
            }
        }

        // Restart at any vertex that still has a known-unused edge; on a
        // connected graph every uncovered region eventually surfaces here.
        match frontier.iter().next() {
            Some(edge) => current = edge.source(),
            None => break,
        }
    }

    let total = graph.edge_count();
    if visited.len() != total {
        return Err(TourError::IncompleteCover {
            covered: visited.len(),
            total,
        });
    }

    Ok(tour)
}

/// Grafts a sub-circuit into the tour at the vertex where they touch.
///
/// An empty tour adopts the circuit verbatim. Otherwise the circuit is
/// inserted immediately after the first tour edge whose target equals the
/// circuit's starting vertex.
fn splice(tour: &mut Vec<Edge>, circuit: &[Edge]) -> Result<(), TourError> {
    let Some(first) = circuit.first() else {
        return Ok(());
    };

    if tour.is_empty() {
        tour.extend_from_slice(circuit);
        return Ok(());
    }

    let vertex = first.source();
    let at = tour
        .iter()
        .position(|edge| edge.target() == vertex)
        .ok_or(TourError::Splice { vertex })?;

    tour.splice(at + 1..at + 1, circuit.iter().copied());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::validate;

    fn assert_closed_walk(tour: &[Edge], start: Vertex) {
        assert_eq!(tour.first().unwrap().source(), start);
        assert_eq!(tour.last().unwrap().target(), start);
        for pair in tour.windows(2) {
            assert_eq!(
                pair[0].target(),
                pair[1].source(),
                "tour is not a contiguous walk"
            );
        }
    }

    /// Octahedron: six vertices, twelve edges, every degree four.
    fn octahedron() -> UndirectedGraph<6> {
        UndirectedGraph::from_edges([
            (0, 1),
            (1, 2),
            (2, 0),
            (3, 4),
            (4, 5),
            (5, 3),
            (0, 4),
            (0, 5),
            (1, 4),
            (1, 3),
            (2, 3),
            (2, 5),
        ])
        .unwrap()
    }

    #[test]
    fn octahedron_tour_covers_every_edge() {
        let graph = octahedron();
        let tour = find_eulerian_circuit(&graph, 0).unwrap();

        assert_eq!(tour.len(), 12);
        assert_closed_walk(&tour, 0);
        assert_eq!(tour.iter().copied().collect::<HashSet<_>>().len(), 12);
        assert!(validate(&graph, &tour).is_ok());
    }

    #[test]
    fn octahedron_tour_from_every_start() {
        let graph = octahedron();
        for start in 0..6 {
            let tour = find_eulerian_circuit(&graph, start).unwrap();
            assert_eq!(tour.len(), 12);
            assert_closed_walk(&tour, start);
        }
    }

    #[test]
    fn linked_boxes_tour() {
        // Three boxes sharing vertices 2 and 3: twelve edges on ten
        // vertices, degrees four at the shared corners and two elsewhere.
        let graph = UndirectedGraph::<10>::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (2, 4),
            (4, 5),
            (5, 6),
            (6, 2),
            (3, 7),
            (7, 8),
            (8, 9),
            (9, 3),
        ])
        .unwrap();

        let tour = find_eulerian_circuit(&graph, 0).unwrap();
        assert_eq!(tour.len(), 12);
        assert_closed_walk(&tour, 0);
        assert!(validate(&graph, &tour).is_ok());
    }

    #[test]
    fn odd_degree_vertex_is_reported() {
        // A triangle missing one side: vertices 0 and 2 have odd degree.
        let graph = UndirectedGraph::<3>::from_edges([(0, 1), (1, 2)]).unwrap();
        assert!(matches!(
            find_eulerian_circuit(&graph, 0),
            Err(TourError::ExhaustedPath { .. })
        ));
    }

    #[test]
    fn disconnected_graph_is_reported() {
        // Two disjoint triangles. The walk from vertex 0 closes the first
        // triangle cleanly; the second is unreachable.
        let graph =
            UndirectedGraph::<6>::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
                .unwrap();
        assert_eq!(
            find_eulerian_circuit(&graph, 0),
            Err(TourError::IncompleteCover {
                covered: 3,
                total: 6
            })
        );
    }

    #[test]
    fn out_of_range_start_is_reported() {
        let graph = UndirectedGraph::<3>::from_edges([(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(
            find_eulerian_circuit(&graph, 3),
            Err(TourError::Graph(GraphError::IndexOutOfBounds {
                vertex: 3,
                bound: 3
            }))
        );
    }

    #[test]
    fn splice_into_empty_tour_adopts_the_circuit() {
        let circuit = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
        let mut tour = Vec::new();
        splice(&mut tour, &circuit).unwrap();
        assert_eq!(tour, circuit);
    }

    #[test]
    fn splice_inserts_after_the_touching_edge() {
        let mut tour = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];
        let circuit = vec![Edge::new(1, 3), Edge::new(3, 4), Edge::new(4, 1)];
        splice(&mut tour, &circuit).unwrap();

        assert_eq!(
            tour,
            vec![
                Edge::new(0, 1),
                Edge::new(1, 3),
                Edge::new(3, 4),
                Edge::new(4, 1),
                Edge::new(1, 2),
                Edge::new(2, 0),
            ]
        );
        // Still one contiguous closed walk.
        for pair in tour.windows(2) {
            assert_eq!(pair[0].target(), pair[1].source());
        }
    }

    #[test]
    fn splice_without_a_touch_point_is_an_error() {
        let mut tour = vec![Edge::new(0, 1), Edge::new(1, 0)];
        let circuit = vec![Edge::new(5, 6), Edge::new(6, 5)];
        assert_eq!(
            splice(&mut tour, &circuit),
            Err(TourError::Splice { vertex: 5 })
        );
    }

    mod properties {
        use proptest::prelude::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        use super::*;
        use crate::generate;

        proptest! {
            #[test]
            fn generated_graphs_always_admit_a_valid_tour(seed in any::<u64>()) {
                let mut rng = StdRng::seed_from_u64(seed);
                let graph = generate::<12, _>(&mut rng).unwrap();

                let tour = find_eulerian_circuit(&graph, 0).unwrap();
                prop_assert_eq!(tour.len(), graph.edge_count());
                prop_assert!(validate(&graph, &tour).is_ok());
            }
        }
    }
}
