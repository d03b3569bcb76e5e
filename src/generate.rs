//! Random generation of Eulerian-eligible graphs.
//!
//! A connected graph admits an Eulerian circuit exactly when every vertex
//! has even degree. The generator establishes both properties
//! constructively: it first spans all vertices with random attachments, then
//! pairs up the odd-degree vertices with extra edges until none remain.

use rand::Rng;
use thiserror::Error;

use crate::graph::{Adjacency, GraphError, UndirectedGraph};
use crate::Vertex;

/// Attempts granted to [`generate`] before it gives up.
///
/// The parity-pairing phase is probabilistic and can paint itself into a
/// corner (an odd vertex already adjacent to every other candidate), in
/// which case the whole construction restarts from scratch.
pub const DEFAULT_RETRY_LIMIT: usize = 64;

/// Error returned by the graph generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No simple graph on fewer than three vertices has an Eulerian circuit.
    #[error("cannot generate an Eulerian graph on {size} vertices; need at least 3")]
    TooFewVertices { size: usize },

    /// Every attempt ended with an unpairable odd-degree vertex.
    #[error("graph generation failed {attempts} times in a row")]
    RetryLimitExceeded { attempts: usize },

    /// A connection failed; does not occur for the generator's own vertices.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates a random connected graph in which every vertex has even,
/// nonzero degree.
///
/// The returned graph is a valid input for
/// [`find_eulerian_circuit`](crate::find_eulerian_circuit) from any
/// starting vertex. Retries up to [`DEFAULT_RETRY_LIMIT`] times before
/// reporting failure.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let graph = eulerian::generate::<16, _>(&mut rng).unwrap();
/// assert!(graph.is_connected());
/// assert!((0..16).all(|v| graph.degree(v) % 2 == 0));
/// ```
pub fn generate<const N: usize, R: Rng>(rng: &mut R) -> Result<UndirectedGraph<N>, GenerateError> {
    generate_with_retries(rng, DEFAULT_RETRY_LIMIT)
}

/// Same as [`generate`], with an explicit bound on construction attempts.
pub fn generate_with_retries<const N: usize, R: Rng>(
    rng: &mut R,
    retries: usize,
) -> Result<UndirectedGraph<N>, GenerateError> {
    if N < 3 {
        return Err(GenerateError::TooFewVertices { size: N });
    }

    for _ in 0..retries {
        if let Some(graph) = try_generate::<N, R>(rng)? {
            return Ok(graph);
        }
    }

    Err(GenerateError::RetryLimitExceeded { attempts: retries })
}

/// One construction attempt. `None` means the parity pairing got stuck and
/// the caller should start over.
fn try_generate<const N: usize, R: Rng>(
    rng: &mut R,
) -> Result<Option<UndirectedGraph<N>>, GenerateError> {
    let mut graph = UndirectedGraph::<N>::new();

    // Spanning phase: seed with one random edge, then repeatedly attach a
    // random disconnected vertex to a random connected one. The result is a
    // random spanning tree plus the seed edge.
    let mut disconnected: Vec<Vertex> = (0..N).collect();
    let mut connected: Vec<Vertex> = Vec::with_capacity(N);

    let seed_a = pop_random(&mut disconnected, rng).ok_or(GenerateError::TooFewVertices { size: N })?;
    let seed_b = pop_random(&mut disconnected, rng).ok_or(GenerateError::TooFewVertices { size: N })?;
    graph.connect(seed_a, seed_b)?;
    connected.push(seed_a);
    connected.push(seed_b);

    while let Some(fresh) = pop_random(&mut disconnected, rng) {
        let anchor = connected[rng.gen_range(0..connected.len())];
        graph.connect(anchor, fresh)?;
        connected.push(fresh);
    }

    // Parity phase: pair odd vertices together until none are left. An odd
    // vertex with no unconnected odd partner borrows an even one, flipping
    // that vertex's parity.
    let (mut odd, mut even): (Vec<Vertex>, Vec<Vertex>) =
        (0..N).partition(|&v| graph.degree(v) % 2 == 1);

    while let Some(vertex) = pop_random(&mut odd, rng) {
        let row = graph.row(vertex);

        if let Some(at) = odd.iter().position(|&other| !row[other]) {
            let partner = odd.remove(at);
            graph.connect(vertex, partner)?;
            even.push(vertex);
            even.push(partner);
        } else if let Some(at) = even.iter().position(|&other| !row[other]) {
            let partner = even.remove(at);
            graph.connect(vertex, partner)?;
            even.push(vertex);
            odd.push(partner);
        } else {
            // Every remaining candidate is already adjacent to `vertex`.
            return Ok(None);
        }
    }

    Ok(Some(graph))
}

/// Removes and returns a uniformly chosen element.
fn pop_random<T: Copy, R: Rng>(items: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let at = rng.gen_range(0..items.len());
    Some(items.swap_remove(at))
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    fn assert_eulerian_eligible<const N: usize>(graph: &UndirectedGraph<N>) {
        assert!(graph.is_connected(), "generated graph must be connected");
        for v in 0..N {
            let degree = graph.degree(v);
            assert!(degree > 0, "vertex {v} is isolated");
            assert_eq!(degree % 2, 0, "vertex {v} has odd degree {degree}");
        }
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(1234)]
    #[case(u64::MAX)]
    fn generated_graphs_satisfy_the_postcondition(#[case] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eulerian_eligible(&generate::<3, _>(&mut rng).unwrap());
        assert_eulerian_eligible(&generate::<8, _>(&mut rng).unwrap());
        assert_eulerian_eligible(&generate::<33, _>(&mut rng).unwrap());
    }

    #[test]
    fn too_small_sizes_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate::<2, _>(&mut rng),
            Err(GenerateError::TooFewVertices { size: 2 })
        );
    }

    #[test]
    fn zero_retries_report_the_limit() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_with_retries::<5, _>(&mut rng, 0),
            Err(GenerateError::RetryLimitExceeded { attempts: 0 })
        );
    }

    #[test]
    fn pop_random_drains_every_element() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items = vec![1, 2, 3, 4];
        let mut drained = Vec::new();
        while let Some(item) = pop_random(&mut items, &mut rng) {
            drained.push(item);
        }
        drained.sort_unstable();
        assert_eq!(drained, vec![1, 2, 3, 4]);
        assert_eq!(pop_random::<i32, _>(&mut Vec::new(), &mut rng), None);
    }
}
