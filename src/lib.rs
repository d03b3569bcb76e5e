//! Eulerian circuit construction over fixed-size adjacency-matrix graphs.
//!
//! An Eulerian circuit is a closed walk that traverses every edge of a graph
//! exactly once. This crate builds such circuits with a trail-discovery-and-
//! splice strategy (a variant of Hierholzer's algorithm): partial closed
//! trails are walked greedily, trimmed down to simple sub-circuits, and
//! spliced into the growing tour until every edge is covered.
//!
//! Graphs have a compile-time-fixed vertex count `N` and store their
//! adjacency relation as a heap-backed `N×N` bit matrix. The crate also ships
//! a random generator for valid inputs (connected, every vertex of even
//! degree) and a validator for the tours it produces.
//!
//! # Example
//!
//! ```
//! use eulerian::{find_eulerian_circuit, validate, UndirectedGraph};
//!
//! // The octahedron: six vertices, all of degree four.
//! let graph = UndirectedGraph::<6>::from_edges([
//!     (0, 1), (1, 2), (2, 0),
//!     (3, 4), (4, 5), (5, 3),
//!     (0, 4), (0, 5), (1, 4), (1, 3), (2, 3), (2, 5),
//! ]).unwrap();
//!
//! let tour = find_eulerian_circuit(&graph, 0).unwrap();
//! assert_eq!(tour.len(), 12);
//! assert!(validate(&graph, &tour).is_ok());
//! ```

pub mod edge;
pub mod generate;
pub mod graph;
pub mod tour;
pub mod validate;

pub use crate::edge::Edge;
pub use crate::generate::{generate, generate_with_retries, GenerateError};
pub use crate::graph::{Adjacency, DirectedGraph, GraphError, UndirectedGraph};
pub use crate::tour::{find_eulerian_circuit, TourError};
pub use crate::validate::{validate, TourViolation};

/// A vertex identifier, dense in `[0, N)` for a graph over `N` vertices.
pub type Vertex = usize;
