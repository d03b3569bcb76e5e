//! Undirected edges with a traversal orientation.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Vertex;

/// An edge between two distinct vertices.
///
/// An `Edge` remembers the orientation it was constructed with — [`source`]
/// and [`target`] are the order in which a walk traverses it — but equality
/// and hashing ignore that orientation: `{1, 2}` and `{2, 1}` are the same
/// edge, land in the same hash bucket, and collapse to one entry in a set.
///
/// [`source`]: Edge::source
/// [`target`]: Edge::target
///
/// # Example
///
/// ```
/// # use eulerian::Edge;
/// assert_eq!(Edge::new(1, 2), Edge::new(2, 1));
/// assert_ne!(Edge::new(1, 2).source(), Edge::new(2, 1).source());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    source: Vertex,
    target: Vertex,
}

impl Edge {
    /// Creates an edge oriented from `source` to `target`.
    ///
    /// The endpoints must be distinct; self-loops are not part of the model.
    pub fn new(source: Vertex, target: Vertex) -> Self {
        debug_assert_ne!(source, target, "self-loops are not representable");
        Self { source, target }
    }

    /// The vertex a traversal of this edge leaves from.
    #[inline]
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// The vertex a traversal of this edge arrives at.
    #[inline]
    pub fn target(&self) -> Vertex {
        self.target
    }

    /// The same edge traversed in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// The endpoints as an `(min, max)` pair, independent of orientation.
    #[inline]
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((source, target): (Vertex, Vertex)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.source, self.target)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_orientation() {
        assert_eq!(Edge::new(1, 2), Edge::new(2, 1));
        assert_ne!(Edge::new(1, 2), Edge::new(1, 3));
    }

    #[test]
    fn hash_ignores_orientation() {
        let mut set = HashSet::new();
        assert!(set.insert(Edge::new(4, 7)));
        assert!(!set.insert(Edge::new(7, 4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn orientation_is_preserved() {
        let edge = Edge::new(3, 5);
        assert_eq!(edge.source(), 3);
        assert_eq!(edge.target(), 5);
        assert_eq!(edge.reversed().source(), 5);
        assert_eq!(edge.endpoints(), edge.reversed().endpoints());
    }
}
