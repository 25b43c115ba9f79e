use std::fmt::{Debug, Display};

use crate::node::Node;

/// A directed edge `(source, target)` given by the indices of its two endpoints.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Simple bijection from `0..n(n - 1)` to all possible loop-free directed edges of `n` nodes.
    ///
    /// Every source `u` owns the `n - 1` consecutive values `u(n - 1)..(u + 1)(n - 1)`; the
    /// offset within that block enumerates all targets but skips `u` itself.
    pub fn from_u64_loopless(x: u64, n: u64) -> Self {
        debug_assert!(n > 1 && x < n * (n - 1));

        let u = x / (n - 1);
        let mut v = x % (n - 1);
        if v >= u {
            v += 1;
        }
        Edge(u as Node, v as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn loopless_bijection() {
        for n in 2..12u64 {
            let edges = (0..n * (n - 1))
                .map(|x| Edge::from_u64_loopless(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| !e.is_loop()));
            assert!(edges.iter().all(|e| (e.0 as u64) < n && (e.1 as u64) < n));
            assert_eq!(edges.iter().unique().count(), edges.len());
        }
    }

    #[test]
    fn display() {
        assert_eq!(Edge(3, 5).to_string(), "(3,5)");
    }
}
