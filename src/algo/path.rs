use std::sync::OnceLock;

use super::*;

/// Engines that extract a shortest path between two vertices of their graph.
///
/// Implemented by [`Exploration`] (fewest hops) and [`Dijkstra`] (least total weight), so that
/// the [`Cycles`] extractor can close cycles along either kind of path.
pub trait ShortestPath<W: Weight>: Send + Sync {
    /// The graph the engine operates on
    fn graph(&self) -> &Graph<W>;

    /// Returns the path `start -> .. -> end` as a graph of its edges, with vertices in the order
    /// of the underlying graph. Returns the empty graph if `end` cannot be reached or if
    /// `start == end`.
    /// ** Panics if `start >= n || end >= n` **
    fn shortest_path(&self, start: Node, end: Node) -> &Graph<W>;

    /// Like [`ShortestPath::shortest_path`] but with vertices given by name
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownName`](crate::error::GraphError::UnknownName) if either
    /// name does not exist.
    fn shortest_path_between(&self, start: &str, end: &str) -> Result<&Graph<W>> {
        let graph = self.graph();
        Ok(self.shortest_path(graph.index_of(start)?, graph.index_of(end)?))
    }
}

/// Compute-once slots for every start vertex
pub(crate) fn per_start<T>(n: usize) -> Box<[OnceLock<T>]> {
    (0..n).map(|_| OnceLock::new()).collect()
}

/// Compute-once slots for every pair of vertices.
/// The row of a start vertex is only allocated on its first use.
pub(crate) struct PairCache<T> {
    rows: Box<[OnceLock<Box<[OnceLock<T>]>>]>,
}

impl<T> PairCache<T> {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            rows: per_start(n),
        }
    }

    /// Returns the value for `(start, end)`, computing it with `init` if absent.
    /// ** Panics if `start >= n || end >= n` **
    pub(crate) fn get_or_init<F>(&self, start: Node, end: Node, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        let n = self.rows.len();
        let row = self.rows[start as usize].get_or_init(|| per_start(n));
        row[end as usize].get_or_init(init)
    }

    /// Returns the value for `(start, end)` if it was already computed
    #[cfg(test)]
    pub(crate) fn get(&self, start: Node, end: Node) -> Option<&T> {
        self.rows[start as usize].get()?[end as usize].get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_cache_computes_once() {
        let cache = PairCache::new(3);
        let mut calls = 0;

        assert!(cache.get(0, 2).is_none());
        assert_eq!(
            *cache.get_or_init(0, 2, || {
                calls += 1;
                7
            }),
            7
        );
        assert_eq!(*cache.get_or_init(0, 2, || 8), 7);
        assert_eq!(cache.get(0, 2), Some(&7));
        assert!(cache.get(0, 1).is_none());
        assert!(cache.get(1, 2).is_none());
        assert_eq!(calls, 1);
    }
}
