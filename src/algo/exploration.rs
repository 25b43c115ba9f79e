/*!
Memoized depth-first and breadth-first exploration of a graph.

[`Exploration`] owns one set of compute-once slots per start vertex. Each result is computed on
first request and afterwards returned by reference; concurrent first requests for the same slot
compute it exactly once. [`Exploration::status`] reports how far each traversal family has been
computed for a start vertex.
*/

use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::*;

/// How far one traversal family has been computed for one start vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    /// Nothing computed yet
    #[default]
    NotComputed,
    /// Numbers/distances and parents are available
    RawComputed,
    /// Additionally, the derived tree graph is available
    TreeComputed,
}

/// Computation stages of both traversal families for one start vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExplorationStatus {
    pub dfs: Stage,
    pub bfs: Stage,
}

/// Exploration engine over a shared graph.
///
/// # Example
/// ```
/// use lwgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::<i32>::from_matrix(
///     [[0, 1, 1], [0, 0, 1], [1, 0, 0]],
///     MatrixOptions::new().names(["a", "b", "c"]),
/// )
/// .unwrap();
/// let explo = Exploration::new(graph);
///
/// assert_eq!(explo.dfs(0).discovery(), &[1, 2, 3]);
/// assert_eq!(explo.dfs(0).back_edges(), &[Edge(2, 0)]);
/// assert_eq!(explo.bfs(0).distance_of(2), Some(1));
///
/// let path = explo.shortest_path(1, 0);
/// assert_eq!(path.names(), &["a", "b", "c"]);
/// assert_eq!(path.number_of_edges(), 2);
/// ```
pub struct Exploration<W: Weight> {
    graph: Arc<Graph<W>>,
    dfs: Box<[OnceLock<DfsNumbering>]>,
    dfs_trees: Box<[OnceLock<Graph<W>>]>,
    bfs: Box<[OnceLock<BfsLevels>]>,
    bfs_trees: Box<[OnceLock<Graph<W>>]>,
    paths: PairCache<Graph<W>>,
}

impl<W: Weight> Exploration<W> {
    /// Creates an engine for `graph`; nothing is computed yet
    pub fn new(graph: impl Into<Arc<Graph<W>>>) -> Self {
        let graph = graph.into();
        let n = graph.len();

        Self {
            graph,
            dfs: per_start(n),
            dfs_trees: per_start(n),
            bfs: per_start(n),
            bfs_trees: per_start(n),
            paths: PairCache::new(n),
        }
    }

    /// The graph explored by this engine
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Returns the shared handle of the explored graph
    pub fn shared_graph(&self) -> &Arc<Graph<W>> {
        &self.graph
    }

    /// Depth-first search forest whose first tree is rooted at `start`.
    /// ** Panics if `start >= n` **
    pub fn dfs(&self, start: Node) -> &DfsNumbering {
        self.dfs[start as usize].get_or_init(|| {
            debug!(start, "computing depth-first numbering");
            DfsNumbering::new(&self.graph, start)
        })
    }

    /// Graph of the tree edges of the whole forest of [`Exploration::dfs`].
    /// Only if the forest has no tree edges at all, this is the single vertex `start`.
    /// ** Panics if `start >= n` **
    pub fn dfs_tree(&self, start: Node) -> &Graph<W> {
        self.dfs_trees[start as usize].get_or_init(|| {
            debug!(start, "deriving depth-first tree");
            self.graph
                .spanning_tree(start, self.dfs(start).tree_edges().iter().copied())
        })
    }

    /// Breadth-first search from `start`.
    /// ** Panics if `start >= n` **
    pub fn bfs(&self, start: Node) -> &BfsLevels {
        self.bfs[start as usize].get_or_init(|| {
            debug!(start, "computing breadth-first levels");
            BfsLevels::new(&self.graph, start)
        })
    }

    /// Graph of the parent edges of [`Exploration::bfs`].
    /// If `start` reaches no other vertex, this is the single vertex `start`.
    /// ** Panics if `start >= n` **
    pub fn bfs_tree(&self, start: Node) -> &Graph<W> {
        self.bfs_trees[start as usize].get_or_init(|| {
            debug!(start, "deriving breadth-first tree");
            self.graph.spanning_tree(start, self.bfs(start).tree_edges())
        })
    }

    /// Which results are available for `start`.
    /// ** Panics if `start >= n` **
    pub fn status(&self, start: Node) -> ExplorationStatus {
        let stage = |raw: bool, tree: bool| match (raw, tree) {
            (_, true) => Stage::TreeComputed,
            (true, false) => Stage::RawComputed,
            (false, false) => Stage::NotComputed,
        };

        let u = start as usize;
        ExplorationStatus {
            dfs: stage(self.dfs[u].get().is_some(), self.dfs_trees[u].get().is_some()),
            bfs: stage(self.bfs[u].get().is_some(), self.bfs_trees[u].get().is_some()),
        }
    }
}

impl<W: Weight> ShortestPath<W> for Exploration<W> {
    fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Path with the fewest edges along the breadth-first tree of `start`
    fn shortest_path(&self, start: Node, end: Node) -> &Graph<W> {
        assert!(end < self.graph.number_of_nodes());
        self.paths.get_or_init(start, end, || {
            if start == end {
                return Graph::empty();
            }

            match self.bfs(start).path_to(end) {
                Some(edges) => self.graph.edge_induced(edges),
                None => Graph::empty(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::thread;

    #[test]
    fn dfs_tree_graph_b() {
        let explo = Exploration::new(graph_b());
        let tree = explo.dfs_tree(1);

        assert_eq!(tree.names(), &["0", "1", "2", "3"]);
        assert_eq!(
            tree.matrix(),
            vec![
                vec![0.0, 0.0, 0.5, 0.0],
                vec![0.0, 0.0, 0.0, 1.5],
                vec![0.0, 0.0, 0.0, 0.0],
                vec![1.5, 0.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn dfs_tree_restricts_names() {
        let explo = Exploration::new(graph_c());
        let tree = explo.dfs_tree(2);

        assert_eq!(tree.names(), &["B", "C", "D", "F", "G"]);
        assert_eq!(
            tree.matrix(),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![10, 0, 2, 0, 0],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 5],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn trees_of_isolated_vertex() {
        let explo = Exploration::new(graph_c());

        // the search restarts at A and F, so the forest still has tree edges
        let tree = explo.dfs_tree(4);
        assert_eq!(tree.names(), &["A", "B", "C", "D", "F", "G"]);
        assert_eq!(tree.number_of_edges(), 4);
        assert_eq!(tree.weight(2, 1), 10);
        assert_eq!(tree.weight(5, 4), 0);
        assert_eq!(tree.weight(4, 5), 5);

        let tree = explo.bfs_tree(4);
        assert_eq!(tree.names(), &["E"]);
        assert_eq!(tree.matrix(), vec![vec![0]]);
    }

    #[test]
    fn dfs_tree_without_tree_edges() {
        let graph = Graph::<i32>::from_matrix(
            [[0, 0], [0, 0]],
            MatrixOptions::new().names(["x", "y"]),
        )
        .unwrap();
        let explo = Exploration::new(graph);

        assert_eq!(explo.dfs_tree(1).names(), &["y"]);
        assert_eq!(explo.dfs_tree(1).matrix(), vec![vec![0]]);
    }

    #[test]
    fn bfs_trees() {
        let explo = Exploration::new(graph_b());
        assert_eq!(
            explo.bfs_tree(1).matrix(),
            vec![
                vec![0.0, 0.0, 0.0, 0.0],
                vec![2.0, 0.0, 2.5, 1.5],
                vec![0.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 0.0],
            ]
        );

        let explo = Exploration::new(graph_c());
        let tree = explo.bfs_tree(2);
        assert_eq!(tree.names(), &["B", "C", "D"]);
        assert_eq!(
            tree.matrix(),
            vec![vec![0, 0, 0], vec![10, 0, 2], vec![0, 0, 0]]
        );
    }

    #[test]
    fn hop_paths() {
        let explo = Exploration::new(graph_a());
        let path = explo.shortest_path(0, 3);
        assert_eq!(path.names(), &["a", "b", "d"]);
        assert_eq!(
            path.matrix(),
            vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]
        );
        assert!(path.is_subgraph_of(explo.graph()));

        let explo = Exploration::new(graph_b());
        let path = explo.shortest_path(2, 3);
        assert_eq!(path.names(), &["2", "3"]);
        assert_eq!(path.matrix(), vec![vec![0.0, 2.25], vec![0.0, 0.0]]);

        let explo = Exploration::new(graph_c());
        assert!(explo.shortest_path(2, 6).is_empty());
        assert!(explo.shortest_path(2, 2).is_empty());
    }

    #[test]
    fn paths_by_name() {
        let explo = Exploration::new(graph_a());
        let path = explo.shortest_path_between("a", "g").unwrap();
        assert_eq!(path.names(), &["a", "b", "d", "g"]);
        assert!(explo.shortest_path_between("a", "z").is_err());
    }

    #[test]
    fn results_are_memoized() {
        let explo = Exploration::new(graph_a());
        assert_eq!(explo.status(0), ExplorationStatus::default());

        let first = explo.dfs(0) as *const DfsNumbering;
        assert_eq!(explo.status(0).dfs, Stage::RawComputed);
        assert_eq!(explo.status(0).bfs, Stage::NotComputed);
        assert!(std::ptr::eq(first, explo.dfs(0)));

        let tree = explo.bfs_tree(0) as *const Graph<i32>;
        assert_eq!(
            explo.status(0),
            ExplorationStatus {
                dfs: Stage::RawComputed,
                bfs: Stage::TreeComputed
            }
        );
        assert!(std::ptr::eq(tree, explo.bfs_tree(0)));

        let path = explo.shortest_path(0, 6) as *const Graph<i32>;
        assert!(std::ptr::eq(path, explo.shortest_path(0, 6)));
        assert_eq!(explo.status(1), ExplorationStatus::default());
    }

    #[test]
    fn concurrent_first_access() {
        let explo = Arc::new(Exploration::new(graph_b()));

        let results: Vec<usize> = thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| {
                    let explo = Arc::clone(&explo);
                    scope.spawn(move || explo.dfs_tree(1) as *const Graph<f64> as usize)
                })
                .collect::<Vec<_>>();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.iter().all(|&p| p == results[0]));
    }
}
