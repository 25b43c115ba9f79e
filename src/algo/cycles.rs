/*!
Representative minimal cycles, one per back edge of a depth-first search.

For every back edge `(v, w)` of the depth-first search rooted at a fixed vertex, a shortest path
`w -> .. -> v` is closed into a cycle by the back edge itself. The path engine decides what
*shortest* means: [`Exploration`] yields cycles with the fewest edges, [`Dijkstra`] cycles of
least total weight.

The result depends on the root and on the traversal order; it is a set of representative cycles,
**not** an enumeration of all cycles of the graph. In particular, a graph is reported as acyclic
iff the depth-first search has no back edges, which holds iff the graph has no cycle at all.
*/

use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::*;
use crate::error::GraphError;

/// Options for [`Cycles`].
///
/// - `root`: the start vertex of the depth-first search whose back edges define the cycles.
///   Default: `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleOptions {
    pub root: Node,
}

impl CycleOptions {
    /// Creates options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the depth-first search
    pub fn root(mut self, root: Node) -> Self {
        self.root = root;
        self
    }
}

/// Cycle extractor combining an [`Exploration`] engine with a [`ShortestPath`] engine.
///
/// Both engines are shared handles; the extractor only reads their (memoized) results.
///
/// # Example
/// ```
/// use lwgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::<i32>::from_matrix(
///     [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
///     MatrixOptions::new().names(["a", "b", "c"]),
/// )
/// .unwrap();
/// let cycles = Cycles::new(graph);
///
/// assert!(!cycles.is_acyclic());
/// assert_eq!(cycles.cycle_count(), 1);
///
/// let cycle = &cycles.cycles()[0];
/// assert_eq!(cycle.names(), &["a", "b", "c"]);
/// assert_eq!(cycle.out_edges_of(2), &[(0, 1)]);
/// ```
pub struct Cycles<W: Weight, P: ShortestPath<W> = Exploration<W>> {
    exploration: Arc<Exploration<W>>,
    paths: Arc<P>,
    root: Node,
    cycles: OnceLock<Vec<Graph<W>>>,
}

impl<W: Weight> Cycles<W> {
    /// Creates an extractor closing cycles along paths with the fewest edges,
    /// using a new exploration engine and the default options.
    pub fn new(graph: impl Into<Arc<Graph<W>>>) -> Self {
        Self::with_exploration(Arc::new(Exploration::new(graph)), CycleOptions::default())
    }

    /// Creates an extractor closing cycles along paths with the fewest edges,
    /// reusing the results of an existing exploration engine.
    /// ** Panics if `options.root >= n` for a non-empty graph **
    pub fn with_exploration(exploration: Arc<Exploration<W>>, options: CycleOptions) -> Self {
        let paths = Arc::clone(&exploration);
        Self::assemble(exploration, paths, options)
    }
}

impl<W: Weight, P: ShortestPath<W>> Cycles<W, P> {
    /// Creates an extractor from two externally constructed engines.
    ///
    /// # Errors
    /// Fails with [`GraphError::EngineMismatch`] if the engines do not operate on equal graphs.
    ///
    /// ** Panics if `options.root >= n` for a non-empty graph **
    pub fn with_engines(
        exploration: Arc<Exploration<W>>,
        paths: Arc<P>,
        options: CycleOptions,
    ) -> Result<Self> {
        let (explored, pathed) = (exploration.graph(), paths.graph());
        if !(std::ptr::eq(explored, pathed) || explored == pathed) {
            return Err(GraphError::EngineMismatch);
        }

        Ok(Self::assemble(exploration, paths, options))
    }

    fn assemble(exploration: Arc<Exploration<W>>, paths: Arc<P>, options: CycleOptions) -> Self {
        let graph = exploration.graph();
        assert!(
            graph.is_empty() || options.root < graph.number_of_nodes(),
            "root {} out of range",
            options.root
        );

        Self {
            exploration,
            paths,
            root: options.root,
            cycles: OnceLock::new(),
        }
    }

    /// The graph whose cycles are extracted
    pub fn graph(&self) -> &Graph<W> {
        self.exploration.graph()
    }

    /// The root of the depth-first search
    pub fn root(&self) -> Node {
        self.root
    }

    /// Back edges of the depth-first search from the root; one cycle per back edge
    pub fn back_edges(&self) -> &[Edge] {
        if self.graph().is_empty() {
            return &[];
        }
        self.exploration.dfs(self.root).back_edges()
    }

    /// One cycle per back edge, in the order the back edges were found.
    ///
    /// Each cycle is a graph over the vertices of the closing path, named and ordered as in the
    /// original graph, and carries the original weights.
    pub fn cycles(&self) -> &[Graph<W>] {
        self.cycles.get_or_init(|| {
            debug!(root = self.root, "extracting cycles");
            self.back_edges()
                .iter()
                .map(|&Edge(v, w)| self.close(v, w))
                .collect()
        })
    }

    /// Number of cycles found, ie. the number of back edges
    pub fn cycle_count(&self) -> usize {
        self.back_edges().len()
    }

    /// Returns *true* if the graph has no cycle
    pub fn is_acyclic(&self) -> bool {
        self.cycle_count() == 0
    }

    /// Closes the path `w -> .. -> v` with the back edge `(v, w)`
    fn close(&self, v: Node, w: Node) -> Graph<W> {
        let graph = self.graph();
        let path = self.paths.shortest_path(w, v);

        // indices within the path differ from those in the graph
        let (Ok(path_v), Ok(path_w)) = (
            path.index_of(graph.name_of(v)),
            path.index_of(graph.name_of(w)),
        ) else {
            unreachable!("the target of a back edge reaches its source");
        };

        path.with_edge(path_v, path_w, graph.weight(v, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn triangle() -> Graph<i32> {
        Graph::from_matrix(
            [[0, 1, 1], [0, 0, 1], [0, 0, 0]],
            MatrixOptions::new().names(["a", "b", "c"]),
        )
        .unwrap()
    }

    #[test]
    fn acyclic_triangle() {
        let graph = triangle();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.out_degree_of(0), 2);

        let cycles = Cycles::new(graph);
        assert!(cycles.is_acyclic());
        assert!(cycles.cycles().is_empty());
    }

    #[test]
    fn closing_edge_creates_one_cycle() {
        let graph = triangle().with_edge(2, 0, 1);
        let cycles = Cycles::new(graph);

        assert!(!cycles.is_acyclic());
        assert_eq!(cycles.cycle_count(), 1);

        // the back edge c -> a is closed along the shortest path a -> c
        let cycle = &cycles.cycles()[0];
        assert_is_cycle(cycle);
        assert_eq!(cycle.names(), &["a", "c"]);
        assert_eq!(
            cycle.adjacency_list(),
            &[vec![(1, 1)].into_boxed_slice(), vec![(0, 1)].into_boxed_slice()]
        );
    }

    #[test]
    fn cycle_through_all_vertices() {
        let graph = Graph::<i32>::from_matrix(
            [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            MatrixOptions::new().names(["a", "b", "c"]),
        )
        .unwrap();
        let cycles = Cycles::new(graph);

        assert_eq!(cycles.cycle_count(), 1);
        let cycle = &cycles.cycles()[0];
        assert_is_cycle(cycle);
        assert_eq!(cycle, cycles.graph());
    }

    #[test]
    fn cycle_graph_a() {
        let cycles = Cycles::new(graph_a());

        assert_eq!(cycles.back_edges(), &[Edge(6, 1)]);
        let cycle = &cycles.cycles()[0];
        assert_is_cycle(cycle);
        assert_eq!(cycle.names(), &["b", "d", "g"]);
        assert!(cycle.is_subgraph_of(cycles.graph()));
    }

    #[test]
    fn cycles_graph_b() {
        let explo = Arc::new(Exploration::new(graph_b()));
        let dijkstra = Arc::new(Dijkstra::new(Arc::clone(explo.shared_graph())));

        let small = Cycles::with_exploration(Arc::clone(&explo), CycleOptions::default());
        let light =
            Cycles::with_engines(Arc::clone(&explo), dijkstra, CycleOptions::default()).unwrap();

        assert_eq!(small.cycle_count(), explo.dfs(0).back_edges().len());
        assert_eq!(small.cycle_count(), 6);
        assert_eq!(light.cycle_count(), 6);

        for cycle in small.cycles().iter().chain(light.cycles()) {
            assert_is_cycle(cycle);
            assert!(cycle.is_subgraph_of(explo.graph()));
        }

        // both variants start from the same back edges, the light ones never weigh more
        for (s, l) in small.cycles().iter().zip(light.cycles()) {
            let weight = |g: &Graph<f64>| g.edges().map(|(_, w)| w).sum::<f64>();
            assert!(weight(l) <= weight(s) + 1e-9);
        }
    }

    #[test]
    fn root_matters() {
        let graph = graph_c().with_edge(3, 0, 1);

        let from_zero = Cycles::new(graph.clone());
        let from_three = Cycles::with_exploration(
            Arc::new(Exploration::new(graph)),
            CycleOptions::new().root(3),
        );

        assert_eq!(from_zero.cycle_count(), 1);
        assert_eq!(from_three.cycle_count(), 1);
        assert_eq!(from_zero.cycles()[0].names(), &["A", "C", "D"]);
        assert_eq!(from_zero.cycles()[0], from_three.cycles()[0]);
        assert_eq!(from_zero.back_edges(), &[Edge(3, 0)]);
        assert_eq!(from_three.back_edges(), &[Edge(2, 3)]);
    }

    #[test]
    fn engines_must_share_graph() {
        let explo = Arc::new(Exploration::new(graph_a()));
        let other = Arc::new(Dijkstra::new(graph_a().with_edge(2, 0, 1)));
        let equal = Arc::new(Dijkstra::new(graph_a()));

        assert!(matches!(
            Cycles::with_engines(Arc::clone(&explo), other, CycleOptions::default()),
            Err(GraphError::EngineMismatch)
        ));
        assert!(Cycles::with_engines(explo, equal, CycleOptions::default()).is_ok());
    }

    #[test]
    fn empty_graph_has_no_cycles() {
        let cycles = Cycles::new(Graph::<i32>::empty());
        assert!(cycles.is_acyclic());
        assert!(cycles.cycles().is_empty());
    }

    #[test]
    fn random_cycles_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(33);

        for n in [4, 9, 16] {
            for density in [0.1, 0.25, 0.5] {
                let graph = Arc::new(Graph::<f64>::random_weighted(rng, n, density));
                let explo = Arc::new(Exploration::new(Arc::clone(&graph)));
                let dijkstra = Arc::new(Dijkstra::new(graph));

                let small = Cycles::with_exploration(Arc::clone(&explo), CycleOptions::default());
                let light =
                    Cycles::with_engines(Arc::clone(&explo), dijkstra, CycleOptions::default())
                        .unwrap();

                assert_eq!(small.cycles().len(), small.cycle_count());
                assert_eq!(light.cycles().len(), light.cycle_count());
                for cycle in small.cycles().iter().chain(light.cycles()) {
                    assert_is_cycle(cycle);
                    assert!(cycle.is_subgraph_of(explo.graph()));
                }
            }
        }
    }
}
