/*!
Single-source shortest paths by total edge weight.
*/

use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use super::*;

/// Result of one run of Dijkstra's algorithm from a start vertex
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<W: Weight> {
    start: Node,
    distances: Vec<Option<W>>,
    parents: Vec<Option<OptionalNode>>,
    tree: Graph<W>,
}

impl<W: Weight> ShortestPathTree<W> {
    /// Runs Dijkstra's algorithm from `start`.
    ///
    /// The open set is scanned in index order, so among vertices of equal tentative distance the
    /// one with the smallest index is settled first. A distance is only updated on strict
    /// improvement.
    ///
    /// Integer distances saturate at the maximum of `W`: a vertex whose every path is longer
    /// stays reachable with that maximum as its distance.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &Graph<W>, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "start vertex {start} out of range"
        );

        let n = graph.len();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut parents = vec![None; n];
        let mut open = vec![true; n];
        distances[start as usize] = Some(W::zero());

        loop {
            let next = (0..n)
                .filter(|&u| open[u])
                .filter_map(|u| distances[u].map(|d| (u, d)))
                .reduce(|best, cur| if cur.1 < best.1 { cur } else { best });

            // every remaining open vertex is unreachable
            let Some((u, dist_u)) = next else {
                break;
            };
            open[u] = false;
            trace!(vertex = u, "settled");

            for &(v, w) in graph.out_edges_of(u as Node) {
                let alt = dist_u.saturating_sum(w);
                if distances[v as usize].is_none_or(|d| alt < d) {
                    distances[v as usize] = Some(alt);
                    parents[v as usize] = OptionalNode::new(u as Node);
                }
            }
        }

        let tree = graph.spanning_tree(
            start,
            parents
                .iter()
                .enumerate()
                .filter_map(|(v, &p)| unpack(p).map(|u| Edge(u, v as Node))),
        );

        Self {
            start,
            distances,
            parents,
            tree,
        }
    }

    /// The start vertex of the run
    pub fn start(&self) -> Node {
        self.start
    }

    /// Length of a shortest path to every vertex; `None` if unreachable
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Length of a shortest path to `u`; `None` if unreachable
    pub fn distance_of(&self, u: Node) -> Option<W> {
        self.distances[u as usize]
    }

    /// Parent of `u` on its shortest path; `None` for the start and for unreachable vertices
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        unpack(self.parents[u as usize])
    }

    /// Parents of all vertices
    pub fn parents(&self) -> Vec<Option<Node>> {
        self.parents.iter().map(|&p| unpack(p)).collect()
    }

    /// Graph of all parent edges.
    /// If `start` reaches no other vertex, this is the single vertex `start`.
    pub fn tree(&self) -> &Graph<W> {
        &self.tree
    }

    /// Returns the path `start -> .. -> end` as a list of edges,
    /// or `None` if `end` cannot be reached.
    pub fn path_to(&self, end: Node) -> Option<Vec<Edge>> {
        self.distance_of(end)?;

        let mut edges = Vec::new();
        let mut v = end;
        while let Some(u) = self.parent_of(v) {
            edges.push(Edge(u, v));
            v = u;
        }
        edges.reverse();
        Some(edges)
    }
}

/// Memoized shortest-path engine over a shared graph.
///
/// Runs are cached per start vertex, extracted paths per `(start, end)` pair.
///
/// # Example
/// ```
/// use lwgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::<f64>::from_edge_list(
///     [("s", "a", 1.0), ("a", "t", 1.0), ("s", "t", 3.0)],
///     EdgeListOptions::new().names(["s", "a", "t"]),
/// )
/// .unwrap();
/// let dijkstra = Dijkstra::new(graph);
///
/// assert_eq!(dijkstra.distances(0), &[Some(0.0), Some(1.0), Some(2.0)]);
/// assert_eq!(dijkstra.shortest_path(0, 2).number_of_edges(), 2);
/// ```
pub struct Dijkstra<W: Weight> {
    graph: Arc<Graph<W>>,
    runs: Box<[OnceLock<ShortestPathTree<W>>]>,
    paths: PairCache<Graph<W>>,
    advisory: Option<Advisory>,
}

impl<W: Weight> Dijkstra<W> {
    /// Creates an engine for `graph`; nothing is computed yet
    pub fn new(graph: impl Into<Arc<Graph<W>>>) -> Self {
        let graph = graph.into();
        let n = graph.len();
        let advisory = graph.is_unit_weighted().then_some(Advisory::UnitWeights);

        Self {
            graph,
            runs: per_start(n),
            paths: PairCache::new(n),
            advisory,
        }
    }

    /// The graph this engine operates on
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Returns the shared handle of the graph
    pub fn shared_graph(&self) -> &Arc<Graph<W>> {
        &self.graph
    }

    /// Returns [`Advisory::UnitWeights`] if every weight is `0` or `1`.
    /// It is logged whenever a run is computed.
    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory
    }

    /// Complete result of the run from `start`.
    /// ** Panics if `start >= n` **
    pub fn run(&self, start: Node) -> &ShortestPathTree<W> {
        self.runs[start as usize].get_or_init(|| {
            if let Some(advisory) = self.advisory {
                advisory.emit();
            }
            debug!(start, "computing shortest paths");
            ShortestPathTree::new(&self.graph, start)
        })
    }

    /// Graph of all shortest paths from `start`
    /// ** Panics if `start >= n` **
    pub fn shortest_paths(&self, start: Node) -> &Graph<W> {
        self.run(start).tree()
    }

    /// Shortest distances from `start`
    /// ** Panics if `start >= n` **
    pub fn distances(&self, start: Node) -> &[Option<W>] {
        self.run(start).distances()
    }

    /// Parents on shortest paths from `start`
    /// ** Panics if `start >= n` **
    pub fn parents(&self, start: Node) -> Vec<Option<Node>> {
        self.run(start).parents()
    }
}

impl<W: Weight> ShortestPath<W> for Dijkstra<W> {
    fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Path of least total weight along the shortest-path tree of `start`
    fn shortest_path(&self, start: Node, end: Node) -> &Graph<W> {
        assert!(end < self.graph.number_of_nodes());
        self.paths.get_or_init(start, end, || {
            if start == end {
                return Graph::empty();
            }

            match self.run(start).path_to(end) {
                Some(edges) => self.graph.edge_induced(edges),
                None => Graph::empty(),
            }
        })
    }
}
