/*!
Breadth-first search with hop distances and parent pointers.
*/

use std::collections::VecDeque;

use super::*;

/// A vertex visited by a breadth-first search together with its parent in the search tree
/// and its hop distance from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsVisit {
    pub node: Node,
    pub parent: Option<Node>,
    pub distance: NumNodes,
}

/// Lazy breadth-first search from a single start vertex.
///
/// Vertices are yielded layer by layer; within a layer in the order they were discovered.
/// Out-neighbors are discovered in ascending index order.
///
/// # Example
/// ```
/// use lwgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::<i32>::from_matrix(
///     [[0, 1, 0], [0, 0, 1], [0, 0, 0]],
///     MatrixOptions::new(),
/// )
/// .unwrap();
///
/// let order: Vec<_> = BfsSearch::new(&graph, 0).map(|v| (v.node, v.distance)).collect();
/// assert_eq!(order, vec![(0, 0), (1, 1), (2, 2)]);
/// ```
pub struct BfsSearch<'a, W: Weight> {
    graph: &'a Graph<W>,
    queue: VecDeque<BfsVisit>,
    visited: Vec<bool>,
}

impl<'a, W: Weight> BfsSearch<'a, W> {
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a Graph<W>, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "start vertex {start} out of range"
        );

        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;

        Self {
            graph,
            queue: VecDeque::from(vec![BfsVisit {
                node: start,
                parent: None,
                distance: 0,
            }]),
            visited,
        }
    }
}

impl<W: Weight> Iterator for BfsSearch<'_, W> {
    type Item = BfsVisit;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;

        for v in self.graph.out_neighbors_of(popped.node) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.queue.push_back(BfsVisit {
                    node: v,
                    parent: Some(popped.node),
                    distance: popped.distance + 1,
                });
            }
        }

        Some(popped)
    }
}

/// Hop distances and parents of a complete breadth-first search.
///
/// Vertices that cannot be reached from the start have neither a distance nor a parent;
/// the result is then a forest rather than a spanning tree of the whole graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsLevels {
    start: Node,
    distances: Vec<Option<NumNodes>>,
    parents: Vec<Option<OptionalNode>>,
}

impl BfsLevels {
    /// Runs a full breadth-first search from `start`.
    /// Logs [`Advisory::Unreachable`] if not every vertex was reached.
    /// ** Panics if `start >= n` **
    pub fn new<W: Weight>(graph: &Graph<W>, start: Node) -> Self {
        let mut distances = vec![None; graph.len()];
        let mut parents = vec![None; graph.len()];

        for visit in BfsSearch::new(graph, start) {
            distances[visit.node as usize] = Some(visit.distance);
            parents[visit.node as usize] = pack(visit.parent);
        }

        let levels = Self {
            start,
            distances,
            parents,
        };
        if let Some(advisory) = levels.advisory() {
            advisory.emit();
        }
        levels
    }

    /// The start vertex of the search
    pub fn start(&self) -> Node {
        self.start
    }

    /// Hop distance of every vertex from the start; `None` if unreachable
    pub fn distances(&self) -> &[Option<NumNodes>] {
        &self.distances
    }

    /// Hop distance of `u` from the start; `None` if unreachable
    pub fn distance_of(&self, u: Node) -> Option<NumNodes> {
        self.distances[u as usize]
    }

    /// Parent of `u` in the search tree; `None` for the start and for unreachable vertices
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        unpack(self.parents[u as usize])
    }

    /// Parents of all vertices
    pub fn parents(&self) -> Vec<Option<Node>> {
        self.parents.iter().map(|&p| unpack(p)).collect()
    }

    /// Edges `(parent(u), u)` of the search tree in ascending order of `u`
    pub fn tree_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(u, &p)| unpack(p).map(|p| Edge(p, u as Node)))
    }

    /// Number of vertices that cannot be reached from the start
    pub fn number_of_unreachable(&self) -> NumNodes {
        self.distances.iter().filter(|d| d.is_none()).count() as NumNodes
    }

    /// Returns [`Advisory::Unreachable`] if the search did not reach every vertex
    pub fn advisory(&self) -> Option<Advisory> {
        let unreachable = self.number_of_unreachable();
        (unreachable > 0).then_some(Advisory::Unreachable {
            start: self.start,
            unreachable,
        })
    }

    /// Returns the path `start -> .. -> end` as a list of tree edges,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn levels_graph_a() {
        let bfs = BfsLevels::new(&graph_a(), 0);

        assert_eq!(
            bfs.distances(),
            &[Some(0), Some(1), Some(1), Some(2), Some(3), Some(3), Some(3)]
        );
        assert_eq!(
            bfs.parents(),
            vec![None, Some(0), Some(0), Some(1), Some(3), Some(3), Some(3)]
        );
        assert!(bfs.advisory().is_none());
    }

    #[test]
    fn levels_graph_b() {
        let bfs = BfsLevels::new(&graph_b(), 1);

        assert_eq!(bfs.distances(), &[Some(1), Some(0), Some(1), Some(1)]);
        assert_eq!(bfs.parents(), vec![Some(1), None, Some(1), Some(1)]);
    }

    #[test]
    fn levels_with_unreachable() {
        init_logging();
        let bfs = BfsLevels::new(&graph_c(), 2);

        assert_eq!(
            bfs.distances(),
            &[None, Some(1), Some(0), Some(1), None, None, None]
        );
        assert_eq!(
            bfs.parents(),
            vec![None, Some(2), None, Some(2), None, None, None]
        );
        assert_eq!(
            bfs.advisory(),
            Some(Advisory::Unreachable {
                start: 2,
                unreachable: 4
            })
        );
    }

    #[test]
    fn paths() {
        let bfs = BfsLevels::new(&graph_a(), 0);

        assert_eq!(bfs.path_to(0), Some(vec![]));
        assert_eq!(bfs.path_to(6), Some(vec![Edge(0, 1), Edge(1, 3), Edge(3, 6)]));

        let bfs = BfsLevels::new(&graph_c(), 2);
        assert_eq!(bfs.path_to(6), None);
    }

    #[test]
    fn search_is_layered() {
        let graph = graph_b();
        let visits: Vec<_> = BfsSearch::new(&graph, 2).collect();

        assert_eq!(visits.len(), 4);
        assert!(visits.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(visits[0].parent, None);
    }
}
