/*!
Depth-first search with discovery/finish numbering and edge classification.

[`DfsEvents`] is a lazy iterator over the events of a depth-first search **forest**: the search
starts at a given vertex and afterwards restarts at every still undiscovered vertex in index
order. Out-edges of a vertex are explored in ascending weight order; edges of equal weight in
ascending target order. This makes the numbering reproducible for a given graph.

[`DfsNumbering`] collects the events of a complete search.
*/

use super::*;

/// An event of a depth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// The vertex receives its discovery number (either as a new root or after a tree edge)
    Discover(Node),
    /// The edge leads to an undiscovered vertex; a `Discover` of its target follows
    TreeEdge(Edge),
    /// The edge leads to an already discovered vertex.
    /// `back` is set iff the target is an ancestor that is still open.
    NonTreeEdge { edge: Edge, back: bool },
    /// All out-edges of the vertex are explored and it receives its finish number
    Finish(Node),
}

struct Frame {
    vertex: Node,
    targets: Vec<Node>,
    pos: usize,
}

/// Lazy depth-first search forest over a graph.
///
/// # Example
/// ```
/// use lwgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::<i32>::from_matrix([[0, 1], [1, 0]], MatrixOptions::new()).unwrap();
/// let events: Vec<_> = DfsEvents::new(&graph, 0).collect();
///
/// assert_eq!(events, vec![
///     DfsEvent::Discover(0),
///     DfsEvent::TreeEdge(Edge(0, 1)),
///     DfsEvent::Discover(1),
///     DfsEvent::NonTreeEdge { edge: Edge(1, 0), back: true },
///     DfsEvent::Finish(1),
///     DfsEvent::Finish(0),
/// ]);
/// ```
pub struct DfsEvents<'a, W: Weight> {
    graph: &'a Graph<W>,
    roots: std::vec::IntoIter<Node>,
    stack: Vec<Frame>,
    discovery: Vec<NumNodes>,
    finish: Vec<NumNodes>,
    discovered: NumNodes,
    finished: NumNodes,
    pending: Option<DfsEvent>,
}

impl<'a, W: Weight> DfsEvents<'a, W> {
    /// Creates a search forest whose first tree is rooted at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a Graph<W>, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "start vertex {start} out of range"
        );

        let roots = std::iter::once(start)
            .chain(graph.vertices().filter(|&u| u != start))
            .collect_vec();

        Self {
            graph,
            roots: roots.into_iter(),
            stack: Vec::new(),
            discovery: vec![0; graph.len()],
            finish: vec![0; graph.len()],
            discovered: 0,
            finished: 0,
            pending: None,
        }
    }

    /// Returns the discovery numbers assigned so far (`0` = not yet discovered)
    pub fn discovery(&self) -> &[NumNodes] {
        &self.discovery
    }

    /// Returns the finish numbers assigned so far (`0` = not yet finished)
    pub fn finish(&self) -> &[NumNodes] {
        &self.finish
    }

    fn discover(&mut self, u: Node) -> DfsEvent {
        self.discovered += 1;
        self.discovery[u as usize] = self.discovered;
        self.stack.push(Frame {
            vertex: u,
            targets: self
                .graph
                .ordered_out_edges_of(u)
                .map(|(v, _)| v)
                .collect(),
            pos: 0,
        });
        DfsEvent::Discover(u)
    }
}

impl<W: Weight> Iterator for DfsEvents<'_, W> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let Some(frame) = self.stack.last_mut() else {
            let discovery = &self.discovery;
            let root = self.roots.find(|&u| discovery[u as usize] == 0)?;
            return Some(self.discover(root));
        };

        let v = frame.vertex;
        if let Some(&w) = frame.targets.get(frame.pos) {
            frame.pos += 1;

            if self.discovery[w as usize] == 0 {
                self.pending = Some(self.discover(w));
                return Some(DfsEvent::TreeEdge(Edge(v, w)));
            }

            let back = self.discovery[v as usize] >= self.discovery[w as usize]
                && self.finish[w as usize] == 0;
            return Some(DfsEvent::NonTreeEdge {
                edge: Edge(v, w),
                back,
            });
        }

        self.stack.pop();
        self.finished += 1;
        self.finish[v as usize] = self.finished;
        Some(DfsEvent::Finish(v))
    }
}

/// Discovery/finish numbers and classified edges of a complete depth-first search forest.
///
/// Numbers are 1-based; since the forest covers every vertex, every vertex has both.
/// Discoveries and finishes are counted separately, so each of the two vectors is a permutation
/// of `1..=n` and a discovery number is not comparable to a finish number. Ancestry shows in
/// both orders at once: `u` is a proper ancestor of `v` iff `u` is discovered before and
/// finished after `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsNumbering {
    discovery: Vec<NumNodes>,
    finish: Vec<NumNodes>,
    tree_edges: Vec<Edge>,
    non_tree_edges: Vec<Edge>,
    back_edges: Vec<Edge>,
}

impl DfsNumbering {
    /// Runs a full depth-first search forest starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new<W: Weight>(graph: &Graph<W>, start: Node) -> Self {
        let mut search = DfsEvents::new(graph, start);

        let mut tree_edges = Vec::new();
        let mut non_tree_edges = Vec::new();
        let mut back_edges = Vec::new();

        for event in search.by_ref() {
            match event {
                DfsEvent::TreeEdge(edge) => tree_edges.push(edge),
                DfsEvent::NonTreeEdge { edge, back } => {
                    non_tree_edges.push(edge);
                    if back {
                        back_edges.push(edge);
                    }
                }
                DfsEvent::Discover(_) | DfsEvent::Finish(_) => {}
            }
        }

        Self {
            discovery: search.discovery,
            finish: search.finish,
            tree_edges,
            non_tree_edges,
            back_edges,
        }
    }

    /// Discovery number of every vertex
    pub fn discovery(&self) -> &[NumNodes] {
        &self.discovery
    }

    /// Finish number of every vertex
    pub fn finish(&self) -> &[NumNodes] {
        &self.finish
    }

    /// Edges leading to undiscovered vertices, in the order they were traversed
    pub fn tree_edges(&self) -> &[Edge] {
        &self.tree_edges
    }

    /// All edges that are not tree edges, in the order they were traversed
    pub fn non_tree_edges(&self) -> &[Edge] {
        &self.non_tree_edges
    }

    /// Non-tree edges pointing to an open ancestor, in the order they were traversed
    pub fn back_edges(&self) -> &[Edge] {
        &self.back_edges
    }

    /// Returns *true* if `u` is an ancestor of `v` (or `v` itself) in the search forest
    pub fn is_ancestor(&self, u: Node, v: Node) -> bool {
        let (u, v) = (u as usize, v as usize);
        self.discovery[u] <= self.discovery[v] && self.finish[v] <= self.finish[u]
    }
}
