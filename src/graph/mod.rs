/*!
# Weighted Directed Graphs

[`Graph<W>`] is an immutable directed graph whose edges carry weights of type `W`.
It is stored twice: as a dense `n x n` weight matrix (`matrix[u][v] > 0` iff the edge `(u, v)`
exists) and as adjacency lists derived once from that matrix. Every vertex carries a unique
name; the name is the external identity of a vertex while its index is only positional.

Graphs are built either from a matrix ([`Graph::from_matrix`]) or from a list of named edges
([`Graph::from_edge_list`]). Invalid input is rejected during construction; a constructed graph
is never modified. Algorithms that derive new structures (trees, paths, cycles) always return
new graphs.

## Example
```
use lwgraphs::prelude::*;

let graph = Graph::<i32>::from_matrix(
    [[0, 1, 1], [0, 0, 1], [0, 0, 0]],
    MatrixOptions::new().names(["a", "b", "c"]),
)
.unwrap();

assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.number_of_edges(), 3);
assert_eq!(graph.out_degree_of(graph.index_of("a").unwrap()), 2);
assert_eq!(graph.out_edges_of(1), &[(2, 1)]);
```
*/

mod builder;
mod derive;
mod digest;
mod subgraph;

use std::{
    fmt::{Debug, Display},
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::{
    advisory::Advisory,
    error::{GraphError, Result},
    prelude::*,
    weight::WeightKind,
};

pub use builder::{EdgeListOptions, MatrixOptions};
pub use digest::GraphDigest;

/// An immutable directed graph with weighted edges and named vertices.
///
/// Equality is structural: two graphs are equal iff they have the same names in the same order
/// and the same weight matrix.
pub struct Graph<W: Weight> {
    matrix: Box<[W]>,
    adjacency: Box<[Box<[(Node, W)]>]>,
    names: Box<[String]>,
    name_to_index: FxHashMap<String, Node>,
    num_edges: NumEdges,
    advisories: Vec<Advisory>,
    digest: OnceLock<String>,
    known_supergraphs: Mutex<FxHashSet<String>>,
}

impl<W: Weight> Graph<W> {
    /// Assembles a graph from already validated parts.
    /// `matrix` is row-major and must have `names.len()^2` entries.
    pub(crate) fn from_parts(names: Vec<String>, matrix: Vec<W>, advisories: Vec<Advisory>) -> Self {
        let n = names.len();
        debug_assert_eq!(matrix.len(), n * n);

        let adjacency: Box<[Box<[(Node, W)]>]> = (0..n)
            .map(|u| {
                matrix[u * n..(u + 1) * n]
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| w.is_edge())
                    .map(|(v, &w)| (v as Node, w))
                    .collect()
            })
            .collect();

        let num_edges = adjacency.iter().map(|nbs| nbs.len() as NumEdges).sum();
        let name_to_index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as Node))
            .collect();

        Self {
            matrix: matrix.into_boxed_slice(),
            adjacency,
            names: names.into_boxed_slice(),
            name_to_index,
            num_edges,
            advisories,
            digest: OnceLock::new(),
            known_supergraphs: Mutex::new(FxHashSet::default()),
        }
    }

    /// Returns the graph without vertices.
    /// It is the result of every path query that has no path to report.
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new())
    }

    /// Returns the numeric domain of the edge weights
    pub fn weight_kind(&self) -> WeightKind {
        W::KIND
    }

    /// Returns row `u` of the weight matrix.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[W] {
        let n = self.len();
        let u = u as usize;
        assert!(u < n, "vertex {u} out of range for graph with {n} vertices");
        &self.matrix[u * n..(u + 1) * n]
    }

    /// Returns a copy of the full weight matrix
    pub fn matrix(&self) -> Vec<Vec<W>> {
        self.vertices().map(|u| self.row(u).to_vec()).collect()
    }

    /// Returns the adjacency lists of all vertices in index order.
    /// Each list holds `(target, weight)` pairs in ascending target order.
    pub fn adjacency_list(&self) -> &[Box<[(Node, W)]>] {
        &self.adjacency
    }

    /// Returns the advisories raised while constructing this graph
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub(crate) fn known_supergraphs(&self) -> MutexGuard<'_, FxHashSet<String>> {
        self.known_supergraphs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Weight> GraphNodeOrder for Graph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.names.len() as NumNodes
    }
}

impl<W: Weight> GraphEdgeOrder for Graph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W: Weight> WeightedAdjacencyList<W> for Graph<W> {
    fn out_edges_of(&self, u: Node) -> &[(Node, W)] {
        &self.adjacency[u as usize]
    }

    fn weight(&self, u: Node, v: Node) -> W {
        self.row(u)[v as usize]
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        assert!(u < self.number_of_nodes());
        self.vertices()
            .filter(|&v| self.weight(v, u).is_edge())
            .count() as NumNodes
    }
}

impl<W: Weight> Labelled for Graph<W> {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn index_of(&self, name: &str) -> Result<Node> {
        self.name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownName(name.to_string()))
    }
}

impl<W: Weight> PartialEq for Graph<W> {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.matrix == other.matrix
    }
}

impl<W: Weight> Clone for Graph<W> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix.clone(),
            adjacency: self.adjacency.clone(),
            names: self.names.clone(),
            name_to_index: self.name_to_index.clone(),
            num_edges: self.num_edges,
            advisories: self.advisories.clone(),
            digest: self.digest.clone(),
            known_supergraphs: Mutex::new(self.known_supergraphs().clone()),
        }
    }
}

impl<W: Weight> Debug for Graph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("names", &self.names)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

/// Prints one line per vertex: its name followed by its weight-matrix row
impl<W: Weight> Display for Graph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for u in self.vertices() {
            writeln!(f, "{}: [{}]", self.name_of(u), self.row(u).iter().join(", "))?;
        }
        Ok(())
    }
}
