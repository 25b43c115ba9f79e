use std::ops::Range;

use itertools::Itertools;

use crate::{error::Result, prelude::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to the weighted out-neighborhoods of a directed graph.
///
/// This is also the surface an external visualizer renders from: `number_of_nodes`,
/// the per-vertex adjacency with weights and the vertex names of [`Labelled`].
pub trait WeightedAdjacencyList<W: Weight>: GraphNodeOrder {
    /// Returns the outgoing edges `(target, weight)` of `u` in ascending target order.
    /// ** Panics if `u >= n` **
    fn out_edges_of(&self, u: Node) -> &[(Node, W)];

    /// Returns the weight of the edge `(u, v)` or zero if there is no such edge.
    /// ** Panics if `u >= n || v >= n` **
    fn weight(&self, u: Node, v: Node) -> W;

    /// Returns the number of nodes `v` with edges `(v, u)`.
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the targets of all outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_edges_of(u).iter().map(|&(v, _)| v)
    }

    /// Returns the number of outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_edges_of(u).len() as NumNodes
    }

    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight(u, v).is_edge()
    }

    /// Returns the outgoing edges of `u` sorted by ascending weight.
    /// Edges of equal weight keep their target order.
    /// ** Panics if `u >= n` **
    fn ordered_out_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> {
        self.out_edges_of(u)
            .iter()
            .copied()
            .sorted_by(|a, b| a.1.weight_cmp(&b.1))
    }

    /// Returns an iterator over all edges with their weights in row-major order
    fn edges(&self) -> impl Iterator<Item = (Edge, W)> + '_ {
        self.vertices().flat_map(move |u| {
            self.out_edges_of(u)
                .iter()
                .map(move |&(v, w)| (Edge(u, v), w))
        })
    }

    /// Returns *true* if every edge has weight exactly one
    fn is_unit_weighted(&self) -> bool {
        self.edges().all(|(_, w)| w.is_unit())
    }
}

/// Access to the vertex names of a graph
pub trait Labelled: GraphNodeOrder {
    /// Returns all names in index order
    fn names(&self) -> &[String];

    /// Returns the name of a given vertex.
    /// ** Panics if `u >= n` **
    fn name_of(&self, u: Node) -> &str {
        &self.names()[u as usize]
    }

    /// Returns the index of the vertex with the given name
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownName`](crate::error::GraphError::UnknownName) if no vertex
    /// carries that name.
    fn index_of(&self, name: &str) -> Result<Node>;
}
