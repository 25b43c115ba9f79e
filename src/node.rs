/*!
# Node Representation

Vertices are addressed positionally as `Node = u32` in the range `0..n`.
The external identity of a vertex is its *name* (see [`Graph::names`](crate::graph::Graph::names));
indices are only meaningful relative to the graph they were taken from.
*/

use std::num::NonZero;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we store `Vec<Option<Node>>` parent arrays per start vertex. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as the `None`-niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}

/// Packs an optional node into its niche-optimized form
pub(crate) fn pack(node: Option<Node>) -> Option<OptionalNode> {
    node.and_then(OptionalNode::new)
}

/// Unpacks a niche-optimized optional node
pub(crate) fn unpack(node: Option<OptionalNode>) -> Option<Node> {
    node.map(|n| n.get())
}
