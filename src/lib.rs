/*!
`lwgraphs` is a library for small **l**abelled, **w**eighted, directed graphs and the classic
traversal-based queries on them.

# Representation

A [`Graph`](crate::graph::Graph) stores its edges twice:
- as a dense `n x n` weight matrix, where an entry of zero encodes the absence of an edge, and
- as an adjacency list per vertex, derived from the matrix and sorted by target.

Vertices are numbered `0` to `n - 1` and represented as `u32`; every vertex additionally carries a
unique name. Names, not indices, are the identity of a vertex across graphs: derived graphs (paths,
trees, cycles) only contain the vertices they need and therefore index them differently, but keep
their names and their relative order.

Graphs are immutable once constructed. They are generic over their weight type, which is either an
integer or a floating point type (see [`weight`]). Weights are non-negative and there are no
self-loops.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, basic graph operations and the graph itself,
- [`algo`] includes the memoizing engines for depth-first/breadth-first exploration, Dijkstra's algorithm and cycle extraction,
- [`gens`] includes a random graph generator for tests and experiments,
- [`io`] includes a reader for graphs given as lists of weighted edges.

Fatal conditions are reported as [`GraphError`](crate::error::GraphError)s; non-fatal conditions
(see [`advisory`]) are logged as `tracing` warnings and never abort an operation.

In most use-cases, `use lwgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod advisory;
pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub(crate) mod testing;
pub mod weight;

/// `lwgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{
        advisory::Advisory, edge::*, error::GraphError, graph::*, node::*, ops::*, weight::*,
    };
}
