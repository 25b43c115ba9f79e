/*!
# Graph Algorithms

This module provides the algorithms built on top of [`Graph`]:
- [`DfsEvents`] / [`DfsNumbering`]: depth-first search forests with edge classification,
- [`BfsSearch`] / [`BfsLevels`]: breadth-first search with hop distances and parents,
- [`Exploration`]: a memoizing engine over both traversals, including derived trees and
  hop-count paths,
- [`Dijkstra`]: a memoizing engine for shortest paths by total weight,
- [`Cycles`]: one representative minimal cycle per back edge of a depth-first search.

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lwgraphs::algo::*;
```
Traversals are provided as **iterators** where possible, making it easy to consume results lazily.
*/

mod bfs;
mod cycles;
mod dfs;
mod dijkstra;
mod exploration;
mod path;

use itertools::Itertools;

use crate::{
    advisory::Advisory,
    error::Result,
    node::{pack, unpack},
    prelude::*,
};

pub(crate) use path::{PairCache, per_start};

pub use bfs::*;
pub use cycles::*;
pub use dfs::*;
pub use dijkstra::*;
pub use exploration::*;
pub use path::ShortestPath;
