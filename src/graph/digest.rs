/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes a **hash-based fingerprint**
of a graph's content.

The digest encodes:
- the number of nodes and the weight kind,
- the vertex names in index order, and
- every weighted edge in row-major order,

before feeding them into a cryptographic hash function. Two graphs compare equal iff they have
the same digest (up to hash collisions), which is why the digest serves as graph identity in the
cache of known supergraphs.

## Example
```
use lwgraphs::prelude::*;

let graph = Graph::<i32>::from_matrix([[0, 1], [0, 0]], MatrixOptions::new()).unwrap();
let same = Graph::<i32>::from_matrix([[0, 1], [0, 0]], MatrixOptions::new()).unwrap();
let other = Graph::<i32>::from_matrix([[0, 2], [0, 0]], MatrixOptions::new()).unwrap();

assert_eq!(graph.digest_sha256().len(), 64);
assert_eq!(graph.digest_sha256(), same.digest_sha256());
assert_ne!(graph.digest_sha256(), other.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **content hash digest** of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<W: Weight> GraphDigest for Graph<W> {
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // first encode the number of nodes and the weight domain
        hasher.update(self.number_of_nodes().to_le_bytes());
        hasher.update([W::KIND as u8]);

        // names are length-prefixed so that concatenations cannot collide
        for name in self.names() {
            hasher.update((name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
        }

        for (Edge(u, v), w) in self.edges() {
            hasher.update(u.to_le_bytes());
            hasher.update(v.to_le_bytes());
            hasher.update(w.to_bits().to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }

    /// Computed once per graph and cached afterwards
    fn digest_sha256(&self) -> String {
        self.digest
            .get_or_init(|| self.digest::<sha2::Sha256>())
            .clone()
    }
}
