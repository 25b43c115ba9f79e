/*!
Subgraph containment by vertex names.

A graph `A` is a subgraph of `B` if every name of `A` is a name of `B` and every weighted edge of
`A` exists with the same weight between the same names in `B`. Vertex indices play no role.
Confirmed supergraphs are remembered by their digest so that repeated tests against the same
(or an equal) graph return immediately.
*/

use super::*;

impl<W: Weight> Graph<W> {
    /// Returns *true* iff `self` is a subgraph of `other`.
    ///
    /// A graph without vertices is a subgraph of every graph.
    ///
    /// # Example
    /// ```
    /// use lwgraphs::prelude::*;
    ///
    /// let big = Graph::<i32>::from_edge_list(
    ///     [("a", "b", 1), ("b", "c", 2)],
    ///     EdgeListOptions::new().names(["a", "b", "c"]),
    /// )
    /// .unwrap();
    /// let small = Graph::<i32>::from_edge_list(
    ///     [("b", "c", 2)],
    ///     EdgeListOptions::new().names(["c", "b"]),
    /// )
    /// .unwrap();
    ///
    /// assert!(small.is_subgraph_of(&big));
    /// assert!(!big.is_subgraph_of(&small));
    /// ```
    pub fn is_subgraph_of(&self, other: &Graph<W>) -> bool {
        self.contained_in(other, |a, b| a == b)
    }

    /// Tests containment in a graph with a different weight type of the same [`WeightKind`].
    /// Weights are compared numerically.
    ///
    /// # Errors
    /// Fails with [`GraphError::TypeMismatch`] if the weight kinds differ.
    pub fn is_subgraph_of_any<V: Weight>(&self, other: &Graph<V>) -> Result<bool> {
        if W::KIND != V::KIND {
            return Err(GraphError::TypeMismatch {
                expected: W::KIND,
                found: V::KIND,
            });
        }

        Ok(self.contained_in(other, |a, b| a.to_f64() == b.to_f64()))
    }

    /// Accepts `sub` for display on top of `self` only if it is a subgraph of `self`.
    ///
    /// # Errors
    /// Fails with [`GraphError::NotASubgraph`] otherwise.
    pub fn verify_subgraph(&self, sub: &Graph<W>) -> Result<()> {
        if sub.is_subgraph_of(self) {
            Ok(())
        } else {
            Err(GraphError::NotASubgraph)
        }
    }

    fn contained_in<V, F>(&self, other: &Graph<V>, same_weight: F) -> bool
    where
        V: Weight,
        F: Fn(W, V) -> bool,
    {
        let key = other.digest_sha256();
        if self.known_supergraphs().contains(&key) {
            return true;
        }

        if self.is_empty() {
            return true;
        }

        let contained = self.vertices().all(|u| {
            let Ok(other_u) = other.index_of(self.name_of(u)) else {
                return false;
            };

            self.out_edges_of(u).iter().all(|&(v, w)| {
                other.index_of(self.name_of(v)).is_ok_and(|other_v| {
                    let x = other.weight(other_u, other_v);
                    x.is_edge() && same_weight(w, x)
                })
            })
        });

        if contained {
            tracing::trace!(supergraph = %key, "recorded known supergraph");
            self.known_supergraphs().insert(key);
        }

        contained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn named(edges: &[(&str, &str, i32)], names: &[&str]) -> Graph<i32> {
        Graph::from_edge_list(
            edges.iter().copied(),
            EdgeListOptions::new().names(names.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn reflexive() {
        let (a, b, c) = (graph_a(), graph_b(), graph_c());
        assert!(a.is_subgraph_of(&a));
        assert!(b.is_subgraph_of(&b));
        assert!(c.is_subgraph_of(&c));
    }

    #[test]
    fn union_laws() {
        let a = named(&[("x", "y", 1)], &["x", "y"]);
        let b = named(&[("y", "z", 2)], &["y", "z"]);
        let d = named(&[("x", "y", 1), ("y", "z", 2)], &["x", "y", "z"]);

        assert!(a.is_subgraph_of(&d));
        assert!(b.is_subgraph_of(&d));
        assert!(!d.is_subgraph_of(&a));
        assert!(!d.is_subgraph_of(&b));
    }

    #[test]
    fn weights_must_match() {
        let light = named(&[("x", "y", 1)], &["x", "y"]);
        let heavy = named(&[("x", "y", 3)], &["x", "y"]);
        assert!(!light.is_subgraph_of(&heavy));
    }

    #[test]
    fn names_must_be_contained() {
        let small = named(&[], &["x", "q"]);
        let big = named(&[("x", "y", 1)], &["x", "y"]);
        assert!(!small.is_subgraph_of(&big));
    }

    #[test]
    fn empty_graphs() {
        let empty = Graph::<i32>::empty();
        let a = graph_a();

        assert!(empty.is_subgraph_of(&a));
        assert!(empty.is_subgraph_of(&empty));
        assert!(!a.is_subgraph_of(&empty));
    }

    #[test]
    fn supergraphs_are_cached() {
        let a = named(&[("x", "y", 1)], &["x", "y"]);
        let d = named(&[("x", "y", 1), ("y", "z", 2)], &["x", "y", "z"]);

        assert!(a.known_supergraphs().is_empty());
        assert!(a.is_subgraph_of(&d));
        assert!(a.known_supergraphs().contains(&d.digest_sha256()));

        let unrelated = graph_a();
        assert!(!a.is_subgraph_of(&unrelated));
        assert_eq!(a.known_supergraphs().len(), 1);
    }

    #[test]
    fn across_weight_types() {
        let narrow = Graph::<i32>::from_matrix([[0, 4], [0, 0]], MatrixOptions::new()).unwrap();
        let wide = Graph::<i64>::from_matrix([[0, 4], [2, 0]], MatrixOptions::new()).unwrap();
        let real = Graph::<f64>::from_matrix([[0.0, 4.0], [0.0, 0.0]], MatrixOptions::new()).unwrap();

        assert!(narrow.is_subgraph_of_any(&wide).unwrap());
        assert!(!wide.is_subgraph_of_any(&narrow).unwrap());
        assert!(matches!(
            narrow.is_subgraph_of_any(&real),
            Err(GraphError::TypeMismatch {
                expected: WeightKind::Integer,
                found: WeightKind::Real
            })
        ));
    }

    #[test]
    fn verify_for_display() {
        let graph = graph_a();
        let path = graph.edge_induced([Edge(0, 1), Edge(1, 3)]);

        assert!(graph.verify_subgraph(&path).is_ok());
        assert!(matches!(
            path.verify_subgraph(&graph),
            Err(GraphError::NotASubgraph)
        ));
    }
}
