/*!
# Graph Generators

Random graphs for test fixtures. Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).density(d)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] and [`RandomWeightedGraph`] traits wrap this into constructors of whole
[`Graph`] instances whose vertices are named `"0".."n-1"`.

## Example
```
use lwgraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = Graph::<f64>::random_weighted(rng, 10, 0.5);

assert_eq!(graph.number_of_nodes(), 10);
assert_eq!(graph.number_of_edges(), 45);
assert!(graph.edges().all(|(_, w)| w > 0.0 && w <= 1.0));
```
*/

use fxhash::FxHashMap;
use num::{Float, NumCast, One, Zero};
use rand::Rng;

use crate::prelude::*;

mod gnm;

pub use gnm::*;

/// Helper trait for probabilities and densities
pub trait Probability {
    /// Returns *true* if the value is a valid probability (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in place
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the edge density,
/// ie. the fraction of all `n(n - 1)` possible loop-free edges that are generated.
pub trait DensityGen: Sized {
    /// Sets the density in place
    fn set_density(&mut self, density: f64);

    /// Sets the density of the graph generator.
    fn density(mut self, density: f64) -> Self {
        self.set_density(density);
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Builds a graph on `n` vertices named by their index from weighted edges
fn graph_from_edges<W, I>(n: NumNodes, edges: I) -> Graph<W>
where
    W: Weight,
    I: IntoIterator<Item = (Edge, W)>,
{
    let len = n as usize;
    let mut matrix = vec![W::zero(); len * len];
    for (Edge(u, v), w) in edges {
        matrix[u as usize * len + v as usize] = w;
    }

    Graph::from_parts(
        (0..n).map(|u| u.to_string()).collect(),
        matrix,
        Vec::new(),
    )
}

/// Random graphs with all edge weights one
pub trait RandomGraph: Sized {
    /// Creates a graph on `n` vertices with `floor((n^2 - n) * density)` edges chosen uniformly
    /// at random, all of weight one.
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If `density` is not in `[0, 1]`
    fn random_unweighted<R>(rng: &mut R, n: NumNodes, density: f64) -> Self
    where
        R: Rng;
}

impl<W: Weight> RandomGraph for Graph<W> {
    fn random_unweighted<R>(rng: &mut R, n: NumNodes, density: f64) -> Self
    where
        R: Rng,
    {
        let edges = Gnm::new().nodes(n).density(density).generate(rng);
        graph_from_edges(n, edges.into_iter().map(|e| (e, W::one())))
    }
}

/// Random graphs with real edge weights
pub trait RandomWeightedGraph: Sized {
    /// Like [`RandomGraph::random_unweighted`] but every edge gets a weight drawn uniformly
    /// from `(0, 1]`.
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If `density` is not in `[0, 1]`
    fn random_weighted<R>(rng: &mut R, n: NumNodes, density: f64) -> Self
    where
        R: Rng;
}

impl<W: Weight + Float> RandomWeightedGraph for Graph<W> {
    fn random_weighted<R>(rng: &mut R, n: NumNodes, density: f64) -> Self
    where
        R: Rng,
    {
        let edges = Gnm::new().nodes(n).density(density).generate(rng);
        let weighted = edges
            .into_iter()
            .map(|e| {
                // `random` draws from [0, 1)
                let w: f64 = 1.0 - rng.random::<f64>();
                (e, <W as NumCast>::from(w).unwrap_or_else(W::one))
            })
            .collect::<Vec<_>>();

        graph_from_edges(n, weighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn probabilities() {
        assert!(0.0f64.is_valid_probability());
        assert!(1.0f64.is_valid_probability());
        assert!(0.3f32.is_valid_probability());
        assert!(!1.5f64.is_valid_probability());
        assert!(!(-0.1f64).is_valid_probability());
    }

    #[test]
    fn unweighted_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [1, 2, 7, 20] {
            for density in [0.0, 0.25, 0.5, 1.0] {
                let graph = Graph::<u32>::random_unweighted(rng, n, density);
                let expected = ((n * n - n) as f64 * density) as NumEdges;

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), expected);
                assert!(graph.is_unit_weighted());
                assert!(graph.vertices().all(|u| !graph.has_edge(u, u)));
                assert!(graph.advisories().is_empty());
            }
        }
    }

    #[test]
    fn weighted_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for n in [3, 10, 30] {
            let graph = Graph::<f32>::random_weighted(rng, n, 0.4);
            assert!(graph.edges().all(|(_, w)| w > 0.0 && w <= 1.0));
            assert_eq!(graph.names()[0], "0");
        }
    }

    #[test]
    fn reproducible() {
        let first = Graph::<f64>::random_weighted(&mut Pcg64Mcg::seed_from_u64(5), 15, 0.2);
        let second = Graph::<f64>::random_weighted(&mut Pcg64Mcg::seed_from_u64(5), 15, 0.2);
        assert_eq!(first, second);
    }
}
