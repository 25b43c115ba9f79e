use super::*;

/// Generator for uniform random directed graphs with `n` nodes, no self-loops and a fixed
/// fraction (the *density*) of all `n(n - 1)` possible edges.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.density(d)`: fraction of edges; exactly `floor(n(n - 1) * d)` distinct edges are sampled
///
/// # Example
/// ```
/// use lwgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(3);
/// let edges = Gnm::new().nodes(5).density(0.5).generate(rng);
///
/// assert_eq!(edges.len(), 10);
/// assert!(edges.iter().all(|e| !e.is_loop()));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: u64,
    density: Option<f64>,
}

impl Gnm {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of edges that will be generated
    ///
    /// # Panics
    /// If the density was not set
    pub fn number_of_edges(&self) -> NumEdges {
        let Some(density) = self.density else {
            panic!("Density of Gnm was not set!");
        };
        ((self.n * self.n.saturating_sub(1)) as f64 * density) as NumEdges
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n as u64;
    }
}

impl DensityGen for Gnm {
    /// Sets the density
    ///
    /// # Panics
    /// If `density` is not in `[0, 1]`
    fn set_density(&mut self, density: f64) {
        assert!(
            density.is_valid_probability(),
            "Density must be between 0 and 1!"
        );
        self.density = Some(density);
    }
}

impl GraphGenerator for Gnm {
    /// Returns a streaming iterator over a random edge set.
    ///
    /// Internally, edges are uniformly sampled without replacement.
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If the density was not set
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let m = self.number_of_edges();

        GnmGenerator::new(rng, self.n, m as u64)
    }
}

/// Given `n` nodes, this iterator produces exactly `m` uniformly random and distinct loop-free
/// directed edges without replacement.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// Instead of shuffling all `n(n - 1)` edge values, a sparse map records only the positions
/// that were swapped so far.
pub struct GnmGenerator<'a, R>
where
    R: Rng,
{
    n: u64,
    rem: u64,
    cur: u64,
    end: u64,
    map: FxHashMap<u64, u64>,
    rng: &'a mut R,
}

impl<'a, R> GnmGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a new `GnmGenerator` yielding `m` distinct edges.
    ///
    /// # Panics
    /// Panics if `m > n(n - 1)`, which would violate sampling without replacement.
    pub fn new(rng: &'a mut R, n: u64, m: u64) -> Self {
        let end = n * n.saturating_sub(1);
        assert!(m <= end);

        Self {
            n,
            rem: m,
            cur: 0,
            end,
            map: FxHashMap::with_capacity_and_hasher(m as usize, Default::default()),
            rng,
        }
    }

    /// Selects the next unique edge value by swapping the drawn position with the
    /// current front of a virtual permutation of `0..end`.
    fn next_step(&mut self) -> Option<u64> {
        // Stop if `m` values were generated
        if self.rem == 0 {
            return None;
        }

        // Draw value and check if it was swapped before
        let drawn = self.rng.random_range(self.cur..self.end);
        let value = self.map.get(&drawn).copied().unwrap_or(drawn);

        // The front value moves to the drawn position
        let front = self.map.get(&self.cur).copied().unwrap_or(self.cur);
        self.map.insert(drawn, front);

        self.cur += 1;
        self.rem -= 1;

        Some(value)
    }
}

impl<R> Iterator for GnmGenerator<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step()
            .map(|x| Edge::from_u64_loopless(x, self.n))
    }

    /// Returns the number of edges remaining to be generated.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R> ExactSizeIterator for GnmGenerator<'_, R> where R: Rng {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn distinct_loopless_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [2u32, 3, 10, 40] {
            for density in [0.0, 0.1, 0.5, 0.9, 1.0] {
                let generator = Gnm::new().nodes(n).density(density);
                let edges = generator.generate(rng);

                assert_eq!(edges.len(), generator.number_of_edges() as usize);
                assert!(edges.iter().all(|e| !e.is_loop()));
                assert!(edges.iter().all(|e| e.0 < n && e.1 < n));
                assert_eq!(edges.iter().unique().count(), edges.len());
            }
        }
    }

    #[test]
    fn full_density_is_complete() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let mut edges = Gnm::new().nodes(6).density(1.0).generate(rng);
        edges.sort_unstable();

        let complete = (0..6u32)
            .cartesian_product(0..6u32)
            .filter(|(u, v)| u != v)
            .map(Edge::from)
            .collect_vec();
        assert_eq!(edges, complete);
    }

    #[test]
    #[should_panic]
    fn invalid_density() {
        let _ = Gnm::new().nodes(4).density(1.5);
    }

    #[test]
    #[should_panic]
    fn no_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let _ = Gnm::new().density(0.5).generate(rng);
    }
}
