use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;
use crate::utils::Weight;

/// The only randomness the engine needs: pick an index, uniformly or by weight
pub trait Randomness {
    /// Index in `0..n`, None when there is nothing to pick
    fn pick_uniform(&mut self, n: usize) -> Option<usize>;
    /// Index into `weights`, each chosen with probability weight / total
    fn pick_weighted(&mut self, weights: &[Weight]) -> Option<usize>;
}

impl<R: Rng + ?Sized> Randomness for R {
    fn pick_uniform(&mut self, n: usize) -> Option<usize> {
        if n == 0 { return None; }
        Some(self.random_range(0..n))
    }

    fn pick_weighted(&mut self, weights: &[Weight]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(self))
    }
}
