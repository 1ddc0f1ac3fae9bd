// Fermi break-up of light nuclei
//
// The excited nucleus is assumed to disassemble at once into ground-state
// fragments from the pool. Every split is weighted by its statistical Fermi
// weight at the nucleus' invariant mass, one split is drawn and its members
// share the kinetic energy by N-body phase space.

pub mod cache;
pub mod pool;
pub mod splits;

pub use cache::{Cache, LfuCache, SimpleCache};
pub use pool::{FragmentPool, PoolFragment};
pub use splits::{enumerate_splits, FragmentSplit, NucleiKey};

use crate::channel::BreakUpChannel;
use crate::fragment::Fragment;
use crate::kinematics::phase_space_decay;
use crate::nuclear_data::NuclearData;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Nuclei with `A` below this bound are handled by Fermi break-up.
pub const MAX_A: i32 = 19;
/// Nuclei with `Z` below this bound are handled by Fermi break-up.
pub const MAX_Z: i32 = 9;
/// Default capacity of the split cache, roughly the number of `(A, Z)` pairs in range.
pub const DEFAULT_CACHE_CAPACITY: usize = (MAX_A * MAX_A / 2) as usize;

pub type SplitList = Arc<Vec<FragmentSplit>>;
pub type SplitCache = Box<dyn Cache<NucleiKey, SplitList>>;

pub fn lfu_split_cache(capacity: usize) -> SplitCache {
    Box::new(LfuCache::<NucleiKey, SplitList>::new(capacity))
}

pub fn simple_split_cache() -> SplitCache {
    Box::new(SimpleCache::<NucleiKey, SplitList>::new())
}

pub struct FermiBreakUp {
    pool: FragmentPool,
    cache: SplitCache,
}

impl FermiBreakUp {
    /// Fermi model with an LFU split cache of the default capacity.
    pub fn new(data: Arc<dyn NuclearData>) -> Self {
        Self::with_cache(data, lfu_split_cache(DEFAULT_CACHE_CAPACITY))
    }

    pub fn with_cache(data: Arc<dyn NuclearData>, cache: SplitCache) -> Self {
        FermiBreakUp {
            pool: FragmentPool::new(data.as_ref(), MAX_A),
            cache,
        }
    }

    pub fn is_fermi_possible(z: i32, a: i32, _excitation_energy: f64) -> bool {
        z < MAX_Z && a < MAX_A
    }

    pub fn pool(&self) -> &FragmentPool {
        &self.pool
    }

    pub fn cached_nuclei(&self) -> usize {
        self.cache.len()
    }

    /// Every split of `(A, Z)`, enumerated on first use and cached afterwards.
    pub fn splits(&mut self, a: i32, z: i32) -> SplitList {
        let key = NucleiKey { a, z };
        if let Some(splits) = self.cache.get(&key) {
            return splits;
        }
        let splits = Arc::new(enumerate_splits(key, &self.pool));
        tracing::debug!(a, z, splits = splits.len(), "enumerated Fermi splits");
        self.cache.insert(key, Arc::clone(&splits));
        splits
    }

    fn select_split<'a, R: Rng + ?Sized>(
        splits: &'a [FragmentSplit],
        total_mass: f64,
        rng: &mut R,
    ) -> Option<&'a FragmentSplit> {
        let weighted: Vec<(&FragmentSplit, f64)> = splits
            .iter()
            .filter_map(|split| split.log_weight(total_mass).map(|w| (split, w)))
            .collect();
        let max_log = weighted
            .iter()
            .map(|(_, w)| *w)
            .fold(f64::NEG_INFINITY, f64::max);
        if weighted.is_empty() || !max_log.is_finite() {
            return None;
        }
        let weights: Vec<f64> = weighted.iter().map(|(_, w)| (w - max_log).exp()).collect();
        let total: f64 = weights.iter().sum();

        let mut xi = rng.gen::<f64>() * total;
        for ((split, _), weight) in weighted.iter().zip(&weights) {
            if xi < *weight {
                return Some(*split);
            }
            xi -= weight;
        }
        weighted.last().map(|(split, _)| *split)
    }
}

impl BreakUpChannel for FermiBreakUp {
    fn break_it_up(&mut self, fragment: &Fragment, rng: &mut dyn RngCore) -> Vec<Fragment> {
        let splits = self.splits(fragment.a, fragment.z);
        let total_mass = fragment.mass();
        let Some(split) = Self::select_split(&splits, total_mass, rng) else {
            return vec![fragment.clone()];
        };

        let members: Vec<PoolFragment> = split.members.iter().map(|&i| *self.pool.get(i)).collect();
        let masses: Vec<f64> = members.iter().map(|m| m.mass).collect();
        let Some(momenta) = phase_space_decay(&fragment.momentum, &masses, rng) else {
            return vec![fragment.clone()];
        };

        members
            .iter()
            .zip(momenta)
            .map(|(member, momentum)| {
                Fragment::new(member.a, member.z, 0.0, momentum)
                    .with_creation_time(fragment.creation_time)
            })
            .collect()
    }

    fn is_applicable(&self, z: i32, a: i32, excitation_energy: f64) -> bool {
        Self::is_fermi_possible(z, a, excitation_energy)
    }
}
