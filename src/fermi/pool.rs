use crate::data::LIGHT_NUCLIDE_INDEX;
use crate::nuclear_data::NuclearData;

/// A fragment species that Fermi break-up may produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolFragment {
    pub a: i32,
    pub z: i32,
    /// Ground-state nuclear mass in MeV
    pub mass: f64,
    /// Spin degeneracy `2J + 1`
    pub degeneracy: f64,
}

/// Light ground-state nuclei available as break-up products, ordered by `(A, Z)`.
///
/// Nuclides that are unbound against a two-body split into other pool
/// members (5He, 8Be, ...) are left out, so every product is particle-stable
/// against binary decay.
#[derive(Debug, Clone)]
pub struct FragmentPool {
    fragments: Vec<PoolFragment>,
}

impl FragmentPool {
    /// Pool of every nuclide with `A < max_a` that `data` has a mass for.
    pub fn new(data: &dyn NuclearData, max_a: i32) -> Self {
        let mut fragments: Vec<PoolFragment> = Vec::new();
        for a in 1..max_a {
            for z in 0..=a {
                let mass = data.nuclear_mass(z, a);
                if mass <= 0.0 {
                    continue;
                }
                let degeneracy = LIGHT_NUCLIDE_INDEX
                    .get(&(z, a))
                    .map(|nuclide| (nuclide.twice_spin + 1) as f64)
                    .unwrap_or(1.0);
                let candidate = PoolFragment {
                    a,
                    z,
                    mass,
                    degeneracy,
                };
                if !is_binary_unbound(&fragments, &candidate) {
                    fragments.push(candidate);
                }
            }
        }
        tracing::debug!(size = fragments.len(), "built Fermi break-up fragment pool");
        FragmentPool { fragments }
    }

    pub fn fragments(&self) -> &[PoolFragment] {
        &self.fragments
    }

    pub fn get(&self, index: usize) -> &PoolFragment {
        &self.fragments[index]
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn contains(&self, z: i32, a: i32) -> bool {
        self.fragments.iter().any(|f| f.z == z && f.a == a)
    }
}

fn is_binary_unbound(accepted: &[PoolFragment], candidate: &PoolFragment) -> bool {
    accepted.iter().any(|first| {
        let (a2, z2) = (candidate.a - first.a, candidate.z - first.z);
        accepted
            .iter()
            .find(|second| second.a == a2 && second.z == z2)
            .is_some_and(|second| first.mass + second.mass < candidate.mass)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nuclear_data::NuclideTable;

    #[test]
    fn test_pool_contains_light_clusters() {
        let pool = FragmentPool::new(&NuclideTable::new(), 19);
        for (z, a) in [(0, 1), (1, 1), (1, 2), (1, 3), (2, 3), (2, 4), (6, 12), (8, 16)] {
            assert!(pool.contains(z, a), "missing Z={} A={}", z, a);
        }
    }

    #[test]
    fn test_pool_excludes_unbound_nuclei() {
        let pool = FragmentPool::new(&NuclideTable::new(), 19);
        assert!(!pool.contains(4, 8), "8Be decays into two alphas");
        assert!(!pool.contains(2, 5), "5He decays into alpha + n");
        assert!(!pool.contains(3, 5), "5Li decays into alpha + p");
    }

    #[test]
    fn test_pool_is_ordered_and_bounded() {
        let pool = FragmentPool::new(&NuclideTable::new(), 19);
        assert!(!pool.is_empty());
        let keys: Vec<(i32, i32)> = pool.fragments().iter().map(|f| (f.a, f.z)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert!(pool.fragments().iter().all(|f| f.a < 19));
        assert_eq!(pool.get(0).a, 1);
    }

    #[test]
    fn test_spin_degeneracy() {
        let pool = FragmentPool::new(&NuclideTable::new(), 19);
        let deuteron = pool.fragments().iter().find(|f| f.a == 2 && f.z == 1).unwrap();
        assert_eq!(deuteron.degeneracy, 3.0);
    }
}
