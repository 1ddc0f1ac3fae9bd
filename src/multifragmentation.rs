// Statistical multifragmentation
//
// A hot nucleus is split into a random partition of fragments. The heaviest
// fragment takes a random share of the nucleons, the rest follow a power law
// in size, and charges are shared in proportion to size. Half of the energy
// above the partition's ground-state masses goes into internal excitation of
// the composite fragments, the other half into their relative motion.

use crate::channel::BreakUpChannel;
use crate::fragment::Fragment;
use crate::kinematics::phase_space_decay;
use crate::nuclear_data::NuclearData;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Exponent of the fragment size distribution `P(A) ~ A^-tau`.
const SIZE_EXPONENT: f64 = 2.2;
const EXCITATION_SHARE: f64 = 0.5;

pub struct StatisticalMultifragmentation {
    data: Arc<dyn NuclearData>,
    /// Partitions tried before giving up on a fragment
    pub max_attempts: usize,
    /// Smallest nucleus the model splits
    pub min_a: i32,
}

impl StatisticalMultifragmentation {
    pub fn new(data: Arc<dyn NuclearData>) -> Self {
        StatisticalMultifragmentation {
            data,
            max_attempts: 100,
            min_a: 4,
        }
    }

    /// Mass numbers of a random partition of `a` nucleons, heaviest first.
    fn sample_sizes<R: Rng + ?Sized>(a: i32, rng: &mut R) -> Vec<i32> {
        let heaviest = ((a as f64) * rng.gen_range(0.2..0.8)).round() as i32;
        let heaviest = heaviest.clamp(1, a - 1);
        let mut sizes = vec![heaviest];
        let mut remaining = a - heaviest;
        while remaining > 0 {
            let size = sample_power_law(remaining.min(heaviest), rng);
            sizes.push(size);
            remaining -= size;
        }
        sizes.sort_unstable_by(|x, y| y.cmp(x));
        sizes
    }

    /// Charges proportional to size, corrected so they add up to `z`.
    fn assign_charges(sizes: &[i32], a: i32, z: i32) -> Vec<i32> {
        let mut charges: Vec<i32> = sizes
            .iter()
            .map(|&size| ((z as f64) * size as f64 / a as f64).round() as i32)
            .zip(sizes)
            .map(|(charge, &size)| charge.clamp(0, size))
            .collect();
        let mut excess: i32 = charges.iter().sum::<i32>() - z;
        // sizes are sorted, so corrections land on the heaviest fragments first
        while excess != 0 {
            let before = excess;
            for (charge, &size) in charges.iter_mut().zip(sizes) {
                if excess > 0 && *charge > 0 {
                    *charge -= 1;
                    excess -= 1;
                } else if excess < 0 && *charge < size {
                    *charge += 1;
                    excess += 1;
                }
                if excess == 0 {
                    break;
                }
            }
            if excess == before {
                break;
            }
        }
        charges
    }

    fn try_partition<R: Rng + ?Sized>(&self, fragment: &Fragment, rng: &mut R) -> Option<Vec<Fragment>> {
        let sizes = Self::sample_sizes(fragment.a, rng);
        let charges = Self::assign_charges(&sizes, fragment.a, fragment.z);
        if charges.iter().sum::<i32>() != fragment.z {
            return None;
        }

        let mut ground_masses = Vec::with_capacity(sizes.len());
        for (&a, &z) in sizes.iter().zip(&charges) {
            let mass = self.data.nuclear_mass(z, a);
            if mass <= 0.0 {
                return None;
            }
            ground_masses.push(mass);
        }
        let available = fragment.mass() - ground_masses.iter().sum::<f64>();
        if available <= 0.0 {
            return None;
        }

        let composite_nucleons: i32 = sizes.iter().filter(|&&a| a > 1).sum();
        let excitations: Vec<f64> = sizes
            .iter()
            .map(|&a| {
                if a > 1 && composite_nucleons > 0 {
                    EXCITATION_SHARE * available * a as f64 / composite_nucleons as f64
                } else {
                    0.0
                }
            })
            .collect();
        let masses: Vec<f64> = ground_masses.iter().zip(&excitations).map(|(m, e)| m + e).collect();
        let momenta = phase_space_decay(&fragment.momentum, &masses, rng)?;

        Some(
            sizes
                .iter()
                .zip(&charges)
                .zip(excitations.iter().zip(momenta))
                .map(|((&a, &z), (&excitation, momentum))| {
                    Fragment::new(a, z, excitation, momentum).with_creation_time(fragment.creation_time)
                })
                .collect(),
        )
    }
}

/// Integer in `1..=max` drawn from `P(k) ~ k^-tau`.
fn sample_power_law<R: Rng + ?Sized>(max: i32, rng: &mut R) -> i32 {
    let total: f64 = (1..=max).map(|k| (k as f64).powf(-SIZE_EXPONENT)).sum();
    let mut xi = rng.gen::<f64>() * total;
    for k in 1..=max {
        let weight = (k as f64).powf(-SIZE_EXPONENT);
        if xi < weight {
            return k;
        }
        xi -= weight;
    }
    max
}

impl BreakUpChannel for StatisticalMultifragmentation {
    fn break_it_up(&mut self, fragment: &Fragment, rng: &mut dyn RngCore) -> Vec<Fragment> {
        if fragment.a < self.min_a {
            return Vec::new();
        }
        for _ in 0..self.max_attempts {
            if let Some(products) = self.try_partition(fragment, rng) {
                return products;
            }
        }
        tracing::debug!(a = fragment.a, z = fragment.z, "no acceptable multifragmentation partition");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorentz::LorentzVector;
    use crate::nuclear_data::NuclideTable;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_charges_add_up() {
        let sizes = vec![60, 20, 10, 4, 1, 1];
        let charges = StatisticalMultifragmentation::assign_charges(&sizes, 96, 40);
        assert_eq!(charges.iter().sum::<i32>(), 40);
        assert!(charges.iter().zip(&sizes).all(|(z, a)| *z >= 0 && z <= a));
    }

    #[test]
    fn test_sizes_partition_the_nucleus() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let sizes = StatisticalMultifragmentation::sample_sizes(120, &mut rng);
            assert_eq!(sizes.iter().sum::<i32>(), 120);
            assert!(sizes.len() >= 2);
            assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_hot_tin_break_up_conserves_everything() {
        let data: Arc<dyn NuclearData> = Arc::new(NuclideTable::new());
        let mut model = StatisticalMultifragmentation::new(Arc::clone(&data));
        let mut rng = StdRng::seed_from_u64(120);
        let ground = data.nuclear_mass(50, 120);
        let momentum = LorentzVector::on_shell(Vector3::new(0.0, 100.0, 0.0), ground + 720.0);
        let tin = Fragment::new(120, 50, 720.0, momentum);

        for _ in 0..20 {
            let products = model.break_it_up(&tin, &mut rng);
            assert!(products.len() >= 2);
            assert_eq!(products.iter().map(|p| p.a).sum::<i32>(), 120);
            assert_eq!(products.iter().map(|p| p.z).sum::<i32>(), 50);
            let total: LorentzVector = products.iter().map(|p| p.momentum).sum();
            assert!((total.energy - momentum.energy).abs() < 1e-6 * momentum.energy);
            assert!(products.iter().filter(|p| p.a <= 1).all(|p| p.excitation_energy == 0.0));
        }
    }

    #[test]
    fn test_small_nuclei_are_not_split() {
        let data: Arc<dyn NuclearData> = Arc::new(NuclideTable::new());
        let mut model = StatisticalMultifragmentation::new(Arc::clone(&data));
        let mut rng = StdRng::seed_from_u64(1);
        let triton = Fragment::at_rest(3, 1, data.nuclear_mass(1, 3), 10.0);
        assert!(model.break_it_up(&triton, &mut rng).is_empty());
    }
}
