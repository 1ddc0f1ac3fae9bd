// Enumeration and statistical weights of Fermi break-up channels
//
// A split is a multiset of pool fragments whose mass numbers and charges add
// up to the decaying nucleus. The energy-independent part of the Fermi weight
// is computed once per split so that sampling only has to add the
// kinetic-energy term.

use super::pool::FragmentPool;
use std::f64::consts::PI;

/// Radius parameter of the break-up volume in fm.
const R0: f64 = 1.3;
/// Break-up volume in units of the normal nuclear volume, minus one.
const KAPPA: f64 = 1.0;
const HBAR_C: f64 = 197.3269804;
/// e^2 / (4 pi eps0) in MeV fm.
const ELEMENTARY_CHARGE_SQUARED: f64 = 1.439964;

/// Mass number and charge identifying a decaying nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleiKey {
    pub a: i32,
    pub z: i32,
}

/// One possible final state of a Fermi break-up.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSplit {
    /// Indices into the fragment pool, in non-decreasing order
    pub members: Vec<usize>,
    /// Sum of the ground-state masses of the members
    pub mass_sum: f64,
    /// Coulomb energy released when the parent separates into the members
    pub coulomb_barrier: f64,
    /// Logarithm of the energy-independent part of the weight
    pub log_static_weight: f64,
}

impl FragmentSplit {
    pub fn multiplicity(&self) -> usize {
        self.members.len()
    }

    /// Kinetic energy available to the members for a parent of invariant mass `total_mass`.
    pub fn available_energy(&self, total_mass: f64) -> f64 {
        total_mass - self.mass_sum - self.coulomb_barrier
    }

    /// Log of the Fermi weight, or `None` if the split is energetically closed.
    pub fn log_weight(&self, total_mass: f64) -> Option<f64> {
        let kinetic = self.available_energy(total_mass);
        if kinetic <= 0.0 {
            return None;
        }
        let n = self.multiplicity() as f64;
        Some(self.log_static_weight + (1.5 * n - 2.5) * kinetic.ln())
    }
}

/// Every split of `key` into at least two pool fragments.
pub fn enumerate_splits(key: NucleiKey, pool: &FragmentPool) -> Vec<FragmentSplit> {
    let mut splits = Vec::new();
    let mut members = Vec::new();
    collect(pool, 0, key.a, key.z, &mut members, &mut |members| {
        if members.len() >= 2 {
            splits.push(build_split(key, members, pool));
        }
    });
    splits
}

fn collect(
    pool: &FragmentPool,
    start: usize,
    remaining_a: i32,
    remaining_z: i32,
    members: &mut Vec<usize>,
    emit: &mut dyn FnMut(&[usize]),
) {
    if remaining_a == 0 {
        if remaining_z == 0 {
            emit(members);
        }
        return;
    }
    for index in start..pool.len() {
        let fragment = pool.get(index);
        if fragment.a > remaining_a {
            break;
        }
        if fragment.z > remaining_z || remaining_z - fragment.z > remaining_a - fragment.a {
            continue;
        }
        members.push(index);
        collect(
            pool,
            index,
            remaining_a - fragment.a,
            remaining_z - fragment.z,
            members,
            emit,
        );
        members.pop();
    }
}

fn build_split(key: NucleiKey, members: &[usize], pool: &FragmentPool) -> FragmentSplit {
    let n = members.len();
    let fragments: Vec<_> = members.iter().map(|&i| pool.get(i)).collect();
    let mass_sum: f64 = fragments.iter().map(|f| f.mass).sum();

    let coulomb_barrier = {
        let parent = coulomb_term(key.z, key.a);
        let products: f64 = fragments.iter().map(|f| coulomb_term(f.z, f.a)).sum();
        0.6 * ELEMENTARY_CHARGE_SQUARED / (R0 * (1.0 + KAPPA).cbrt()) * (parent - products)
    };

    let volume = 4.0 * PI / 3.0 * R0.powi(3) * key.a as f64 * (1.0 + KAPPA);
    let log_volume_factor = (volume / (2.0 * PI * HBAR_C).powi(3)).ln();
    let log_degeneracy: f64 = fragments.iter().map(|f| f.degeneracy.ln()).sum();
    let log_mass_factor = 1.5
        * (fragments.iter().map(|f| f.mass.ln()).sum::<f64>() - mass_sum.ln());
    let log_symmetry = -identical_permutations(members);
    let nf = n as f64;
    let log_static_weight = log_symmetry
        + log_degeneracy
        + (nf - 1.0) * log_volume_factor
        + log_mass_factor
        + 1.5 * (nf - 1.0) * (2.0 * PI).ln()
        - ln_gamma_half_integer(1.5 * (nf - 1.0));

    FragmentSplit {
        members: members.to_vec(),
        mass_sum,
        coulomb_barrier,
        log_static_weight,
    }
}

fn coulomb_term(z: i32, a: i32) -> f64 {
    (z * z) as f64 / (a as f64).cbrt()
}

/// `ln(prod n_j!)` over groups of identical members (members are sorted).
fn identical_permutations(members: &[usize]) -> f64 {
    let mut total = 0.0;
    let mut run = 1;
    for pair in members.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            total += (run as f64).ln();
        } else {
            run = 1;
        }
    }
    total
}

/// `ln Gamma(x)` for positive multiples of one half.
fn ln_gamma_half_integer(x: f64) -> f64 {
    let integer = (x - x.floor()).abs() < 1e-9;
    // start from Gamma(1) = 1 or Gamma(1/2) = sqrt(pi)
    let (mut value, mut t) = if integer { (0.0, 1.0) } else { (0.5 * PI.ln(), 0.5) };
    while t < x - 1e-9 {
        value += f64::ln(t);
        t += 1.0;
    }
    value
}
