// Decay kinematics shared by the break-up and evaporation channels
//
// Every decay here is built from two-body decays in the parent rest frame
// boosted back to the lab, so energy and momentum are conserved to rounding
// for any accepted configuration.

use crate::lorentz::LorentzVector;
use crate::random::isotropic_direction;
use rand::Rng;

/// Attempts of the phase-space accept/reject loop before taking the last configuration.
const MAX_PHASE_SPACE_ATTEMPTS: usize = 1000;
/// Relative slack allowed when the parent mass equals the daughter threshold.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// Momentum of either daughter in the rest frame of a parent of mass `m`
/// decaying into masses `m1` and `m2`. Zero below threshold.
pub fn two_body_momentum(m: f64, m1: f64, m2: f64) -> f64 {
    let x = (m * m - (m1 + m2).powi(2)) * (m * m - (m1 - m2).powi(2));
    if x <= 0.0 || m <= 0.0 {
        0.0
    } else {
        x.sqrt() / (2.0 * m)
    }
}

/// Isotropic two-body decay of `parent` into bodies of mass `m1` and `m2`.
///
/// Returns `None` when the parent is lighter than `m1 + m2`.
pub fn two_body_decay<R: Rng + ?Sized>(
    parent: &LorentzVector,
    m1: f64,
    m2: f64,
    rng: &mut R,
) -> Option<(LorentzVector, LorentzVector)> {
    let mass = parent.mag();
    if mass < (m1 + m2) * (1.0 - THRESHOLD_TOLERANCE) {
        return None;
    }
    let p = two_body_momentum(mass, m1, m2);
    let direction = isotropic_direction(rng);
    let first = LorentzVector::on_shell(direction * p, m1);
    let second = LorentzVector::on_shell(-direction * p, m2);

    let beta = parent.boost_vector();
    let mut first = first.boost(&beta);
    let mut second = second.boost(&beta);

    // put rounding residue on the heavier body
    let residue = *parent - (first + second);
    if m1 >= m2 {
        first += residue;
    } else {
        second += residue;
    }
    Some((first, second))
}

/// N-body phase-space decay of `parent` into bodies with the given `masses`.
///
/// Intermediate invariant masses are drawn from sorted uniforms and weighted
/// by the product of the two-body momenta. Returns `None` below threshold.
pub fn phase_space_decay<R: Rng + ?Sized>(
    parent: &LorentzVector,
    masses: &[f64],
    rng: &mut R,
) -> Option<Vec<LorentzVector>> {
    match masses.len() {
        0 => return None,
        1 => return Some(vec![*parent]),
        2 => {
            let (first, second) = two_body_decay(parent, masses[0], masses[1], rng)?;
            return Some(vec![first, second]);
        }
        _ => {}
    }

    let total_mass = parent.mag();
    let mass_sum: f64 = masses.iter().sum();
    let kinetic = total_mass - mass_sum;
    if kinetic < -THRESHOLD_TOLERANCE * mass_sum {
        return None;
    }
    let kinetic = kinetic.max(0.0);

    let n = masses.len();
    let max_weight = maximum_weight(masses, kinetic);
    let mut invariant = vec![0.0; n];
    for attempt in 0..MAX_PHASE_SPACE_ATTEMPTS {
        sample_invariant_masses(masses, kinetic, total_mass, &mut invariant, rng);
        let weight = phase_space_weight(masses, &invariant);
        if max_weight <= 0.0 || rng.gen::<f64>() * max_weight <= weight {
            break;
        }
        if attempt + 1 == MAX_PHASE_SPACE_ATTEMPTS {
            tracing::warn!(bodies = n, kinetic, "phase-space sampling exhausted, keeping last configuration");
        }
    }

    // peel one body off the subsystem at a time, heaviest index first
    let mut products = vec![LorentzVector::default(); n];
    let mut subsystem = *parent;
    for k in (1..n).rev() {
        let (rest, body) = two_body_decay(&subsystem, invariant[k - 1], masses[k], rng)?;
        products[k] = body;
        subsystem = rest;
    }
    products[0] = subsystem;
    Some(products)
}

/// Invariant masses `M_1..M_n` of the subsystems made of the first k bodies.
fn sample_invariant_masses<R: Rng + ?Sized>(
    masses: &[f64],
    kinetic: f64,
    total_mass: f64,
    invariant: &mut [f64],
    rng: &mut R,
) {
    let n = masses.len();
    let mut uniforms: Vec<f64> = (0..n - 2).map(|_| rng.gen::<f64>()).collect();
    uniforms.sort_by(|a, b| a.total_cmp(b));

    let mut partial = 0.0;
    for k in 0..n {
        partial += masses[k];
        invariant[k] = match k {
            0 => masses[0],
            k if k == n - 1 => total_mass,
            k => partial + uniforms[k - 1] * kinetic,
        };
    }
}

fn phase_space_weight(masses: &[f64], invariant: &[f64]) -> f64 {
    (1..masses.len())
        .map(|k| two_body_momentum(invariant[k], invariant[k - 1], masses[k]))
        .product()
}

/// Upper bound of [`phase_space_weight`] for the given masses and kinetic energy.
fn maximum_weight(masses: &[f64], kinetic: f64) -> f64 {
    let mut upper = kinetic + masses[0];
    let mut lower = 0.0;
    let mut weight = 1.0;
    for k in 1..masses.len() {
        lower += masses[k - 1];
        upper += masses[k];
        weight *= two_body_momentum(upper, lower, masses[k]);
    }
    weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_conserved(parent: &LorentzVector, products: &[LorentzVector]) {
        let total: LorentzVector = products.iter().copied().sum();
        assert!((total.energy - parent.energy).abs() < 1e-6, "energy {} vs {}", total.energy, parent.energy);
        assert!((total.momentum - parent.momentum).norm() < 1e-6);
    }

    #[test]
    fn test_two_body_momentum_at_threshold() {
        assert_eq!(two_body_momentum(10.0, 5.0, 5.0), 0.0);
        assert!(two_body_momentum(12.0, 5.0, 5.0) > 0.0);
    }

    #[test]
    fn test_two_body_decay_conserves_four_momentum() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = LorentzVector::on_shell(Vector3::new(30.0, 0.0, -10.0), 7460.0);
        let (a, b) = two_body_decay(&parent, 3727.3794, 3727.3794, &mut rng).unwrap();
        assert_conserved(&parent, &[a, b]);
        assert!((a.mag() - 3727.3794).abs() < 1e-4);
        assert!((b.mag() - 3727.3794).abs() < 1e-4);
    }

    #[test]
    fn test_two_body_decay_below_threshold() {
        let mut rng = StdRng::seed_from_u64(1);
        let parent = LorentzVector::at_rest(100.0);
        assert!(two_body_decay(&parent, 60.0, 50.0, &mut rng).is_none());
    }

    #[test]
    fn test_phase_space_decay_conserves_four_momentum() {
        let mut rng = StdRng::seed_from_u64(7);
        let masses = [939.565, 938.272, 3727.379, 1875.613];
        let parent = LorentzVector::on_shell(Vector3::new(0.0, 200.0, 0.0), masses.iter().sum::<f64>() + 40.0);
        for _ in 0..50 {
            let products = phase_space_decay(&parent, &masses, &mut rng).unwrap();
            assert_eq!(products.len(), masses.len());
            assert_conserved(&parent, &products);
            for (p, m) in products.iter().zip(masses.iter()) {
                assert!((p.mag() - m).abs() < 1e-3, "mass {} vs {}", p.mag(), m);
            }
        }
    }

    #[test]
    fn test_phase_space_decay_rejects_heavy_products() {
        let mut rng = StdRng::seed_from_u64(3);
        let parent = LorentzVector::at_rest(100.0);
        assert!(phase_space_decay(&parent, &[40.0, 40.0, 40.0], &mut rng).is_none());
    }
}
