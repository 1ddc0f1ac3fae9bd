// Photon evaporation
//
// Excitation is carried off by a chain of photons. Each photon takes a random
// share of what is left, and once the nucleus is below the continuum bound
// the last photon takes it straight to the ground state.

use crate::channel::EmissionChannel;
use crate::fragment::Fragment;
use crate::kinematics::two_body_decay;
use rand::{Rng, RngCore};

#[derive(Debug, Clone, Copy)]
pub struct GammaCascade {
    /// Excitation (MeV) at or below which the nucleus counts as de-excited
    pub ground_state_threshold: f64,
    /// Below this excitation (MeV) a single photon takes the rest
    pub last_transition: f64,
    /// Smallest share of the excitation a photon takes above `last_transition`
    pub min_fraction: f64,
}

impl Default for GammaCascade {
    fn default() -> Self {
        GammaCascade {
            ground_state_threshold: 1e-5,
            last_transition: 1.0,
            min_fraction: 0.2,
        }
    }
}

impl GammaCascade {
    fn next_excitation<R: Rng + ?Sized>(&self, excitation: f64, rng: &mut R) -> f64 {
        if excitation <= self.last_transition {
            return 0.0;
        }
        let fraction = rng.gen_range(self.min_fraction..1.0);
        excitation * (1.0 - fraction)
    }
}

impl EmissionChannel for GammaCascade {
    fn emit(&mut self, fragment: &mut Fragment, rng: &mut dyn RngCore) -> Vec<Fragment> {
        let mut photons = Vec::new();
        let ground_mass = fragment.ground_state_mass();
        while fragment.excitation_energy > self.ground_state_threshold {
            let excitation = self.next_excitation(fragment.excitation_energy, rng);
            let Some((gamma, residual)) =
                two_body_decay(&fragment.momentum, 0.0, ground_mass + excitation, rng)
            else {
                break;
            };
            photons.push(Fragment::gamma(gamma).with_creation_time(fragment.creation_time));
            fragment.set_state(residual, excitation);
        }
        photons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorentz::LorentzVector;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cascade_reaches_ground_state() {
        let mut rng = StdRng::seed_from_u64(7);
        let ground = 11174.86;
        let momentum = LorentzVector::on_shell(Vector3::new(10.0, -20.0, 5.0), ground + 15.0);
        let mut nucleus = Fragment::new(12, 6, 15.0, momentum);
        let photons = GammaCascade::default().emit(&mut nucleus, &mut rng);

        assert!(!photons.is_empty());
        assert_eq!(nucleus.excitation_energy, 0.0);
        assert!((nucleus.mass() - ground).abs() < 1e-6);
        assert!(photons.iter().all(|g| g.a == 0 && g.z == 0 && g.mass().abs() < 1e-3));

        let total: LorentzVector = photons.iter().map(|g| g.momentum).sum::<LorentzVector>() + nucleus.momentum;
        assert!((total.energy - momentum.energy).abs() < 1e-6);
        assert!((total.momentum - momentum.momentum).norm() < 1e-6);
    }

    #[test]
    fn test_low_excitation_emits_single_photon() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut nucleus = Fragment::at_rest(16, 8, 14895.08, 0.5);
        let photons = GammaCascade::default().emit(&mut nucleus, &mut rng);
        assert_eq!(photons.len(), 1);
        assert!((photons[0].total_energy() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_ground_state_emits_nothing() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut nucleus = Fragment::at_rest(16, 8, 14895.08, 0.0);
        let before = nucleus.clone();
        assert!(GammaCascade::default().emit(&mut nucleus, &mut rng).is_empty());
        assert_eq!(nucleus, before);
    }
}
