use crate::lorentz::LorentzVector;
use std::fmt;

/// An excited nucleus (or light particle) in flight through the cascade.
///
/// Gammas are `A = 0, Z = 0`, electrons `A = 0, Z = -1` and pions carry
/// `A = -1`. The four-momentum is the total energy including the excitation,
/// so for a nucleus `momentum.mag() == ground_state_mass + excitation_energy`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub a: i32,
    pub z: i32,
    /// Excitation energy above the ground state in MeV, never negative
    pub excitation_energy: f64,
    pub momentum: LorentzVector,
    /// Creation time in ns
    pub creation_time: f64,
    /// Index disambiguating near-degenerate excited levels
    pub floating_level: i32,
}

impl Fragment {
    pub fn new(a: i32, z: i32, excitation_energy: f64, momentum: LorentzVector) -> Self {
        Fragment {
            a,
            z,
            excitation_energy: excitation_energy.max(0.0),
            momentum,
            creation_time: 0.0,
            floating_level: 0,
        }
    }

    /// Fragment whose excitation is whatever its invariant mass carries above the ground state.
    pub fn from_momentum(a: i32, z: i32, momentum: LorentzVector, ground_state_mass: f64) -> Self {
        Self::new(a, z, momentum.mag() - ground_state_mass, momentum)
    }

    /// Fragment at rest with the given excitation.
    pub fn at_rest(a: i32, z: i32, ground_state_mass: f64, excitation_energy: f64) -> Self {
        let excitation_energy = excitation_energy.max(0.0);
        Self::new(
            a,
            z,
            excitation_energy,
            LorentzVector::at_rest(ground_state_mass + excitation_energy),
        )
    }

    /// Photon carrying the given four-momentum.
    pub fn gamma(momentum: LorentzVector) -> Self {
        Self::new(0, 0, 0.0, momentum)
    }

    pub fn with_creation_time(mut self, creation_time: f64) -> Self {
        self.creation_time = creation_time;
        self
    }

    pub fn total_energy(&self) -> f64 {
        self.momentum.energy
    }

    /// Invariant mass, ground state plus excitation.
    pub fn mass(&self) -> f64 {
        self.momentum.mag()
    }

    pub fn ground_state_mass(&self) -> f64 {
        self.mass() - self.excitation_energy
    }

    pub fn neutron_number(&self) -> i32 {
        self.a - self.z
    }

    /// Replace the kinematic state after an emission step.
    pub fn set_state(&mut self, momentum: LorentzVector, excitation_energy: f64) {
        self.momentum = momentum;
        self.excitation_energy = excitation_energy.max(0.0);
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fragment(A={}, Z={}, U={:.6} MeV, P={}, t={} ns, level={})",
            self.a,
            self.z,
            self.excitation_energy,
            self.momentum,
            self.creation_time,
            self.floating_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_construction() {
        let f = Fragment::at_rest(12, 6, 11174.86, 50.0);
        assert_eq!(f.a, 12);
        assert_eq!(f.z, 6);
        assert_eq!(f.neutron_number(), 6);
        assert_eq!(f.excitation_energy, 50.0);
        assert!((f.mass() - 11224.86).abs() < 1e-9);
        assert!((f.ground_state_mass() - 11174.86).abs() < 1e-9);
        assert_eq!(f.creation_time, 0.0);
    }

    #[test]
    fn test_excitation_from_momentum() {
        let momentum = LorentzVector::at_rest(3730.0);
        let f = Fragment::from_momentum(4, 2, momentum, 3727.3794);
        assert!((f.excitation_energy - 2.6206).abs() < 1e-9);
    }

    #[test]
    fn test_negative_excitation_is_clamped() {
        let f = Fragment::from_momentum(4, 2, LorentzVector::at_rest(3727.0), 3727.3794);
        assert_eq!(f.excitation_energy, 0.0);
    }
}
