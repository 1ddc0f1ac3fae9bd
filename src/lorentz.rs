// Four-momentum arithmetic for the cascade
//
// Energies and momenta are in MeV (c = 1). The spatial part is a nalgebra
// vector so the rotation and boost code reads like the transport physics.

use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Energy-momentum four-vector `(p, E)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzVector {
    pub momentum: Vector3<f64>,
    pub energy: f64,
}

impl LorentzVector {
    pub fn new(momentum: Vector3<f64>, energy: f64) -> Self {
        Self { momentum, energy }
    }

    pub fn from_components(px: f64, py: f64, pz: f64, energy: f64) -> Self {
        Self::new(Vector3::new(px, py, pz), energy)
    }

    /// Four-vector of a body of the given mass at rest.
    pub fn at_rest(mass: f64) -> Self {
        Self::new(Vector3::zeros(), mass)
    }

    /// Four-vector of a body of the given mass moving with momentum `p`.
    pub fn on_shell(momentum: Vector3<f64>, mass: f64) -> Self {
        let energy = (momentum.norm_squared() + mass * mass).sqrt();
        Self::new(momentum, energy)
    }

    /// Invariant mass squared, `E^2 - |p|^2`.
    pub fn mag2(&self) -> f64 {
        self.energy * self.energy - self.momentum.norm_squared()
    }

    /// Invariant mass. Space-like vectors return the negated magnitude, as in CLHEP.
    pub fn mag(&self) -> f64 {
        let m2 = self.mag2();
        if m2 < 0.0 {
            -(-m2).sqrt()
        } else {
            m2.sqrt()
        }
    }

    /// Velocity of the frame in which this vector is at rest.
    pub fn boost_vector(&self) -> Vector3<f64> {
        if self.energy <= 0.0 {
            return Vector3::zeros();
        }
        self.momentum / self.energy
    }

    /// Lorentz boost by velocity `beta` (|beta| < 1).
    pub fn boost(&self, beta: &Vector3<f64>) -> Self {
        let b2 = beta.norm_squared();
        if b2 <= 0.0 {
            return *self;
        }
        let gamma = 1.0 / (1.0 - b2).sqrt();
        let bp = beta.dot(&self.momentum);
        let gamma2 = (gamma - 1.0) / b2;
        Self {
            momentum: self.momentum + (gamma2 * bp + gamma * self.energy) * beta,
            energy: gamma * (self.energy + bp),
        }
    }

    /// Kinetic energy for a body of invariant mass `mag()`.
    pub fn kinetic_energy(&self) -> f64 {
        self.energy - self.mag()
    }
}

impl Default for LorentzVector {
    fn default() -> Self {
        Self::at_rest(0.0)
    }
}

impl Add for LorentzVector {
    type Output = LorentzVector;

    fn add(self, rhs: LorentzVector) -> LorentzVector {
        LorentzVector::new(self.momentum + rhs.momentum, self.energy + rhs.energy)
    }
}

impl AddAssign for LorentzVector {
    fn add_assign(&mut self, rhs: LorentzVector) {
        self.momentum += rhs.momentum;
        self.energy += rhs.energy;
    }
}

impl Sub for LorentzVector {
    type Output = LorentzVector;

    fn sub(self, rhs: LorentzVector) -> LorentzVector {
        LorentzVector::new(self.momentum - rhs.momentum, self.energy - rhs.energy)
    }
}

impl std::iter::Sum for LorentzVector {
    fn sum<I: Iterator<Item = LorentzVector>>(iter: I) -> Self {
        iter.fold(LorentzVector::default(), |acc, v| acc + v)
    }
}

impl fmt::Display for LorentzVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, {:.6}; {:.6})",
            self.momentum.x, self.momentum.y, self.momentum.z, self.energy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_of_resting_body() {
        let v = LorentzVector::at_rest(938.0);
        assert_eq!(v.mag(), 938.0);
        assert_eq!(v.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_boost_to_rest_frame() {
        let v = LorentzVector::on_shell(Vector3::new(100.0, -50.0, 30.0), 1000.0);
        let beta = v.boost_vector();
        let rest = v.boost(&(-beta));
        assert!(rest.momentum.norm() < 1e-9, "residual momentum {}", rest.momentum.norm());
        assert!((rest.energy - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_boost_preserves_invariant_mass() {
        let v = LorentzVector::on_shell(Vector3::new(0.0, 0.0, 10.0), 5.0);
        let boosted = v.boost(&Vector3::new(0.3, 0.1, -0.4));
        assert!((boosted.mag() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_of_vectors() {
        let total: LorentzVector = vec![
            LorentzVector::from_components(1.0, 0.0, 0.0, 2.0),
            LorentzVector::from_components(-1.0, 0.0, 0.0, 2.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, LorentzVector::from_components(0.0, 0.0, 0.0, 4.0));
    }
}
