use crate::particle::ParticleDefinition;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A final particle of the cascade with a resolved identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionProduct {
    definition: ParticleDefinition,
    momentum: Vector3<f64>,
    total_energy: f64,
    formation_time: f64,
}

impl ReactionProduct {
    pub fn new(
        definition: ParticleDefinition,
        momentum: Vector3<f64>,
        total_energy: f64,
        formation_time: f64,
    ) -> Self {
        ReactionProduct {
            definition,
            momentum,
            total_energy,
            formation_time,
        }
    }

    pub fn definition(&self) -> &ParticleDefinition {
        &self.definition
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.momentum
    }

    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    /// Formation time in ns.
    pub fn formation_time(&self) -> f64 {
        self.formation_time
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.total_energy - self.definition.pdg_mass()
    }
}
