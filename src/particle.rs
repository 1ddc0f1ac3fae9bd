use crate::data::{
    element_symbol, ALPHA_MASS, CHARGED_PION_MASS, DEUTERON_MASS, ELECTRON_MASS, HELIUM3_MASS,
    NEUTRAL_PION_MASS, NEUTRON_MASS, PROTON_MASS, TRITON_MASS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved identity of an outgoing particle.
///
/// Light particles that are not well described as generic ions have their own
/// variants; everything else is an `Ion` carrying its rest mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParticleDefinition {
    #[serde(rename = "gamma")]
    Gamma,
    #[serde(rename = "e-")]
    Electron,
    #[serde(rename = "pi+")]
    PionPlus,
    #[serde(rename = "pi-")]
    PionMinus,
    #[serde(rename = "pi0")]
    PionZero,
    #[serde(rename = "neutron")]
    Neutron,
    #[serde(rename = "proton")]
    Proton,
    #[serde(rename = "deuteron")]
    Deuteron,
    #[serde(rename = "triton")]
    Triton,
    #[serde(rename = "He3")]
    Helium3,
    #[serde(rename = "alpha")]
    Alpha,
    Ion {
        z: i32,
        a: i32,
        /// Excitation energy above the ground state in MeV
        excitation_energy: f64,
        floating_level: i32,
        /// Rest mass in MeV, ground state plus excitation
        mass: f64,
    },
}

impl ParticleDefinition {
    /// Fixed identity for the `(A, Z)` pairs that are not generic ions.
    ///
    /// Negative mass numbers encode pions, `(0, -1)` the electron and `(0, 0)` the photon.
    pub fn special(a: i32, z: i32) -> Option<Self> {
        match (a, z) {
            (0, 0) => Some(Self::Gamma),
            (0, -1) => Some(Self::Electron),
            (-1, 1) => Some(Self::PionPlus),
            (-1, -1) => Some(Self::PionMinus),
            (-1, 0) => Some(Self::PionZero),
            (1, 0) => Some(Self::Neutron),
            (1, 1) => Some(Self::Proton),
            (2, 1) => Some(Self::Deuteron),
            (3, 1) => Some(Self::Triton),
            (3, 2) => Some(Self::Helium3),
            (4, 2) => Some(Self::Alpha),
            _ => None,
        }
    }

    pub fn pdg_mass(&self) -> f64 {
        match self {
            Self::Gamma => 0.0,
            Self::Electron => ELECTRON_MASS,
            Self::PionPlus | Self::PionMinus => CHARGED_PION_MASS,
            Self::PionZero => NEUTRAL_PION_MASS,
            Self::Neutron => NEUTRON_MASS,
            Self::Proton => PROTON_MASS,
            Self::Deuteron => DEUTERON_MASS,
            Self::Triton => TRITON_MASS,
            Self::Helium3 => HELIUM3_MASS,
            Self::Alpha => ALPHA_MASS,
            Self::Ion { mass, .. } => *mass,
        }
    }

    /// Baryon number; zero for leptons, photons and pions.
    pub fn atomic_mass(&self) -> i32 {
        match self {
            Self::Gamma | Self::Electron | Self::PionPlus | Self::PionMinus | Self::PionZero => 0,
            Self::Neutron | Self::Proton => 1,
            Self::Deuteron => 2,
            Self::Triton | Self::Helium3 => 3,
            Self::Alpha => 4,
            Self::Ion { a, .. } => *a,
        }
    }

    /// Charge in units of the elementary charge.
    pub fn atomic_number(&self) -> i32 {
        match self {
            Self::Gamma | Self::Neutron | Self::PionZero => 0,
            Self::Electron | Self::PionMinus => -1,
            Self::PionPlus | Self::Proton | Self::Deuteron | Self::Triton => 1,
            Self::Helium3 | Self::Alpha => 2,
            Self::Ion { z, .. } => *z,
        }
    }

    pub fn excitation_energy(&self) -> f64 {
        match self {
            Self::Ion {
                excitation_energy, ..
            } => *excitation_energy,
            _ => 0.0,
        }
    }

    pub fn is_ion(&self) -> bool {
        matches!(self, Self::Ion { .. })
    }

    pub fn name(&self) -> String {
        match self {
            Self::Gamma => "gamma".to_string(),
            Self::Electron => "e-".to_string(),
            Self::PionPlus => "pi+".to_string(),
            Self::PionMinus => "pi-".to_string(),
            Self::PionZero => "pi0".to_string(),
            Self::Neutron => "neutron".to_string(),
            Self::Proton => "proton".to_string(),
            Self::Deuteron => "deuteron".to_string(),
            Self::Triton => "triton".to_string(),
            Self::Helium3 => "He3".to_string(),
            Self::Alpha => "alpha".to_string(),
            Self::Ion {
                z,
                a,
                excitation_energy,
                ..
            } => {
                let symbol = element_symbol(*z)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Z{}_", z));
                if *excitation_energy > 0.0 {
                    // keV, as ion tables print isomers
                    format!("{}{}[{:.3}]", symbol, a, excitation_energy * 1000.0)
                } else {
                    format!("{}{}", symbol, a)
                }
            }
        }
    }
}

impl fmt::Display for ParticleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
