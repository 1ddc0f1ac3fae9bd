// Nuclear data provider
//
// The cascade, the stage gates and the channel strategies all read nuclear
// properties through the `NuclearData` trait. The provider must be fully
// populated before the handler is built and is only read afterwards.

use crate::data::{
    AMU_C2, ELECTRON_MASS, LIGHT_NUCLIDE_INDEX, LIGHT_NUCLIDE_MAX_A, NATURAL_ABUNDANCE,
    NEUTRON_MASS, PROTON_MASS,
};
use crate::error::ConfigError;
use crate::particle::ParticleDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only source of nuclear masses, abundances and ion identities.
pub trait NuclearData: Send + Sync {
    /// Natural abundance of `(Z, A)`; zero for nuclides that do not occur naturally.
    fn isotope_abundance(&self, z: i32, a: i32) -> f64;

    /// Ground-state nuclear mass in MeV; a value `<= 0` means unknown.
    fn nuclear_mass(&self, z: i32, a: i32) -> f64;

    /// Ion identity for `(Z, A)` at the given excitation.
    fn resolve_ion(
        &self,
        z: i32,
        a: i32,
        excitation_energy: f64,
        floating_level: i32,
    ) -> Option<ParticleDefinition> {
        let mass = self.nuclear_mass(z, a);
        if mass <= 0.0 {
            return None;
        }
        Some(ParticleDefinition::Ion {
            z,
            a,
            excitation_energy,
            floating_level,
            mass: mass + excitation_energy,
        })
    }

    fn ground_state_ion(&self, z: i32, a: i32) -> Option<ParticleDefinition> {
        self.resolve_ion(z, a, 0.0, 0)
    }

    fn is_known(&self, z: i32, a: i32) -> bool {
        self.nuclear_mass(z, a) > 0.0
    }
}

/// One entry of a nuclear mass override file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassRecord {
    pub z: i32,
    pub a: i32,
    /// Nuclear (not atomic) mass in MeV
    pub mass: f64,
}

/// Default provider: tabulated light masses, the liquid-drop formula above
/// A = 20, natural abundances, and optional per-nuclide mass overrides.
#[derive(Debug, Clone, Default)]
pub struct NuclideTable {
    overrides: HashMap<(i32, i32), f64>,
}

impl NuclideTable {
    pub fn new() -> Self {
        NuclideTable {
            overrides: HashMap::new(),
        }
    }

    /// Table with masses from a JSON file of [`MassRecord`]s layered on top of the defaults.
    pub fn with_mass_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::MassFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<MassRecord> =
            serde_json::from_str(&content).map_err(|source| ConfigError::MassFileParse {
                path: path.to_path_buf(),
                source,
            })?;
        let mut table = Self::new();
        for record in records {
            table.insert_mass(record.z, record.a, record.mass);
        }
        tracing::debug!(path = %path.display(), entries = table.overrides.len(), "loaded nuclear masses");
        Ok(table)
    }

    pub fn insert_mass(&mut self, z: i32, a: i32, mass: f64) {
        self.overrides.insert((z, a), mass);
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl NuclearData for NuclideTable {
    fn isotope_abundance(&self, z: i32, a: i32) -> f64 {
        NATURAL_ABUNDANCE.get(&(z, a)).copied().unwrap_or(0.0)
    }

    fn nuclear_mass(&self, z: i32, a: i32) -> f64 {
        if let Some(&mass) = self.overrides.get(&(z, a)) {
            return mass;
        }
        if a < 1 || z < 0 || z > a {
            return 0.0;
        }
        if let Some(nuclide) = LIGHT_NUCLIDE_INDEX.get(&(z, a)) {
            return nuclide.a as f64 * AMU_C2 + nuclide.mass_excess - nuclide.z as f64 * ELECTRON_MASS;
        }
        if a <= LIGHT_NUCLIDE_MAX_A {
            return 0.0;
        }
        liquid_drop_mass(z, a)
    }
}

/// Bethe-Weizsaecker nuclear mass in MeV.
pub fn liquid_drop_mass(z: i32, a: i32) -> f64 {
    const VOLUME: f64 = 15.75;
    const SURFACE: f64 = 17.8;
    const COULOMB: f64 = 0.711;
    const ASYMMETRY: f64 = 23.7;
    const PAIRING: f64 = 11.18;

    let af = a as f64;
    let zf = z as f64;
    let n = a - z;
    let a13 = af.cbrt();
    let pairing = match (z % 2, n % 2) {
        (0, 0) => PAIRING / af.sqrt(),
        (1, 1) => -PAIRING / af.sqrt(),
        _ => 0.0,
    };
    let binding = VOLUME * af - SURFACE * a13 * a13 - COULOMB * zf * (zf - 1.0) / a13
        - ASYMMETRY * (af - 2.0 * zf).powi(2) / af
        + pairing;
    zf * PROTON_MASS + n as f64 * NEUTRON_MASS - binding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ALPHA_MASS, DEUTERON_MASS};

    #[test]
    fn test_light_masses_match_reference_particles() {
        let table = NuclideTable::new();
        assert!((table.nuclear_mass(0, 1) - NEUTRON_MASS).abs() < 1e-3);
        assert!((table.nuclear_mass(1, 1) - PROTON_MASS).abs() < 1e-3);
        assert!((table.nuclear_mass(1, 2) - DEUTERON_MASS).abs() < 1e-3);
        assert!((table.nuclear_mass(2, 4) - ALPHA_MASS).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_masses() {
        let table = NuclideTable::new();
        assert!(table.nuclear_mass(0, 2) <= 0.0);
        assert!(table.nuclear_mass(5, 4) <= 0.0);
        assert!(table.nuclear_mass(-1, 10) <= 0.0);
        assert!(!table.is_known(0, 0));
    }

    #[test]
    fn test_liquid_drop_close_to_measured_iron() {
        // Fe56 nuclear mass is 52089.8 MeV
        let mass = NuclideTable::new().nuclear_mass(26, 56);
        assert!((mass - 52089.8).abs() < 15.0, "Fe56 mass {}", mass);
    }

    #[test]
    fn test_abundance_lookup() {
        let table = NuclideTable::new();
        assert!(table.isotope_abundance(6, 12) > 0.0);
        assert_eq!(table.isotope_abundance(6, 11), 0.0);
    }

    #[test]
    fn test_resolve_ion_adds_excitation() {
        let table = NuclideTable::new();
        let ground = table.ground_state_ion(6, 12).unwrap();
        let excited = table.resolve_ion(6, 12, 4.439, 0).unwrap();
        assert!((excited.pdg_mass() - ground.pdg_mass() - 4.439).abs() < 1e-9);
        assert!(table.resolve_ion(0, 5, 0.0, 0).is_none());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut table = NuclideTable::new();
        table.insert_mass(6, 12, 11000.0);
        assert_eq!(table.nuclear_mass(6, 12), 11000.0);
        assert_eq!(table.override_count(), 1);
    }

    #[test]
    fn test_missing_mass_file_is_an_error() {
        let result = NuclideTable::with_mass_file("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::MassFileRead { .. })));
    }
}
