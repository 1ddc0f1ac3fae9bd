// Conversion of final fragments into reaction products
//
// Light particles get their fixed identities, everything else is resolved as
// an ion. A fragment whose excited state the registry does not know is
// emitted as the ground-state ion, with its momentum rescaled so that the
// product sits on the ion's mass shell.

use crate::error::DeexcitationError;
use crate::fragment::Fragment;
use crate::lorentz::LorentzVector;
use crate::nuclear_data::NuclearData;
use crate::particle::ParticleDefinition;
use crate::reaction_product::ReactionProduct;
use nalgebra::Vector3;

pub fn convert_results(
    results: Vec<Fragment>,
    data: &dyn NuclearData,
    ground_state_threshold: f64,
) -> Result<Vec<ReactionProduct>, DeexcitationError> {
    results
        .into_iter()
        .map(|fragment| convert_fragment(fragment, data, ground_state_threshold))
        .collect()
}

fn convert_fragment(
    fragment: Fragment,
    data: &dyn NuclearData,
    ground_state_threshold: f64,
) -> Result<ReactionProduct, DeexcitationError> {
    let (a, z) = (fragment.a, fragment.z);
    let mut momentum = fragment.momentum;

    let definition = match ParticleDefinition::special(a, z) {
        Some(definition) => definition,
        None => {
            let (excitation, level) = if fragment.excitation_energy < ground_state_threshold {
                (0.0, 0)
            } else {
                (fragment.excitation_energy, fragment.floating_level)
            };
            match data.resolve_ion(z, a, excitation, level) {
                Some(ion) => ion,
                None => {
                    let ion = data
                        .ground_state_ion(z, a)
                        .ok_or(DeexcitationError::IdentityResolution { z, a })?;
                    tracing::warn!(
                        z,
                        a,
                        excitation,
                        "excited ion not in registry, emitting ground state"
                    );
                    momentum = on_mass_shell(&momentum, ion.pdg_mass());
                    ion
                }
            }
        }
    };

    Ok(ReactionProduct::new(
        definition,
        momentum.momentum,
        momentum.energy,
        fragment.creation_time,
    ))
}

/// Keep the total energy and direction, fix the momentum magnitude to `mass`.
fn on_mass_shell(momentum: &LorentzVector, mass: f64) -> LorentzVector {
    let energy = momentum.energy;
    if energy <= mass {
        return LorentzVector::at_rest(mass);
    }
    let magnitude = ((energy - mass) * (energy + mass)).sqrt();
    let direction = momentum.momentum.try_normalize(0.0).unwrap_or_else(Vector3::zeros);
    LorentzVector::new(direction * magnitude, energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nuclear_data::NuclideTable;

    /// Registry that knows ground states only.
    struct GroundStatesOnly(NuclideTable);

    impl NuclearData for GroundStatesOnly {
        fn isotope_abundance(&self, z: i32, a: i32) -> f64 {
            self.0.isotope_abundance(z, a)
        }

        fn nuclear_mass(&self, z: i32, a: i32) -> f64 {
            self.0.nuclear_mass(z, a)
        }

        fn resolve_ion(&self, z: i32, a: i32, excitation: f64, level: i32) -> Option<ParticleDefinition> {
            if excitation > 0.0 {
                return None;
            }
            self.0.resolve_ion(z, a, excitation, level)
        }
    }

    #[test]
    fn test_special_particles() {
        let table = NuclideTable::new();
        let fragments = vec![
            Fragment::gamma(LorentzVector::from_components(0.0, 0.0, 1.0, 1.0)),
            Fragment::at_rest(1, 0, 939.565, 0.0),
            Fragment::at_rest(4, 2, 3727.379, 0.0),
            Fragment::new(-1, 1, 0.0, LorentzVector::at_rest(139.57)),
        ];
        let products = convert_results(fragments, &table, 1e-5).unwrap();
        let names: Vec<String> = products.iter().map(|p| p.definition().name()).collect();
        assert_eq!(names, vec!["gamma", "neutron", "alpha", "pi+"]);
    }

    #[test]
    fn test_excited_ion_keeps_excitation() {
        let table = NuclideTable::new();
        let mass = table.nuclear_mass(6, 12);
        let carbon = Fragment::at_rest(12, 6, mass, 4.439).with_creation_time(3.0);
        let products = convert_results(vec![carbon], &table, 1e-5).unwrap();
        assert_eq!(products[0].definition().excitation_energy(), 4.439);
        assert_eq!(products[0].formation_time(), 3.0);
        assert!((products[0].total_energy() - (mass + 4.439)).abs() < 1e-9);
    }

    #[test]
    fn test_ground_state_fallback_rescales_momentum() {
        let registry = GroundStatesOnly(NuclideTable::new());
        let ground = registry.nuclear_mass(6, 12);
        let momentum = LorentzVector::on_shell(Vector3::new(0.0, 300.0, 400.0), ground + 10.0);
        let carbon = Fragment::new(12, 6, 10.0, momentum);

        let products = convert_results(vec![carbon], &registry, 1e-5).unwrap();
        let product = &products[0];
        assert_eq!(product.definition().excitation_energy(), 0.0);
        assert_eq!(product.total_energy(), momentum.energy);
        let p = product.momentum();
        let invariant = (product.total_energy().powi(2) - p.norm_squared()).sqrt();
        assert!((invariant - ground).abs() < 1e-6);
        // direction is preserved
        assert!((p.normalize() - momentum.momentum.normalize()).norm() < 1e-12);
    }

    #[test]
    fn test_fallback_below_rest_mass_puts_product_at_rest() {
        let registry = GroundStatesOnly(NuclideTable::new());
        let ground = registry.nuclear_mass(6, 12);
        // an excited fragment whose energy ended up under the ground-state mass
        let mut carbon = Fragment::at_rest(12, 6, ground - 1.0, 0.5);
        carbon.momentum = LorentzVector::from_components(1.0, 0.0, 0.0, ground - 0.5);
        let products = convert_results(vec![carbon], &registry, 1e-5).unwrap();
        assert_eq!(products[0].momentum(), Vector3::zeros());
        assert_eq!(products[0].total_energy(), ground);
    }

    #[test]
    fn test_unknown_ground_state_is_an_error() {
        let table = NuclideTable::new();
        let fragment = Fragment::at_rest(2, 0, 1879.0, 0.0);
        match convert_results(vec![fragment], &table, 1e-5) {
            Err(DeexcitationError::IdentityResolution { z, a }) => assert_eq!((z, a), (0, 2)),
            other => panic!("expected identity resolution error, got {:?}", other),
        }
    }
}
