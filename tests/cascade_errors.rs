// Integration tests for cascade termination, gate gaps and result conversion

use deexcitation::{
    BreakUpChannel, DeexcitationError, EmissionChannel, ExcitationHandler, Fragment, LorentzVector,
    NuclearData, NuclideTable, ParticleDefinition, Stage, EVAPORATION_ITERATION_THRESHOLD,
};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

fn table() -> Arc<dyn NuclearData> {
    Arc::new(NuclideTable::new())
}

fn never(_: &Fragment, _: &mut dyn RngCore) -> bool {
    false
}

fn panicking_gate(_: &Fragment, _: &mut dyn RngCore) -> bool {
    panic!("gate evaluated on a stable fragment")
}

/// Emits one photon per call and leaves the fragment untouched.
struct StuckEvaporation {
    calls: Rc<Cell<usize>>,
}

impl EmissionChannel for StuckEvaporation {
    fn emit(&mut self, _fragment: &mut Fragment, _rng: &mut dyn RngCore) -> Vec<Fragment> {
        self.calls.set(self.calls.get() + 1);
        vec![Fragment::gamma(LorentzVector::default())]
    }
}

/// Never emits anything.
struct NoEmission;

impl EmissionChannel for NoEmission {
    fn emit(&mut self, _fragment: &mut Fragment, _rng: &mut dyn RngCore) -> Vec<Fragment> {
        Vec::new()
    }
}

struct NoBreakUp;

impl BreakUpChannel for NoBreakUp {
    fn break_it_up(&mut self, _fragment: &Fragment, _rng: &mut dyn RngCore) -> Vec<Fragment> {
        Vec::new()
    }
}

struct PanickingBreakUp;

impl BreakUpChannel for PanickingBreakUp {
    fn break_it_up(&mut self, _fragment: &Fragment, _rng: &mut dyn RngCore) -> Vec<Fragment> {
        panic!("break-up applied to a stable fragment")
    }
}

struct PanickingEmission;

impl EmissionChannel for PanickingEmission {
    fn emit(&mut self, _fragment: &mut Fragment, _rng: &mut dyn RngCore) -> Vec<Fragment> {
        panic!("emission applied to a stable fragment")
    }
}

/// Registry that only resolves ground-state ions.
struct GroundStateRegistry(NuclideTable);

impl NuclearData for GroundStateRegistry {
    fn isotope_abundance(&self, z: i32, a: i32) -> f64 {
        self.0.isotope_abundance(z, a)
    }

    fn nuclear_mass(&self, z: i32, a: i32) -> f64 {
        self.0.nuclear_mass(z, a)
    }

    fn resolve_ion(&self, z: i32, a: i32, excitation: f64, level: i32) -> Option<ParticleDefinition> {
        if excitation > 0.0 || level != 0 {
            return None;
        }
        self.0.resolve_ion(z, a, 0.0, 0)
    }
}

#[test]
fn test_divergence_at_iteration_ceiling() {
    let data = table();
    let mut handler = ExcitationHandler::new(Arc::clone(&data));
    let calls = Rc::new(Cell::new(0));
    handler.set_evaporation(StuckEvaporation { calls: Rc::clone(&calls) });
    handler.set_fermi_condition(never);

    let iron = Fragment::at_rest(56, 26, data.nuclear_mass(26, 56), 10.0);
    let mut rng = StdRng::seed_from_u64(1);
    match handler.break_it_up(&iron, &mut rng) {
        Err(DeexcitationError::DivergentCascade { iterations, initial, current }) => {
            assert_eq!(iterations, EVAPORATION_ITERATION_THRESHOLD);
            assert_eq!(*initial, iron);
            assert_eq!((current.a, current.z), (56, 26));
        }
        other => panic!("expected divergence, got {:?}", other),
    }
    assert_eq!(calls.get(), EVAPORATION_ITERATION_THRESHOLD);
}

#[test]
fn test_divergence_message_names_both_fragments() {
    let data = table();
    let mut handler = ExcitationHandler::new(Arc::clone(&data));
    handler.set_evaporation(StuckEvaporation { calls: Rc::new(Cell::new(0)) });
    let iron = Fragment::at_rest(56, 26, data.nuclear_mass(26, 56), 10.0);
    let err = handler.break_it_up(&iron, &mut StdRng::seed_from_u64(2)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("infinite loop"));
    assert!(message.contains("initial fragment"));
    assert!(message.contains("current fragment"));
}

#[test]
fn test_gate_gap_at_evaporation_stage() {
    let data = table();
    let mut handler = ExcitationHandler::new(Arc::clone(&data));
    handler.set_fermi_condition(never);
    handler.set_evaporation_condition(never);

    let mut rng = StdRng::seed_from_u64(3);
    for (a, z) in [(12, 6), (56, 26), (208, 82)] {
        let fragment = Fragment::at_rest(a, z, data.nuclear_mass(z, a), 5.0);
        match handler.break_it_up(&fragment, &mut rng) {
            Err(DeexcitationError::NoApplicableChannel { stage, fragment: current }) => {
                assert_eq!(stage, Stage::Evaporation);
                assert_eq!((current.a, current.z), (a, z));
            }
            other => panic!("expected a gate gap for A={}, got {:?}", a, other),
        }
    }
}

#[test]
fn test_gate_gap_at_photon_stage() {
    let data = table();
    let mut handler = ExcitationHandler::new(Arc::clone(&data));
    handler.set_fermi_break_up(NoBreakUp);
    handler.set_photon_evaporation_condition(never);

    let carbon = Fragment::at_rest(12, 6, data.nuclear_mass(6, 12), 20.0);
    let err = handler.break_it_up(&carbon, &mut StdRng::seed_from_u64(4)).unwrap_err();
    assert!(matches!(
        err,
        DeexcitationError::NoApplicableChannel { stage: Stage::PhotonEvaporation, .. }
    ));
}

#[test]
fn test_stable_fragments_skip_every_stage() {
    let data = table();
    let mut handler = ExcitationHandler::new(Arc::clone(&data));
    handler.set_multi_fragmentation(PanickingBreakUp);
    handler.set_fermi_break_up(PanickingBreakUp);
    handler.set_evaporation(PanickingEmission);
    handler.set_photon_evaporation(PanickingEmission);
    handler.set_multi_fragmentation_condition(panicking_gate);
    handler.set_fermi_condition(panicking_gate);
    handler.set_evaporation_condition(panicking_gate);
    handler.set_photon_evaporation_condition(panicking_gate);

    let neutron_momentum = LorentzVector::on_shell(Vector3::new(0.0, 0.0, 50.0), data.nuclear_mass(0, 1));
    let cases = [
        (Fragment::new(1, 0, 0.0, neutron_momentum), "neutron"),
        (Fragment::at_rest(1, 1, data.nuclear_mass(1, 1), 2.0), "proton"),
        (Fragment::gamma(LorentzVector::from_components(1.0, 0.0, 0.0, 1.0)), "gamma"),
        (Fragment::at_rest(56, 26, data.nuclear_mass(26, 56), 0.0), "Fe56"),
        (Fragment::at_rest(208, 82, data.nuclear_mass(82, 208), 0.0), "Pb208"),
    ];

    let mut rng = StdRng::seed_from_u64(5);
    for (fragment, name) in cases {
        let products = handler.break_it_up(&fragment, &mut rng).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].definition().name(), name);
        assert_eq!(products[0].total_energy(), fragment.total_energy());
    }
}

#[test]
fn test_conversion_falls_back_to_ground_state() {
    let data: Arc<dyn NuclearData> = Arc::new(GroundStateRegistry(NuclideTable::new()));
    let mut handler = ExcitationHandler::new(Arc::clone(&data));
    handler.set_evaporation(NoEmission);

    let ground = data.nuclear_mass(26, 56);
    let momentum = LorentzVector::on_shell(Vector3::new(120.0, 0.0, 0.0), ground + 10.0);
    let iron = Fragment::new(56, 26, 10.0, momentum);

    let products = handler.break_it_up(&iron, &mut StdRng::seed_from_u64(6)).unwrap();
    assert_eq!(products.len(), 1);
    let product = &products[0];
    assert_eq!(product.definition().name(), "Fe56");
    assert_eq!(product.definition().excitation_energy(), 0.0);
    assert_eq!(product.total_energy(), momentum.energy);
    let p = product.momentum();
    assert!(p.x > 0.0 && p.y == 0.0 && p.z == 0.0);
    let invariant = (product.total_energy().powi(2) - p.norm_squared()).sqrt();
    assert!((invariant - ground).abs() < 1e-6);
    assert!(product.total_energy() >= product.definition().pdg_mass());
}
