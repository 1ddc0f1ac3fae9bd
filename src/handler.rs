// The de-excitation cascade
//
// An excited fragment is pushed through up to four stages: multifragmentation
// at entry, then Fermi break-up or evaporation for everything on the
// evaporation queue, then photon evaporation for the fragments Fermi break-up
// leaves on the photon queue. Stable fragments leave the cascade as soon as
// they appear, and the final list is converted into reaction products.

use crate::channel::{BreakUpChannel, EmissionChannel};
use crate::condition::{Always, Condition, FermiBreakUpCondition, MultiFragmentationCondition};
use crate::config::HandlerConfig;
use crate::converter::convert_results;
use crate::error::{ConfigError, DeexcitationError, Stage};
use crate::evaporation::StatisticalEvaporation;
use crate::fermi::FermiBreakUp;
use crate::fragment::Fragment;
use crate::multifragmentation::StatisticalMultifragmentation;
use crate::nuclear_data::NuclearData;
use crate::photon_evaporation::GammaCascade;
use crate::queue::FragmentQueue;
use crate::reaction_product::ReactionProduct;
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, error};

/// Fragments taken off the evaporation queue before the cascade is declared divergent.
pub const EVAPORATION_ITERATION_THRESHOLD: usize = 1000;
/// Excitation (MeV) below which a fragment is in its ground state, 10 eV.
pub const GROUND_STATE_THRESHOLD: f64 = 1e-5;

pub struct ExcitationHandler {
    data: Arc<dyn NuclearData>,

    multi_fragmentation: Box<dyn BreakUpChannel>,
    fermi_break_up: Box<dyn BreakUpChannel>,
    evaporation: Box<dyn EmissionChannel>,
    photon_evaporation: Box<dyn EmissionChannel>,

    multi_fragmentation_condition: Box<dyn Condition>,
    fermi_condition: Box<dyn Condition>,
    evaporation_condition: Box<dyn Condition>,
    photon_evaporation_condition: Box<dyn Condition>,

    ground_state_threshold: f64,
}

impl ExcitationHandler {
    /// Handler with the built-in channels and gates.
    pub fn new(data: Arc<dyn NuclearData>) -> Self {
        let fermi = FermiBreakUp::new(Arc::clone(&data));
        Self::with_fermi(data, fermi)
    }

    /// Handler whose provider and split cache come from `config`.
    pub fn from_config(config: &HandlerConfig) -> Result<Self, ConfigError> {
        let data = config.nuclear_data()?;
        let fermi = FermiBreakUp::with_cache(Arc::clone(&data), config.split_cache());
        debug!(cache = %config.cache_kind(), "assembled excitation handler");
        Ok(Self::with_fermi(data, fermi))
    }

    fn with_fermi(data: Arc<dyn NuclearData>, fermi: FermiBreakUp) -> Self {
        ExcitationHandler {
            multi_fragmentation: Box::new(StatisticalMultifragmentation::new(Arc::clone(&data))),
            fermi_break_up: Box::new(fermi),
            evaporation: Box::new(StatisticalEvaporation::new(Arc::clone(&data))),
            photon_evaporation: Box::new(GammaCascade::default()),
            multi_fragmentation_condition: Box::new(MultiFragmentationCondition::default()),
            fermi_condition: Box::new(FermiBreakUpCondition),
            evaporation_condition: Box::new(Always),
            photon_evaporation_condition: Box::new(Always),
            ground_state_threshold: GROUND_STATE_THRESHOLD,
            data,
        }
    }

    pub fn data(&self) -> &Arc<dyn NuclearData> {
        &self.data
    }

    pub fn set_multi_fragmentation(&mut self, model: impl BreakUpChannel + 'static) {
        self.multi_fragmentation = Box::new(model);
    }

    pub fn set_fermi_break_up(&mut self, model: impl BreakUpChannel + 'static) {
        self.fermi_break_up = Box::new(model);
    }

    pub fn set_evaporation(&mut self, model: impl EmissionChannel + 'static) {
        self.evaporation = Box::new(model);
    }

    pub fn set_photon_evaporation(&mut self, model: impl EmissionChannel + 'static) {
        self.photon_evaporation = Box::new(model);
    }

    pub fn set_multi_fragmentation_condition(&mut self, condition: impl Condition + 'static) {
        self.multi_fragmentation_condition = Box::new(condition);
    }

    pub fn set_fermi_condition(&mut self, condition: impl Condition + 'static) {
        self.fermi_condition = Box::new(condition);
    }

    pub fn set_evaporation_condition(&mut self, condition: impl Condition + 'static) {
        self.evaporation_condition = Box::new(condition);
    }

    pub fn set_photon_evaporation_condition(&mut self, condition: impl Condition + 'static) {
        self.photon_evaporation_condition = Box::new(condition);
    }

    pub fn is_ground_state(&self, fragment: &Fragment) -> bool {
        fragment.excitation_energy < self.ground_state_threshold
    }

    /// Nucleons and lighter particles, and naturally occurring nuclides in their ground state.
    pub fn is_stable(&self, fragment: &Fragment) -> bool {
        fragment.a <= 1
            || (self.is_ground_state(fragment)
                && self.data.isotope_abundance(fragment.z, fragment.a) > 0.0)
    }

    /// Run the full cascade on `fragment` and return the final products.
    pub fn break_it_up<R: RngCore>(
        &mut self,
        fragment: &Fragment,
        rng: &mut R,
    ) -> Result<Vec<ReactionProduct>, DeexcitationError> {
        let rng: &mut dyn RngCore = rng;
        let mut results = Vec::new();

        if self.is_stable(fragment) {
            results.push(fragment.clone());
            return convert_results(results, self.data.as_ref(), self.ground_state_threshold);
        }

        let mut evaporation_queue = FragmentQueue::new();
        let mut photon_queue = FragmentQueue::new();

        if self.multi_fragmentation_condition.evaluate(fragment, rng) {
            self.apply_multi_fragmentation(fragment.clone(), &mut results, &mut evaporation_queue, rng);
        } else {
            evaporation_queue.push(fragment.clone());
        }

        let mut iterations = 0;
        while let Some(current) = evaporation_queue.pop() {
            if iterations == EVAPORATION_ITERATION_THRESHOLD {
                let released = evaporation_queue.release() + photon_queue.release() + results.len();
                error!(iterations, released, initial = %fragment, current = %current, "de-excitation cascade does not converge");
                return Err(DeexcitationError::DivergentCascade {
                    iterations,
                    initial: Box::new(fragment.clone()),
                    current: Box::new(current),
                });
            }
            iterations += 1;

            if self.fermi_condition.evaluate(&current, rng) {
                debug!(a = current.a, z = current.z, "Fermi break-up");
                self.apply_fermi_break_up(current, &mut results, &mut photon_queue, rng);
            } else if self.evaporation_condition.evaluate(&current, rng) {
                debug!(a = current.a, z = current.z, "evaporation");
                self.apply_evaporation(current, &mut results, &mut evaporation_queue, rng);
            } else {
                return Err(Self::no_channel(Stage::Evaporation, current, &mut evaporation_queue, &mut photon_queue));
            }
        }

        while let Some(current) = photon_queue.pop() {
            if self.photon_evaporation_condition.evaluate(&current, rng) {
                self.apply_photon_evaporation(current, &mut results, rng);
            } else {
                return Err(Self::no_channel(
                    Stage::PhotonEvaporation,
                    current,
                    &mut evaporation_queue,
                    &mut photon_queue,
                ));
            }
        }

        debug!(iterations, products = results.len(), "cascade finished");
        convert_results(results, self.data.as_ref(), self.ground_state_threshold)
    }

    fn no_channel(
        stage: Stage,
        fragment: Fragment,
        evaporation_queue: &mut FragmentQueue,
        photon_queue: &mut FragmentQueue,
    ) -> DeexcitationError {
        let released = evaporation_queue.release() + photon_queue.release();
        error!(%stage, %fragment, released, "no model was applied, check conditions");
        DeexcitationError::NoApplicableChannel {
            stage,
            fragment: Box::new(fragment),
        }
    }

    fn apply_multi_fragmentation(
        &mut self,
        fragment: Fragment,
        results: &mut Vec<Fragment>,
        next_stage: &mut FragmentQueue,
        rng: &mut dyn RngCore,
    ) {
        let products = self.multi_fragmentation.break_it_up(&fragment, rng);
        if products.len() <= 1 {
            next_stage.push(fragment);
            return;
        }
        debug!(fragments = products.len(), "multifragmentation");
        self.group_fragments(products, results, next_stage);
    }

    fn apply_fermi_break_up(
        &mut self,
        fragment: Fragment,
        results: &mut Vec<Fragment>,
        next_stage: &mut FragmentQueue,
        rng: &mut dyn RngCore,
    ) {
        let products = self.fermi_break_up.break_it_up(&fragment, rng);
        if products.len() <= 1 {
            next_stage.push(fragment);
            return;
        }
        self.group_fragments(products, results, next_stage);
    }

    fn apply_evaporation(
        &mut self,
        mut fragment: Fragment,
        results: &mut Vec<Fragment>,
        next_stage: &mut FragmentQueue,
        rng: &mut dyn RngCore,
    ) {
        let mut products = self.evaporation.emit(&mut fragment, rng);
        if products.is_empty() {
            results.push(fragment);
            return;
        }
        products.push(fragment);
        self.group_fragments(products, results, next_stage);
    }

    fn apply_photon_evaporation(
        &mut self,
        mut fragment: Fragment,
        results: &mut Vec<Fragment>,
        rng: &mut dyn RngCore,
    ) {
        if !self.is_ground_state(&fragment) {
            let photons = self.photon_evaporation.emit(&mut fragment, rng);
            results.extend(photons);
        }
        results.push(fragment);
    }

    fn group_fragments(
        &self,
        fragments: Vec<Fragment>,
        results: &mut Vec<Fragment>,
        next_stage: &mut FragmentQueue,
    ) {
        for fragment in fragments {
            if self.is_stable(&fragment) {
                results.push(fragment);
            } else {
                next_stage.push(fragment);
            }
        }
    }
}
