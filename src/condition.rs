// Stage gates of the cascade
//
// A gate decides whether a channel is tried on a fragment at a given stage.
// Any closure `Fn(&Fragment, &mut dyn RngCore) -> bool` is a gate, so
// configurations can replace the defaults without touching the cascade.

use crate::fermi::FermiBreakUp;
use crate::fragment::Fragment;
use rand::{Rng, RngCore};

pub trait Condition {
    fn evaluate(&self, fragment: &Fragment, rng: &mut dyn RngCore) -> bool;
}

impl<F> Condition for F
where
    F: Fn(&Fragment, &mut dyn RngCore) -> bool,
{
    fn evaluate(&self, fragment: &Fragment, rng: &mut dyn RngCore) -> bool {
        self(fragment, rng)
    }
}

/// Probabilistic onset of multifragmentation between 3 and 5 MeV per nucleon.
///
/// Nuclei lighter than the Fermi break-up bound never multifragment.
#[derive(Debug, Clone, Copy)]
pub struct MultiFragmentationCondition {
    pub max_a: i32,
    pub max_z: i32,
    /// Excitation per nucleon (MeV) below which multifragmentation never happens
    pub lower_bound: f64,
    /// Excitation per nucleon (MeV) above which it always happens
    pub upper_bound: f64,
}

impl Default for MultiFragmentationCondition {
    fn default() -> Self {
        MultiFragmentationCondition {
            max_a: 19,
            max_z: 9,
            lower_bound: 3.0,
            upper_bound: 5.0,
        }
    }
}

impl MultiFragmentationCondition {
    /// Probability of multifragmentation inside the transition region.
    pub fn transition_probability(&self, excitation_per_nucleon: f64) -> f64 {
        let scale = 1.0 / (2.0 * (self.upper_bound - self.lower_bound));
        let offset = (self.upper_bound + self.lower_bound) / 2.0;
        0.5 * ((excitation_per_nucleon - offset) / scale).tanh() + 0.5
    }
}

impl Condition for MultiFragmentationCondition {
    fn evaluate(&self, fragment: &Fragment, rng: &mut dyn RngCore) -> bool {
        let a = fragment.a;
        if a < self.max_a && fragment.z < self.max_z {
            return false;
        }
        let excitation = fragment.excitation_energy;
        let probability = self.transition_probability(excitation / a as f64);
        let random: f64 = rng.gen();

        let lower = self.lower_bound * a as f64;
        let upper = self.upper_bound * a as f64;
        if excitation < lower {
            return false;
        }
        if excitation < upper {
            return random < probability;
        }
        excitation > upper
    }
}

/// Fermi break-up applies to light nuclei only.
#[derive(Debug, Clone, Copy, Default)]
pub struct FermiBreakUpCondition;

impl Condition for FermiBreakUpCondition {
    fn evaluate(&self, fragment: &Fragment, _rng: &mut dyn RngCore) -> bool {
        FermiBreakUp::is_fermi_possible(fragment.z, fragment.a, fragment.excitation_energy)
    }
}

/// Gate that accepts every fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Condition for Always {
    fn evaluate(&self, _fragment: &Fragment, _rng: &mut dyn RngCore) -> bool {
        true
    }
}
