//! De-excitation channel interfaces.
//!
//! The cascade only sees channels through these two traits. Break-up channels
//! (multifragmentation, Fermi break-up) replace a fragment by a set of
//! products; emission channels (evaporation, photon evaporation) emit products
//! from a fragment and leave it behind as the residual.

use crate::fragment::Fragment;
use rand::RngCore;

/// Channel that replaces a fragment by its decay products.
pub trait BreakUpChannel {
    /// Products of the break-up. Zero or one product means the fragment did not split,
    /// in which case the cascade keeps the original fragment.
    fn break_it_up(&mut self, fragment: &Fragment, rng: &mut dyn RngCore) -> Vec<Fragment>;

    /// Whether the channel can handle a nucleus with this charge, mass number and excitation.
    fn is_applicable(&self, _z: i32, _a: i32, _excitation_energy: f64) -> bool {
        true
    }
}

/// Channel that emits particles from a fragment, updating it in place.
pub trait EmissionChannel {
    /// Emitted products, not including the residual. `fragment` is left as the
    /// residual nucleus, possibly with lower excitation and new momentum.
    fn emit(&mut self, fragment: &mut Fragment, rng: &mut dyn RngCore) -> Vec<Fragment>;

    fn is_applicable(&self, _z: i32, _a: i32, _excitation_energy: f64) -> bool {
        true
    }
}
