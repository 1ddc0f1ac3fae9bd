// De-excitation of hot nuclear fragments
//
// The cascade engine lives in `handler`; the channel models it drives by
// default (multifragmentation, Fermi break-up, evaporation and photon
// evaporation) sit next to it and can be swapped out through the
// `BreakUpChannel`, `EmissionChannel` and `Condition` traits.

pub mod channel;
pub mod condition;
pub mod config;
pub mod converter;
pub mod data;
pub mod error;
pub mod evaporation;
pub mod fermi;
pub mod fragment;
pub mod handler;
pub mod kinematics;
pub mod lorentz;
pub mod multifragmentation;
pub mod nuclear_data;
pub mod particle;
pub mod photon_evaporation;
pub mod queue;
pub mod random;
pub mod reaction_product;

pub use channel::{BreakUpChannel, EmissionChannel};
pub use condition::{Always, Condition, FermiBreakUpCondition, MultiFragmentationCondition};
pub use config::{CacheKind, HandlerConfig};
pub use error::{ConfigError, DeexcitationError, Stage};
pub use evaporation::StatisticalEvaporation;
pub use fermi::FermiBreakUp;
pub use fragment::Fragment;
pub use handler::{ExcitationHandler, EVAPORATION_ITERATION_THRESHOLD, GROUND_STATE_THRESHOLD};
pub use lorentz::LorentzVector;
pub use multifragmentation::StatisticalMultifragmentation;
pub use nuclear_data::{NuclearData, NuclideTable};
pub use particle::ParticleDefinition;
pub use photon_evaporation::GammaCascade;
pub use random::CascadeRng;
pub use reaction_product::ReactionProduct;
