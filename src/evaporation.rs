// Statistical evaporation of light particles
//
// Neutrons, protons, deuterons, tritons, helium-3 and alphas are emitted one
// at a time with Weisskopf-like widths from a Fermi-gas level density. When
// no particle channel is open any more the remaining excitation goes to the
// photon cascade.

use crate::channel::EmissionChannel;
use crate::fragment::Fragment;
use crate::kinematics::two_body_decay;
use crate::nuclear_data::NuclearData;
use crate::photon_evaporation::GammaCascade;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Gamma};
use std::sync::Arc;

/// Inverse level-density parameter `A / a` in MeV.
const LEVEL_DENSITY_DIVISOR: f64 = 8.0;
const COULOMB_RADIUS: f64 = 1.5;
const COULOMB_CONSTANT: f64 = 1.44;
const MAX_ENERGY_SAMPLES: usize = 100;

/// An evaporated particle species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationChannel {
    pub name: &'static str,
    pub a: i32,
    pub z: i32,
    /// Spin degeneracy `2s + 1`
    pub degeneracy: f64,
}

pub const EVAPORATION_CHANNELS: [EvaporationChannel; 6] = [
    EvaporationChannel { name: "neutron", a: 1, z: 0, degeneracy: 2.0 },
    EvaporationChannel { name: "proton", a: 1, z: 1, degeneracy: 2.0 },
    EvaporationChannel { name: "deuteron", a: 2, z: 1, degeneracy: 3.0 },
    EvaporationChannel { name: "triton", a: 3, z: 1, degeneracy: 2.0 },
    EvaporationChannel { name: "He3", a: 3, z: 2, degeneracy: 2.0 },
    EvaporationChannel { name: "alpha", a: 4, z: 2, degeneracy: 1.0 },
];

/// Energetics of one open channel for a given parent.
#[derive(Debug, Clone, Copy)]
struct OpenChannel {
    channel: EvaporationChannel,
    particle_mass: f64,
    residual_mass: f64,
    /// Kinetic energy above the barrier when the residual is left cold
    max_energy: f64,
    temperature: f64,
    log_width: f64,
}

pub struct StatisticalEvaporation {
    data: Arc<dyn NuclearData>,
    photon: GammaCascade,
    pub ground_state_threshold: f64,
}

impl StatisticalEvaporation {
    pub fn new(data: Arc<dyn NuclearData>) -> Self {
        StatisticalEvaporation {
            data,
            photon: GammaCascade::default(),
            ground_state_threshold: 1e-5,
        }
    }

    pub fn with_photon_cascade(mut self, photon: GammaCascade) -> Self {
        self.photon = photon;
        self
    }

    /// Coulomb barrier for emitting `(zc, ac)` from a nucleus leaving `(zr, ar)` behind.
    pub fn coulomb_barrier(zc: i32, ac: i32, zr: i32, ar: i32) -> f64 {
        if zc == 0 {
            return 0.0;
        }
        let radius = COULOMB_RADIUS * ((ac as f64).cbrt() + (ar as f64).cbrt());
        COULOMB_CONSTANT * (zc * zr) as f64 / radius
    }

    fn open_channels(&self, fragment: &Fragment) -> Vec<OpenChannel> {
        let total_mass = fragment.mass();
        EVAPORATION_CHANNELS
            .iter()
            .filter_map(|&channel| {
                let ar = fragment.a - channel.a;
                let zr = fragment.z - channel.z;
                if ar < 1 || zr < 0 || zr > ar {
                    return None;
                }
                let particle_mass = self.data.nuclear_mass(channel.z, channel.a);
                let residual_mass = self.data.nuclear_mass(zr, ar);
                if particle_mass <= 0.0 || residual_mass <= 0.0 {
                    return None;
                }
                let q = total_mass - particle_mass - residual_mass;
                let max_energy = q - Self::coulomb_barrier(channel.z, channel.a, zr, ar);
                if max_energy <= 0.0 {
                    return None;
                }
                let level_density = ar as f64 / LEVEL_DENSITY_DIVISOR;
                let temperature = (max_energy / level_density).sqrt();
                let reduced_mass = particle_mass * residual_mass / (particle_mass + residual_mass);
                let log_width = channel.degeneracy.ln()
                    + reduced_mass.ln()
                    + 2.0 / 3.0 * (ar as f64).ln()
                    + 2.0 * temperature.ln()
                    + 2.0 * (level_density * max_energy).sqrt();
                Some(OpenChannel {
                    channel,
                    particle_mass,
                    residual_mass,
                    max_energy,
                    temperature,
                    log_width,
                })
            })
            .collect()
    }

    fn choose<'a, R: Rng + ?Sized>(open: &'a [OpenChannel], rng: &mut R) -> Option<&'a OpenChannel> {
        let max_log = open.iter().map(|c| c.log_width).fold(f64::NEG_INFINITY, f64::max);
        if !max_log.is_finite() {
            return None;
        }
        let total: f64 = open.iter().map(|c| (c.log_width - max_log).exp()).sum();
        let mut xi = rng.gen::<f64>() * total;
        for channel in open {
            let weight = (channel.log_width - max_log).exp();
            if xi < weight {
                return Some(channel);
            }
            xi -= weight;
        }
        open.last()
    }

    /// Kinetic energy above the barrier, Maxwellian in the residual temperature.
    fn sample_energy<R: Rng + ?Sized>(open: &OpenChannel, rng: &mut R) -> f64 {
        if let Ok(maxwell) = Gamma::new(2.0, open.temperature) {
            for _ in 0..MAX_ENERGY_SAMPLES {
                let energy = maxwell.sample(rng);
                if energy > 0.0 && energy <= open.max_energy {
                    return energy;
                }
            }
        }
        rng.gen::<f64>() * open.max_energy
    }
}

impl EmissionChannel for StatisticalEvaporation {
    fn emit(&mut self, fragment: &mut Fragment, rng: &mut dyn RngCore) -> Vec<Fragment> {
        let mut products = Vec::new();
        while fragment.excitation_energy > self.ground_state_threshold {
            let open = self.open_channels(fragment);
            let Some(chosen) = Self::choose(&open, rng) else {
                break;
            };
            let energy = Self::sample_energy(chosen, rng);
            let residual_excitation = (chosen.max_energy - energy).max(0.0);
            let Some((particle, residual)) = two_body_decay(
                &fragment.momentum,
                chosen.particle_mass,
                chosen.residual_mass + residual_excitation,
                rng,
            ) else {
                break;
            };
            tracing::trace!(
                particle = chosen.channel.name,
                kinetic = particle.kinetic_energy(),
                residual_excitation,
                "evaporated"
            );
            products.push(
                Fragment::new(chosen.channel.a, chosen.channel.z, 0.0, particle)
                    .with_creation_time(fragment.creation_time),
            );
            fragment.a -= chosen.channel.a;
            fragment.z -= chosen.channel.z;
            fragment.set_state(residual, residual_excitation);
        }
        products.extend(self.photon.emit(fragment, rng));
        products
    }
}
