// Random number support for the de-excitation cascade
//
// The engine never owns a generator: callers hand in any `rand::RngCore`.
// `CascadeRng` is a small PCG-LCG stream that is cheap to construct per event,
// which keeps long conservation runs reproducible event by event.

use nalgebra::Vector3;
use rand::{Rng, RngCore, SeedableRng};

const PRN_MULT: u64 = 6364136223846793005;
const PRN_ADD: u64 = 1442695040888963407;
/// Stride between the starting points of consecutive event streams.
const EVENT_STRIDE: u64 = 152917;

/// PCG generator with an LCG base and RXS-M-XS output permutation.
#[derive(Clone, Copy, Debug)]
pub struct CascadeRng {
    state: u64,
}

impl CascadeRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent stream for event number `event` of a run seeded with `seed`.
    pub fn for_event(seed: u64, event: u64) -> Self {
        let mut rng = Self::new(seed ^ event.wrapping_mul(EVENT_STRIDE));
        // decorrelate neighbouring seeds
        rng.advance();
        rng.advance();
        rng
    }

    #[inline(always)]
    fn advance(&mut self) -> u64 {
        self.state = PRN_MULT.wrapping_mul(self.state).wrapping_add(PRN_ADD);
        let word = ((self.state >> ((self.state >> 59) + 5)) ^ self.state)
            .wrapping_mul(12605985483714917081);
        (word >> 43) ^ word
    }

    /// Uniform deviate in [0, 1).
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        (self.advance() as f64) * 5.421010862427522e-20
    }
}

impl SeedableRng for CascadeRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

impl RngCore for CascadeRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Unit vector distributed uniformly over the sphere.
pub fn isotropic_direction<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    let mu = 2.0 * rng.gen::<f64>() - 1.0;
    let phi = 2.0 * std::f64::consts::PI * rng.gen::<f64>();
    let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
    Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), mu)
}
