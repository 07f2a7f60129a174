//! Octave sums of lattice noise.

use noise::NoiseFn;

use crate::lattice::{noise2d_gradient, noise3d_gradient};

/// Sums `octaves` layers of 2D lattice noise.
///
/// Octave `i` is sampled at `2^i` times the input frequency with seed
/// `seed + i` and weighted by `persistence^i`. The output is not normalized:
/// its magnitude is bounded by the sum of the octave weights.
pub fn noise2d_perlin(x: f64, y: f64, seed: i32, octaves: u32, persistence: f64) -> f64 {
    let mut a = 0.0;
    let mut f = 1.0;
    let mut g = 1.0;
    for i in 0..octaves {
        a += g * noise2d_gradient(x * f, y * f, seed.wrapping_add(i as i32));
        f *= 2.0;
        g *= persistence;
    }
    a
}

/// Sums `octaves` layers of 3D lattice noise. See [`noise2d_perlin`].
pub fn noise3d_perlin(x: f64, y: f64, z: f64, seed: i32, octaves: u32, persistence: f64) -> f64 {
    let mut a = 0.0;
    let mut f = 1.0;
    let mut g = 1.0;
    for i in 0..octaves {
        a += g * noise3d_gradient(x * f, y * f, z * f, seed.wrapping_add(i as i32));
        f *= 2.0;
        g *= persistence;
    }
    a
}

/// Like [`noise3d_perlin`] but sums the absolute value of every octave,
/// giving ridged, strictly non-negative output.
pub fn noise3d_perlin_abs(
    x: f64,
    y: f64,
    z: f64,
    seed: i32,
    octaves: u32,
    persistence: f64,
) -> f64 {
    let mut a = 0.0;
    let mut f = 1.0;
    let mut g = 1.0;
    for i in 0..octaves {
        a += g * noise3d_gradient(x * f, y * f, z * f, seed.wrapping_add(i as i32)).abs();
        f *= 2.0;
        g *= persistence;
    }
    a
}

/// A fixed 2D octave-noise configuration usable wherever the `noise` crate
/// expects a [`NoiseFn`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perlin2 {
    /// Lattice seed of the first octave.
    pub seed: i32,
    /// Number of octaves summed.
    pub octaves: u32,
    /// Weight multiplier between successive octaves.
    pub persistence: f64,
}

impl Perlin2 {
    pub fn new(seed: i32, octaves: u32, persistence: f64) -> Self {
        Self {
            seed,
            octaves,
            persistence,
        }
    }

    /// Sum of octave weights; bounds the magnitude of every sample.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut g = 1.0;
        for _ in 0..self.octaves {
            sum += g;
            g *= self.persistence;
        }
        sum
    }
}

impl NoiseFn<f64, 2> for Perlin2 {
    fn get(&self, point: [f64; 2]) -> f64 {
        noise2d_perlin(point[0], point[1], self.seed, self.octaves, self.persistence)
    }
}
