//! Parameterized 3D noise fields.

use noise::NoiseFn;

use crate::perlin::{noise3d_perlin, noise3d_perlin_abs};
use crate::seed_to_i32;

/// How the octave sum of a [`NoiseParams`] field is shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    /// Always `1.0`, regardless of position or seed.
    ConstantOne,
    /// The raw octave sum.
    Perlin,
    /// Octave sum of absolute values.
    PerlinAbs,
    /// [`contour`] of the amplified octave sum: `1` on the zero crossings,
    /// falling to `0` within `1 / amplitude` of them. Larger amplitudes give
    /// thinner sheets.
    PerlinContour,
    /// Like [`NoiseKind::PerlinContour`] with the Y and Z axes swapped, so
    /// its ridges run perpendicular to an unswapped layer's.
    PerlinContourFlipYZ,
}

/// A complete description of one 3D noise layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// How octaves are combined and shaped.
    pub kind: NoiseKind,
    /// Effective seed of the layer (world seed plus the layer's offset).
    pub seed: u64,
    /// Number of octaves summed, at least 1 for anything but [`NoiseKind::ConstantOne`].
    pub octaves: u32,
    /// Weight multiplier between successive octaves.
    pub persistence: f64,
    /// Spatial period: positions are divided by this before sampling.
    pub scale: f64,
    /// Output multiplier. For contour kinds it is applied before folding.
    pub amplitude: f64,
}

impl NoiseParams {
    /// Bundles a layer description; `seed` already includes the layer offset.
    pub fn new(
        kind: NoiseKind,
        seed: u64,
        octaves: u32,
        persistence: f64,
        scale: f64,
        amplitude: f64,
    ) -> Self {
        Self {
            kind,
            seed,
            octaves,
            persistence,
            scale,
            amplitude,
        }
    }

    /// Evaluates this layer at a position. Same as [`noise3d_param`].
    #[inline]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        noise3d_param(self, x, y, z)
    }
}

/// Folds a signed value into a ridge: `1` at zero, falling linearly to `0`
/// at `|v| >= 1`.
#[inline]
pub fn contour(v: f64) -> f64 {
    let v = v.abs();
    if v >= 1.0 { 0.0 } else { 1.0 - v }
}

/// Evaluates a noise layer at a position in node units.
pub fn noise3d_param(params: &NoiseParams, x: f64, y: f64, z: f64) -> f64 {
    let s = params.scale;
    let (x, y, z) = (x / s, y / s, z / s);
    let seed = seed_to_i32(params.seed);
    let (octaves, persistence) = (params.octaves, params.persistence);

    match params.kind {
        NoiseKind::ConstantOne => 1.0,
        NoiseKind::Perlin => params.amplitude * noise3d_perlin(x, y, z, seed, octaves, persistence),
        NoiseKind::PerlinAbs => {
            params.amplitude * noise3d_perlin_abs(x, y, z, seed, octaves, persistence)
        }
        NoiseKind::PerlinContour => {
            contour(params.amplitude * noise3d_perlin(x, y, z, seed, octaves, persistence))
        }
        NoiseKind::PerlinContourFlipYZ => {
            contour(params.amplitude * noise3d_perlin(x, z, y, seed, octaves, persistence))
        }
    }
}

impl NoiseFn<f64, 3> for NoiseParams {
    fn get(&self, point: [f64; 3]) -> f64 {
        noise3d_param(self, point[0], point[1], point[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(kind: NoiseKind) -> NoiseParams {
        NoiseParams::new(kind, 52_534, 4, 0.5, 50.0, 12.0)
    }

    #[test]
    fn test_contour_shape() {
        assert_eq!(contour(0.0), 1.0);
        assert_eq!(contour(1.0), 0.0);
        assert_eq!(contour(-3.0), 0.0);
        assert_eq!(contour(-0.25), 0.75);
        assert_eq!(contour(0.5), 0.5);
    }

    #[test]
    fn test_constant_one_ignores_everything() {
        let params = NoiseParams::new(NoiseKind::ConstantOne, 99, 0, 0.0, 1.0, 1000.0);
        for i in -10..10 {
            assert_eq!(noise3d_param(&params, f64::from(i), 5.0, -3.0), 1.0);
        }
    }

    #[test]
    fn test_flip_yz_swaps_axes() {
        let plain = layer(NoiseKind::PerlinContour);
        let flipped = layer(NoiseKind::PerlinContourFlipYZ);
        for i in -20..20 {
            let (x, y, z) = (f64::from(i * 3), f64::from(i * 7 + 1), f64::from(-i * 5));
            assert_eq!(
                noise3d_param(&flipped, x, y, z),
                noise3d_param(&plain, x, z, y),
                "flipped layer must equal the plain layer with y and z exchanged"
            );
        }
    }

    #[test]
    fn test_contour_layer_in_unit_range() {
        let params = layer(NoiseKind::PerlinContour);
        let mut zero = 0;
        for x in -30..30 {
            for y in -5..5 {
                let v = params.sample(f64::from(x * 4), f64::from(y * 9), 17.0);
                assert!((0.0..=1.0).contains(&v), "contour layer out of range: {v}");
                if v == 0.0 {
                    zero += 1;
                }
            }
        }
        assert!(zero > 0, "an amplified contour should be flat zero away from its sheets");
    }

    #[test]
    fn test_noise_fn_matches_sample() {
        let params = layer(NoiseKind::Perlin);
        for i in 0..50 {
            let p = [f64::from(i), f64::from(-i), f64::from(i * 2)];
            assert_eq!(params.get(p), params.sample(p[0], p[1], p[2]));
        }
    }

    #[test]
    fn test_seed_uses_low_32_bits() {
        let low = NoiseParams::new(NoiseKind::Perlin, 7, 3, 0.5, 20.0, 1.0);
        let high = NoiseParams {
            seed: 7 | (5 << 40),
            ..low
        };
        assert_eq!(low.sample(13.0, 2.0, -8.0), high.sample(13.0, 2.0, -8.0));
    }
}
