//! Noise layer catalog: one seed offset per purpose, and the parameter sets
//! of the 3D layers.
//!
//! All layers share the world seed. Each purpose adds its own offset so the
//! fields stay decorrelated; a new layer needs a new, unused offset here.

use voxelands_noise::{NoiseKind, NoiseParams, seed_to_i32};

use crate::{CAVE_NOISE_SCALE, WorldSeed};

/// What a noise layer is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoisePurpose {
    /// First cave sheet layer.
    CaveShape1,
    /// Second cave sheet layer, crossing the first.
    CaveShape2,
    /// 3D ground shape.
    GroundShape,
    /// How easily ground breaks into gravel.
    GroundCrumbliness,
    /// Where ground turns to mud and clay.
    GroundWetness,
    /// Surface humidity, used for biome selection.
    Humidity,
    /// Ground surface height. Uses the bare world seed.
    GroundHeight,
    /// Shared by the tree, grass and debris fields.
    Vegetation,
    /// Large surface stones.
    LargeStone,
    /// Sand versus gravel on beaches.
    Sand,
}

impl NoisePurpose {
    pub const ALL: [NoisePurpose; 10] = [
        NoisePurpose::CaveShape1,
        NoisePurpose::CaveShape2,
        NoisePurpose::GroundShape,
        NoisePurpose::GroundCrumbliness,
        NoisePurpose::GroundWetness,
        NoisePurpose::Humidity,
        NoisePurpose::GroundHeight,
        NoisePurpose::Vegetation,
        NoisePurpose::LargeStone,
        NoisePurpose::Sand,
    ];

    /// Offset added to the world seed for this purpose.
    pub const fn seed_offset(self) -> u64 {
        match self {
            NoisePurpose::CaveShape1 => 52_534,
            NoisePurpose::CaveShape2 => 10_325,
            NoisePurpose::GroundShape => 983_240,
            NoisePurpose::GroundCrumbliness => 34_413,
            NoisePurpose::GroundWetness => 32_474,
            NoisePurpose::Humidity => 72_384,
            NoisePurpose::GroundHeight => 0,
            NoisePurpose::Vegetation => 2,
            NoisePurpose::LargeStone => 14_143_242,
            NoisePurpose::Sand => 59_420,
        }
    }

    /// Effective seed of this purpose's layer.
    #[inline]
    pub fn seed(self, world_seed: WorldSeed) -> u64 {
        world_seed.wrapping_add(self.seed_offset())
    }

    /// Effective seed narrowed for the lattice hash.
    #[inline]
    pub fn lattice_seed(self, world_seed: WorldSeed) -> i32 {
        seed_to_i32(self.seed(world_seed))
    }
}

/// First cave layer: thin sheets along the zero crossings of a 3D field.
pub fn cave_noise1_params(seed: WorldSeed) -> NoiseParams {
    NoiseParams::new(
        NoiseKind::PerlinContour,
        NoisePurpose::CaveShape1.seed(seed),
        4,
        0.5,
        50.0,
        CAVE_NOISE_SCALE,
    )
}

/// Second cave layer, with Y and Z swapped so its sheets cross the first's.
pub fn cave_noise2_params(seed: WorldSeed) -> NoiseParams {
    NoiseParams::new(
        NoiseKind::PerlinContourFlipYZ,
        NoisePurpose::CaveShape2.seed(seed),
        4,
        0.5,
        50.0,
        CAVE_NOISE_SCALE,
    )
}

/// 3D ground shape: 4 octaves over an 80 node period, amplitude 40.
pub fn ground_noise1_params(seed: WorldSeed) -> NoiseParams {
    NoiseParams::new(
        NoiseKind::Perlin,
        NoisePurpose::GroundShape.seed(seed),
        4,
        0.55,
        80.0,
        40.0,
    )
}

/// Ground crumbliness. Persistence above 1 makes the fine octaves dominate.
pub fn ground_crumbliness_params(seed: WorldSeed) -> NoiseParams {
    NoiseParams::new(
        NoiseKind::Perlin,
        NoisePurpose::GroundCrumbliness.seed(seed),
        3,
        1.3,
        20.0,
        1.0,
    )
}

/// Ground wetness. Persistence 1.1 weights fine octaves slightly above coarse ones.
pub fn ground_wetness_params(seed: WorldSeed) -> NoiseParams {
    NoiseParams::new(
        NoiseKind::Perlin,
        NoisePurpose::GroundWetness.seed(seed),
        4,
        1.1,
        40.0,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_are_unique() {
        let offsets: HashSet<u64> = NoisePurpose::ALL.iter().map(|p| p.seed_offset()).collect();
        assert_eq!(
            offsets.len(),
            NoisePurpose::ALL.len(),
            "two noise purposes share a seed offset"
        );
    }

    #[test]
    fn test_ground_height_uses_bare_seed() {
        assert_eq!(NoisePurpose::GroundHeight.seed(123_456), 123_456);
    }

    #[test]
    fn test_factories_are_repeatable() {
        let factories: [fn(WorldSeed) -> NoiseParams; 5] = [
            cave_noise1_params,
            cave_noise2_params,
            ground_noise1_params,
            ground_crumbliness_params,
            ground_wetness_params,
        ];
        for seed in [0, 1, 42, u64::MAX] {
            for factory in factories {
                let a = factory(seed);
                let b = factory(seed);
                assert_eq!(a, b, "factory output changed between calls");
                assert_eq!(a.seed.to_le_bytes(), b.seed.to_le_bytes());
                assert_eq!(a.persistence.to_bits(), b.persistence.to_bits());
                assert_eq!(a.scale.to_bits(), b.scale.to_bits());
                assert_eq!(a.amplitude.to_bits(), b.amplitude.to_bits());
            }
        }
    }

    #[test]
    fn test_cave_layers_match_catalog() {
        let one = cave_noise1_params(1000);
        assert_eq!(one.kind, NoiseKind::PerlinContour);
        assert_eq!(one.seed, 1000 + 52_534);
        assert_eq!((one.octaves, one.persistence, one.scale), (4, 0.5, 50.0));
        assert_eq!(one.amplitude, CAVE_NOISE_SCALE);

        let two = cave_noise2_params(1000);
        assert_eq!(two.kind, NoiseKind::PerlinContourFlipYZ);
        assert_eq!(two.seed, 1000 + 10_325);
    }

    #[test]
    fn test_ground_layers_match_catalog() {
        let ground = ground_noise1_params(0);
        assert_eq!(ground.kind, NoiseKind::Perlin);
        assert_eq!(ground.seed, 983_240);
        assert_eq!(
            (ground.octaves, ground.persistence, ground.scale, ground.amplitude),
            (4, 0.55, 80.0, 40.0)
        );

        let crumbly = ground_crumbliness_params(0);
        assert_eq!(
            (crumbly.seed, crumbly.octaves, crumbly.persistence, crumbly.scale),
            (34_413, 3, 1.3, 20.0)
        );

        let wet = ground_wetness_params(0);
        assert_eq!(
            (wet.seed, wet.octaves, wet.persistence, wet.scale),
            (32_474, 4, 1.1, 40.0)
        );
    }

    #[test]
    fn test_seed_offsets_wrap() {
        assert_eq!(NoisePurpose::Vegetation.seed(u64::MAX), 1);
        assert_eq!(NoisePurpose::Vegetation.lattice_seed(u64::MAX), 1);
    }
}
