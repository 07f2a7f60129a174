//! Scalar fields over columns and nodes: height, humidity, caves, sand, and
//! the ground texture layers.

use glam::{I16Vec2, I16Vec3};
use voxelands_noise::noise2d_perlin;

use crate::catalog::{
    NoisePurpose, cave_noise1_params, cave_noise2_params, ground_crumbliness_params,
    ground_wetness_params,
};
use crate::{CAVE_NOISE_THRESHOLD, WATER_LEVEL, WorldSeed};

/// Noise-space coordinate of a column for the half-cell-offset fields
/// (sand, vegetation, large stones). The division happens in single
/// precision; changing that shifts every sample.
#[inline]
pub(crate) fn offset_coord(v: i16, period: f32) -> f64 {
    0.5 + f64::from(f32::from(v) / period)
}

/// Surface humidity of a column, in `[0, 1]`.
pub fn humidity(seed: WorldSeed, column: I16Vec2) -> f32 {
    let noise = noise2d_perlin(
        f64::from(column.x) / 500.0,
        f64::from(column.y) / 500.0,
        NoisePurpose::Humidity.lattice_seed(seed),
        4,
        0.5,
    );
    ((noise + 1.0) / 2.0).clamp(0.0, 1.0) as f32
}

/// Ground surface height of a column.
///
/// Positive noise is raised to the power 1.9, which flattens low hills and
/// sharpens peaks; terrain below the midline stays linear. The result is
/// truncated toward zero.
pub fn ground_height(seed: WorldSeed, column: I16Vec2) -> i16 {
    let mut e = noise2d_perlin(
        f64::from(column.x) / 200.0,
        f64::from(column.y) / 200.0,
        NoisePurpose::GroundHeight.lattice_seed(seed),
        4,
        0.5,
    );
    if e > 0.0 {
        e = libm::pow(e, 1.9);
    }
    (f64::from(WATER_LEVEL + 1) + 25.0 * e) as i16
}

/// Ground level of a column. `precision` is accepted for callers of the
/// iterative search this replaced and has no effect.
pub fn find_ground_level_from_noise(seed: WorldSeed, column: I16Vec2, _precision: i16) -> i16 {
    ground_height(seed, column)
}

/// Whether a node lies inside a cave.
///
/// Each cave layer is a thin sheet around a zero crossing; caves are where
/// two sheets meet, which gives long tunnels rather than blobs.
pub fn is_cave(seed: WorldSeed, pos: I16Vec3) -> bool {
    let (x, y, z) = (f64::from(pos.x), f64::from(pos.y), f64::from(pos.z));
    let d1 = cave_noise1_params(seed).sample(x, y, z);
    let d2 = cave_noise2_params(seed).sample(x, y, z);
    d1 * d2 > CAVE_NOISE_THRESHOLD
}

/// Whether beaches around this column are sand rather than gravel.
pub fn have_sand(seed: WorldSeed, column: I16Vec2) -> bool {
    let noise = noise2d_perlin(
        offset_coord(column.x, 500.0),
        offset_coord(column.y, 500.0),
        NoisePurpose::Sand.lattice_seed(seed),
        3,
        0.5,
    );
    noise > -0.15
}

pub fn ground_crumbliness(seed: WorldSeed, pos: I16Vec3) -> f64 {
    ground_crumbliness_params(seed).sample(f64::from(pos.x), f64::from(pos.y), f64::from(pos.z))
}

pub fn ground_wetness(seed: WorldSeed, pos: I16Vec3) -> f64 {
    ground_wetness_params(seed).sample(f64::from(pos.x), f64::from(pos.y), f64::from(pos.z))
}
