//! Density fields consumed by block population: trees, grass, space debris
//! and large stones.
//!
//! Each field is a noise sample shifted down by a "zeroval" threshold and
//! scaled linearly; below the threshold the field is zero. Tree and grass
//! density share one vegetation sample and differ only in how the biome
//! scales it.

use glam::I16Vec2;
use voxelands_noise::noise2d_perlin;

use crate::biome::Biome;
use crate::block::BlockMakeData;
use crate::catalog::NoisePurpose;
use crate::fields::offset_coord;
use crate::{MAP_BLOCKSIZE, WorldSeed};

const VEGETATION_ZEROVAL: f64 = -0.39;
const DEBRIS_ZEROVAL: f64 = -0.41;
const LARGESTONE_ZEROVAL: f64 = 0.3;

/// Scales `noise` linearly from `0` at `zeroval` to `max` at `1.0`.
#[inline]
fn above_zeroval(noise: f64, zeroval: f64, max: f64) -> f64 {
    max * (noise - zeroval) / (1.0 - zeroval)
}

/// Vegetation count over a block footprint before biome adjustments.
fn base_vegetation(seed: WorldSeed, column: I16Vec2) -> u32 {
    let noise = noise2d_perlin(
        offset_coord(column.x, 125.0),
        offset_coord(column.y, 125.0),
        NoisePurpose::Vegetation.lattice_seed(seed),
        4,
        0.66,
    );

    if noise >= VEGETATION_ZEROVAL {
        let density = above_zeroval(noise, VEGETATION_ZEROVAL, 0.04);
        let area = f64::from(MAP_BLOCKSIZE) * f64::from(MAP_BLOCKSIZE);
        (density * area) as u32
    } else {
        0
    }
}

/// Expected number of trees over one block footprint.
pub fn tree_density(data: &BlockMakeData, column: I16Vec2) -> u32 {
    let r = base_vegetation(data.seed, column);

    match data.biome {
        Some(Biome::Jungle | Biome::Forest) => {
            if r < 1 {
                20
            } else {
                r.saturating_mul(5)
            }
        }
        Some(Biome::Lake | Biome::SnowCap | Biome::WoodLands) => {
            if r < 1 {
                5
            } else {
                r
            }
        }
        Some(Biome::Plains) => r / 5,
        _ => r,
    }
}

/// Expected number of grass tufts over one block footprint.
pub fn grass_density(data: &BlockMakeData, column: I16Vec2) -> u32 {
    if matches!(
        data.biome,
        Some(Biome::Desert | Biome::SnowCap | Biome::Ocean)
    ) {
        return 0;
    }

    let r = base_vegetation(data.seed, column);

    match data.biome {
        Some(Biome::Jungle | Biome::Plains) => {
            if r < 1 {
                50
            } else {
                r.saturating_mul(15)
            }
        }
        Some(Biome::Lake | Biome::WoodLands) => {
            if r < 1 {
                5
            } else {
                r
            }
        }
        _ => r,
    }
}

/// Amount of floating debris, used where blocks are space.
pub fn debris_amount(seed: WorldSeed, column: I16Vec2) -> f64 {
    let noise = noise2d_perlin(
        offset_coord(column.x, 125.0),
        offset_coord(column.y, 125.0),
        NoisePurpose::Vegetation.lattice_seed(seed),
        4,
        0.7,
    );
    if noise < DEBRIS_ZEROVAL {
        return 0.0;
    }
    above_zeroval(noise, DEBRIS_ZEROVAL, 0.037)
}

/// Amount of large surface stones.
pub fn largestone_amount(seed: WorldSeed, column: I16Vec2) -> f64 {
    let noise = noise2d_perlin(
        offset_coord(column.x, 250.0),
        offset_coord(column.y, 250.0),
        NoisePurpose::LargeStone.lattice_seed(seed),
        5,
        0.66,
    );
    if noise < LARGESTONE_ZEROVAL {
        return 0.0;
    }
    above_zeroval(noise, LARGESTONE_ZEROVAL, 0.005)
}
