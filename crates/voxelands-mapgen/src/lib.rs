//! Terrain and biome generation: the deterministic mapping from a world seed
//! and a position to ground height, caves, biome and vegetation density.
//!
//! Everything in this crate except the worker pool is a pure function of
//! `(seed, position)`, safe to call from any number of threads at once.

mod async_generation;
mod biome;
mod block;
mod catalog;
mod coords;
mod density;
mod fields;
mod sector;

pub mod debug_viz;

pub use async_generation::{AsyncBlockSurveyor, BlockSurveyTask, SurveyedBlock, survey_block_sync};
pub use biome::{Biome, ParseBiomeError, calc_biome};
pub use block::BlockMakeData;
pub use catalog::{
    NoisePurpose, cave_noise1_params, cave_noise2_params, ground_crumbliness_params,
    ground_noise1_params, ground_wetness_params,
};
pub use coords::{block_node_max, block_node_min, sector_node_max, sector_node_min};
pub use density::{debris_amount, grass_density, largestone_amount, tree_density};
pub use fields::{
    find_ground_level_from_noise, ground_crumbliness, ground_height, ground_wetness, have_sand,
    humidity, is_cave,
};
pub use sector::{
    SectorStencil, block_is_underground, sector_average_ground_level,
    sector_maximum_ground_level, sector_minimum_ground_level,
};

/// A world seed. Fixed for the lifetime of a world.
pub type WorldSeed = u64;

/// Edge length of a map block, in nodes.
pub const MAP_BLOCKSIZE: i16 = 16;

/// Height of the sea surface, in nodes.
pub const WATER_LEVEL: i16 = 1;

/// Amplitude of the two cave layers.
pub const CAVE_NOISE_SCALE: f64 = 12.0;

/// Caves open where the product of the two cave layers exceeds this.
pub const CAVE_NOISE_THRESHOLD: f64 = 1.5 / CAVE_NOISE_SCALE;

/// Blocks whose lowest node is at or above this height are space.
pub const SPACE_MIN_Y: i16 = 1024;

/// Blocks whose lowest node is at or above this height are sky.
pub const SKY_MIN_Y: i16 = 256;

/// Blocks whose highest node is at or below this height are the deep.
pub const THE_DEEP_MAX_Y: i16 = -128;
