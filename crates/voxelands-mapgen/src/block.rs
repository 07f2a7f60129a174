//! Per-block generation context.

use glam::{I16Vec2, I16Vec3};

use crate::WorldSeed;
use crate::biome::{Biome, calc_biome};
use crate::density::{grass_density, tree_density};

/// What the generator knows about the block it is building.
///
/// Each worker owns the `BlockMakeData` of the block it generates; nothing
/// in it is shared between blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockMakeData {
    pub seed: WorldSeed,
    /// Block position, in block units.
    pub blockpos: I16Vec3,
    /// Set by [`calc_biome`]; `None` until then.
    pub biome: Option<Biome>,
}

impl BlockMakeData {
    pub fn new(seed: WorldSeed, blockpos: I16Vec3) -> Self {
        Self {
            seed,
            blockpos,
            biome: None,
        }
    }

    /// Creates the context and classifies the block right away.
    pub fn classified(seed: WorldSeed, blockpos: I16Vec3) -> Self {
        let mut data = Self::new(seed, blockpos);
        calc_biome(&mut data);
        data
    }

    /// Trees expected over the block footprint centered on `column`.
    pub fn tree_density(&self, column: I16Vec2) -> u32 {
        tree_density(self, column)
    }

    /// Grass tufts expected over the block footprint centered on `column`.
    pub fn grass_density(&self, column: I16Vec2) -> u32 {
        grass_density(self, column)
    }
}
