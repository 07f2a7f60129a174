//! Coarse ground-height statistics over a sector footprint.
//!
//! A sector is summarized from nine columns instead of all 256, which is
//! enough to classify it and cheap enough to do for every block.

use glam::{I16Vec2, I16Vec3};

use crate::coords::{sector_node_max, sector_node_min};
use crate::fields::ground_height;
use crate::{MAP_BLOCKSIZE, WorldSeed};

const MAXIMUM_SENTINEL: f64 = -31000.0;
const MINIMUM_SENTINEL: f64 = 31000.0;

/// The nine sample columns of a sector footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectorStencil {
    /// Corners, in the order min/min, min/max, max/max, max/min.
    pub corners: [I16Vec2; 4],
    pub center: I16Vec2,
    /// Edge midpoints, in the order low-z, high-z, low-x, high-x.
    pub edges: [I16Vec2; 4],
}

impl SectorStencil {
    /// Stencil of the sector at `sectorpos` (block units).
    pub fn for_sector(sectorpos: I16Vec2) -> Self {
        let min = sector_node_min(sectorpos);
        let max = sector_node_max(sectorpos);
        let half = MAP_BLOCKSIZE / 2;
        let mid_x = min.x.wrapping_add(half);
        let mid_z = min.y.wrapping_add(half);

        Self {
            corners: [
                I16Vec2::new(min.x, min.y),
                I16Vec2::new(min.x, max.y),
                I16Vec2::new(max.x, max.y),
                I16Vec2::new(max.x, min.y),
            ],
            center: I16Vec2::new(mid_x, mid_z),
            edges: [
                I16Vec2::new(mid_x, min.y),
                I16Vec2::new(mid_x, max.y),
                I16Vec2::new(min.x, mid_z),
                I16Vec2::new(max.x, mid_z),
            ],
        }
    }

    /// A degenerate stencil where all nine samples are the same column.
    pub fn single_point(column: I16Vec2) -> Self {
        Self {
            corners: [column; 4],
            center: column,
            edges: [column; 4],
        }
    }

    /// The five columns averaged by [`SectorStencil::average_ground_level`].
    pub fn average_points(&self) -> impl Iterator<Item = I16Vec2> + '_ {
        self.corners.iter().copied().chain(std::iter::once(self.center))
    }

    /// All nine columns.
    pub fn points(&self) -> impl Iterator<Item = I16Vec2> + '_ {
        self.average_points().chain(self.edges.iter().copied())
    }

    /// Mean ground height of the corners and center. The edge midpoints are
    /// left out.
    pub fn average_ground_level(&self, seed: WorldSeed) -> f64 {
        let mut a = 0.0;
        for column in self.average_points() {
            a += f64::from(ground_height(seed, column));
        }
        a / 5.0
    }

    /// Highest ground over all nine columns.
    pub fn maximum_ground_level(&self, seed: WorldSeed) -> f64 {
        self.points()
            .map(|column| f64::from(ground_height(seed, column)))
            .fold(MAXIMUM_SENTINEL, f64::max)
    }

    /// Lowest ground over all nine columns.
    pub fn minimum_ground_level(&self, seed: WorldSeed) -> f64 {
        self.points()
            .map(|column| f64::from(ground_height(seed, column)))
            .fold(MINIMUM_SENTINEL, f64::min)
    }
}

pub fn sector_average_ground_level(seed: WorldSeed, sectorpos: I16Vec2) -> f64 {
    SectorStencil::for_sector(sectorpos).average_ground_level(seed)
}

pub fn sector_maximum_ground_level(seed: WorldSeed, sectorpos: I16Vec2) -> f64 {
    SectorStencil::for_sector(sectorpos).maximum_ground_level(seed)
}

pub fn sector_minimum_ground_level(seed: WorldSeed, sectorpos: I16Vec2) -> f64 {
    SectorStencil::for_sector(sectorpos).minimum_ground_level(seed)
}

/// Whether a block lies entirely at or below the lowest ground of its
/// sector, so no sunlight can reach it from above.
pub fn block_is_underground(seed: WorldSeed, blockpos: I16Vec3) -> bool {
    let minimum = sector_minimum_ground_level(seed, I16Vec2::new(blockpos.x, blockpos.z)) as i16;
    let top = i32::from(blockpos.y) * i32::from(MAP_BLOCKSIZE) + i32::from(MAP_BLOCKSIZE);
    top <= i32::from(minimum)
}
