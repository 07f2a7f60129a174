//! Block and sector corners in node space.
//!
//! Corners are computed in 32-bit and narrowed with wrapping, so every
//! representable block position has a defined footprint.

use glam::{I16Vec2, I16Vec3};

use crate::MAP_BLOCKSIZE;

#[inline]
fn first_node(b: i16) -> i16 {
    (i32::from(b) * i32::from(MAP_BLOCKSIZE)) as i16
}

#[inline]
fn last_node(b: i16) -> i16 {
    ((i32::from(b) + 1) * i32::from(MAP_BLOCKSIZE) - 1) as i16
}

/// Lowest node of a block, on every axis.
pub fn block_node_min(blockpos: I16Vec3) -> I16Vec3 {
    I16Vec3::new(
        first_node(blockpos.x),
        first_node(blockpos.y),
        first_node(blockpos.z),
    )
}

/// Highest node of a block, on every axis.
pub fn block_node_max(blockpos: I16Vec3) -> I16Vec3 {
    I16Vec3::new(
        last_node(blockpos.x),
        last_node(blockpos.y),
        last_node(blockpos.z),
    )
}

/// First column of a sector.
pub fn sector_node_min(sectorpos: I16Vec2) -> I16Vec2 {
    I16Vec2::new(first_node(sectorpos.x), first_node(sectorpos.y))
}

/// Last column of a sector.
pub fn sector_node_max(sectorpos: I16Vec2) -> I16Vec2 {
    I16Vec2::new(last_node(sectorpos.x), last_node(sectorpos.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_corners() {
        let p = I16Vec3::new(0, -1, 3);
        assert_eq!(block_node_min(p), I16Vec3::new(0, -16, 48));
        assert_eq!(block_node_max(p), I16Vec3::new(15, -1, 63));
    }

    #[test]
    fn test_sector_corners_span_one_block() {
        let s = I16Vec2::new(-2, 5);
        let min = sector_node_min(s);
        let max = sector_node_max(s);
        assert_eq!(min, I16Vec2::new(-32, 80));
        assert_eq!(max - min, I16Vec2::splat(MAP_BLOCKSIZE - 1));
    }

    #[test]
    fn test_extreme_positions_do_not_panic() {
        let _ = block_node_min(I16Vec3::splat(i16::MAX));
        let _ = block_node_max(I16Vec3::splat(i16::MIN));
        let _ = sector_node_max(I16Vec2::splat(i16::MAX));
    }
}
