//! Debug renderers: ground height, biomes, cave slices and tree density.

use glam::{I16Vec2, I16Vec3};

use super::image::DebugImage;
use crate::biome::Biome;
use crate::block::BlockMakeData;
use crate::coords::block_node_min;
use crate::fields::{ground_height, is_cave};
use crate::{MAP_BLOCKSIZE, WATER_LEVEL, WorldSeed};

/// Column under pixel `(px, py)` of an image anchored at `origin`.
fn pixel_column(origin: I16Vec2, px: u32, py: u32) -> I16Vec2 {
    I16Vec2::new(
        origin.x.wrapping_add(px as i16),
        origin.y.wrapping_add(py as i16),
    )
}

/// Ground height of every column in a `width` x `height` node region whose
/// top-left column is `origin`.
///
/// Color bands: deep water, shallow water, shore, lowland green fading to
/// brown, and white above the snow line.
pub fn render_heightmap(seed: WorldSeed, origin: I16Vec2, width: u32, height: u32) -> DebugImage {
    let mut image = DebugImage::new(width, height);

    for py in 0..height {
        for px in 0..width {
            let h = ground_height(seed, pixel_column(origin, px, py));
            image.set_pixel(px, py, height_to_color(h));
        }
    }

    image
}

/// Color of a ground height, banded around the water level.
pub fn height_to_color(h: i16) -> [u8; 3] {
    let above = f64::from(h) - f64::from(WATER_LEVEL);

    if above < -20.0 {
        [0, 0, 128]
    } else if above < 0.0 {
        [30, 80, 200]
    } else if above <= 2.0 {
        [220, 200, 130]
    } else if above < 30.0 {
        let t = ((above - 2.0) / 28.0).clamp(0.0, 1.0);
        [
            (30.0 + t * 80.0) as u8,
            (160.0 - t * 40.0) as u8,
            (30.0 + t * 20.0) as u8,
        ]
    } else if above < 39.0 {
        let t = (above - 30.0) / 9.0;
        [
            (110.0 + t * 40.0) as u8,
            (120.0 - t * 50.0) as u8,
            (50.0 + t * 20.0) as u8,
        ]
    } else {
        let t = ((above - 39.0) / 40.0).min(1.0);
        let base = (180.0 + t * 75.0) as u8;
        [base, base, base]
    }
}

pub fn biome_color(biome: Biome) -> [u8; 3] {
    match biome {
        Biome::Space => [10, 10, 20],
        Biome::Sky => [170, 210, 250],
        Biome::TheDeep => [60, 40, 60],
        Biome::Ocean => [20, 50, 180],
        Biome::SnowCap => [235, 240, 245],
        Biome::Beach => [230, 210, 140],
        Biome::Lake => [70, 130, 220],
        Biome::WoodLands => [90, 140, 50],
        Biome::Forest => [30, 120, 30],
        Biome::Jungle => [10, 80, 20],
        Biome::Desert => [220, 190, 80],
        Biome::Plains => [150, 200, 80],
    }
}

/// Biome of every block in a `width` x `height` block region at block
/// height `block_y`, one pixel per block.
pub fn render_biome_map(
    seed: WorldSeed,
    origin_block: I16Vec2,
    width: u32,
    height: u32,
    block_y: i16,
) -> DebugImage {
    let mut image = DebugImage::new(width, height);

    for py in 0..height {
        for px in 0..width {
            let column = pixel_column(origin_block, px, py);
            let data = BlockMakeData::classified(seed, I16Vec3::new(column.x, block_y, column.y));
            if let Some(biome) = data.biome {
                image.set_pixel(px, py, biome_color(biome));
            }
        }
    }

    image
}

/// Horizontal slice through the cave field at node height `y`.
pub fn render_cave_slice(
    seed: WorldSeed,
    origin: I16Vec2,
    width: u32,
    height: u32,
    y: i16,
) -> DebugImage {
    let mut image = DebugImage::new(width, height);

    for py in 0..height {
        for px in 0..width {
            let column = pixel_column(origin, px, py);
            let color = if is_cave(seed, I16Vec3::new(column.x, y, column.y)) {
                [20, 20, 30]
            } else {
                [140, 120, 90]
            };
            image.set_pixel(px, py, color);
        }
    }

    image
}

/// Tree density of surface blocks (block height 0), one pixel per block.
/// Brighter green means more trees.
pub fn render_vegetation(
    seed: WorldSeed,
    origin_block: I16Vec2,
    width: u32,
    height: u32,
) -> DebugImage {
    let mut image = DebugImage::new(width, height);
    let half = MAP_BLOCKSIZE / 2;

    for py in 0..height {
        for px in 0..width {
            let column = pixel_column(origin_block, px, py);
            let blockpos = I16Vec3::new(column.x, 0, column.y);
            let data = BlockMakeData::classified(seed, blockpos);
            let node_min = block_node_min(blockpos);
            let center = I16Vec2::new(
                node_min.x.wrapping_add(half),
                node_min.z.wrapping_add(half),
            );

            let trees = data.tree_density(center).min(100);
            let level = (trees * 255 / 100) as u8;
            image.set_pixel(px, py, [level / 4, level, level / 4]);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heightmap_has_correct_dimensions() {
        let image = render_heightmap(42, I16Vec2::ZERO, 64, 32);
        assert_eq!(image.dimensions(), (64, 32));
        assert_eq!(image.pixels.len(), 64 * 32 * 4);
    }

    #[test]
    fn test_heightmap_pixel_matches_ground_height() {
        let origin = I16Vec2::new(-100, 250);
        let image = render_heightmap(7, origin, 16, 16);
        for (px, py) in [(0, 0), (5, 9), (15, 15)] {
            let h = ground_height(7, origin + I16Vec2::new(px as i16, py as i16));
            let [r, g, b, a] = image.get_pixel(px, py);
            assert_eq!([r, g, b], height_to_color(h));
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn test_heightmap_has_multiple_colors() {
        let image = render_heightmap(42, I16Vec2::new(-256, -256), 128, 128);
        assert!(
            image.unique_color_count() > 1,
            "Heightmap should have multiple colors, got {}",
            image.unique_color_count()
        );
    }

    #[test]
    fn test_different_seeds_render_differently() {
        let a = render_heightmap(1, I16Vec2::ZERO, 64, 64);
        let b = render_heightmap(2, I16Vec2::ZERO, 64, 64);
        assert_ne!(
            a.pixels, b.pixels,
            "Different seeds should produce different debug images"
        );
    }

    #[test]
    fn test_height_to_color_bands() {
        assert_eq!(height_to_color(-40), [0, 0, 128]);
        assert_eq!(height_to_color(0), [30, 80, 200]);
        assert_eq!(height_to_color(WATER_LEVEL), [220, 200, 130]);
        assert_eq!(height_to_color(i16::MAX), [255, 255, 255]);
        for h in -60..100 {
            let _ = height_to_color(h);
        }
    }

    #[test]
    fn test_biome_colors_are_distinct() {
        let colors: std::collections::HashSet<[u8; 3]> =
            Biome::ALL.into_iter().map(biome_color).collect();
        assert_eq!(colors.len(), Biome::ALL.len());
    }

    #[test]
    fn test_biome_map_in_space_is_uniform() {
        let image = render_biome_map(42, I16Vec2::new(-8, -8), 16, 16, 64);
        assert_eq!(image.unique_color_count(), 1);
        let [r, g, b, _] = image.get_pixel(0, 0);
        assert_eq!([r, g, b], biome_color(Biome::Space));
    }

    #[test]
    fn test_surface_biome_map_matches_classifier() {
        let origin = I16Vec2::new(-10, 4);
        let image = render_biome_map(42, origin, 20, 20, 0);
        for (px, py) in [(0, 0), (7, 13), (19, 19)] {
            let pos = I16Vec3::new(origin.x + px as i16, 0, origin.y + py as i16);
            let biome = BlockMakeData::classified(42, pos).biome.expect("classified");
            let [r, g, b, _] = image.get_pixel(px, py);
            assert_eq!([r, g, b], biome_color(biome), "pixel ({px}, {py})");
        }
    }

    #[test]
    fn test_cave_slice_has_two_states() {
        let image = render_cave_slice(42, I16Vec2::ZERO, 192, 192, -30);
        assert_eq!(
            image.unique_color_count(),
            2,
            "Cave slice should show both cave and rock"
        );
    }

    #[test]
    fn test_vegetation_dimensions() {
        let image = render_vegetation(42, I16Vec2::new(-4, -4), 8, 8);
        assert_eq!(image.dimensions(), (8, 8));
        assert!(image.pixels.chunks_exact(4).all(|p| p[3] == 255));
    }
}
