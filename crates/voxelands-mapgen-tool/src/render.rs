//! Writes the preview images of a region as PNG files.

use std::path::{Path, PathBuf};

use glam::{I16Vec2, I16Vec3};
use voxelands_config::Config;
use voxelands_mapgen::debug_viz::{
    DebugImage, render_biome_map, render_cave_slice, render_heightmap, render_vegetation,
};
use voxelands_mapgen::{MAP_BLOCKSIZE, block_node_min};

use crate::error::ToolError;

/// Renders every preview image into `config.preview.output_dir` and returns
/// the written paths.
pub fn render_previews(config: &Config) -> Result<Vec<PathBuf>, ToolError> {
    let preview = &config.preview;
    let seed = config.world.seed;
    let out = &preview.output_dir;
    std::fs::create_dir_all(out).map_err(|source| ToolError::OutputDir {
        path: out.clone(),
        source,
    })?;

    let origin_block = I16Vec2::new(preview.origin_x, preview.origin_z);
    let node_min = block_node_min(I16Vec3::new(
        preview.origin_x,
        preview.block_y,
        preview.origin_z,
    ));
    let node_origin = I16Vec2::new(node_min.x, node_min.z);
    let side = MAP_BLOCKSIZE as u32;
    let cave_y = node_min.y.wrapping_add(MAP_BLOCKSIZE / 2);

    let images = [
        (
            "heightmap.png",
            render_heightmap(seed, node_origin, preview.width * side, preview.height * side),
        ),
        (
            "biomes.png",
            render_biome_map(seed, origin_block, preview.width, preview.height, preview.block_y),
        ),
        (
            "caves.png",
            render_cave_slice(
                seed,
                node_origin,
                preview.width * side,
                preview.height * side,
                cave_y,
            ),
        ),
        (
            "vegetation.png",
            render_vegetation(seed, origin_block, preview.width, preview.height),
        ),
    ];

    let mut written = Vec::with_capacity(images.len());
    for (name, image) in images {
        let path = out.join(name);
        write_png(name, image, &path)?;
        tracing::info!(path = %path.display(), "wrote preview");
        written.push(path);
    }
    Ok(written)
}

fn write_png(name: &'static str, image: DebugImage, path: &Path) -> Result<(), ToolError> {
    let (width, height) = image.dimensions();
    let buffer = image::RgbaImage::from_raw(width, height, image.into_raw()).ok_or(
        ToolError::BufferSize {
            name,
            width,
            height,
        },
    )?;
    buffer.save(path)?;
    Ok(())
}
