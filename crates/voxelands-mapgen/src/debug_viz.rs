//! Top-down images of the generated fields, for eyeballing what a seed does.
//!
//! Provides [`DebugImage`] and renderers for ground height, biomes, cave
//! slices and tree density. Heights and caves are drawn one pixel per node
//! column; biomes and vegetation one pixel per block column.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{
    biome_color, height_to_color, render_biome_map, render_cave_slice, render_heightmap,
    render_vegetation,
};
