//! Command-line arguments of the map generator tool.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Renders preview images of a Voxelands world seed.
///
/// Flags override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "voxelands-mapgen", about = "Voxelands terrain and biome preview")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Preview width, in blocks.
    #[arg(long)]
    pub width: Option<u32>,

    /// Preview height, in blocks.
    #[arg(long)]
    pub height: Option<u32>,

    /// Block x of the preview's top-left corner.
    #[arg(long, allow_hyphen_values = true)]
    pub origin_x: Option<i16>,

    /// Block z of the preview's top-left corner.
    #[arg(long, allow_hyphen_values = true)]
    pub origin_z: Option<i16>,

    /// Block height of the biome map.
    #[arg(long, allow_hyphen_values = true)]
    pub block_y: Option<i16>,

    /// Output directory for the PNG files.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Worker threads (0 = one per spare core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(w) = args.width {
            self.preview.width = w;
        }
        if let Some(h) = args.height {
            self.preview.height = h;
        }
        if let Some(x) = args.origin_x {
            self.preview.origin_x = x;
        }
        if let Some(z) = args.origin_z {
            self.preview.origin_z = z;
        }
        if let Some(y) = args.block_y {
            self.preview.block_y = y;
        }
        if let Some(ref dir) = args.output {
            self.preview.output_dir = dir.clone();
        }
        if let Some(threads) = args.threads {
            self.generation.worker_threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
