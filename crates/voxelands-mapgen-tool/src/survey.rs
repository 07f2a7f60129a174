//! Surveys every block of the preview region on the worker pool and tallies
//! the results.

use std::collections::HashMap;
use std::time::Duration;

use glam::I16Vec3;
use voxelands_config::Config;
use voxelands_mapgen::{AsyncBlockSurveyor, Biome, BlockSurveyTask, SurveyedBlock};

use crate::error::ToolError;

/// Tally of surveyed blocks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Census {
    pub biomes: HashMap<Biome, usize>,
    pub underground: usize,
    pub blocks: usize,
    pub total_time_us: u64,
}

impl Census {
    fn record(&mut self, block: &SurveyedBlock) {
        if let Some(biome) = block.data.biome {
            *self.biomes.entry(biome).or_default() += 1;
        }
        if block.underground {
            self.underground += 1;
        }
        self.blocks += 1;
        self.total_time_us += block.generation_time_us;
    }

    /// Emits one event per biome present, in classifier order.
    pub fn log(&self) {
        for biome in Biome::ALL {
            if let Some(&count) = self.biomes.get(&biome) {
                let percent = count as f64 * 100.0 / self.blocks.max(1) as f64;
                tracing::info!(%biome, count, percent, "biome census");
            }
        }
        tracing::info!(
            blocks = self.blocks,
            underground = self.underground,
            avg_us = self.total_time_us / self.blocks.max(1) as u64,
            "survey complete"
        );
    }
}

fn start_surveyor(config: &Config) -> std::io::Result<AsyncBlockSurveyor> {
    let generation = &config.generation;
    if generation.worker_threads == 0 {
        return AsyncBlockSurveyor::with_defaults();
    }
    AsyncBlockSurveyor::new(
        generation.worker_threads,
        generation.max_in_flight.max(1),
        generation.result_capacity.max(1),
    )
}

/// Blocks of the preview region at `block_y`, nearest to the center first.
fn region_tasks(config: &Config) -> Vec<BlockSurveyTask> {
    let preview = &config.preview;
    let center_x = i64::from(preview.width) / 2;
    let center_z = i64::from(preview.height) / 2;

    let mut tasks = Vec::with_capacity(preview.width as usize * preview.height as usize);
    for dz in 0..preview.height {
        for dx in 0..preview.width {
            let ox = i64::from(dx) - center_x;
            let oz = i64::from(dz) - center_z;
            tasks.push(BlockSurveyTask {
                seed: config.world.seed,
                blockpos: I16Vec3::new(
                    preview.origin_x.wrapping_add(dx as i16),
                    preview.block_y,
                    preview.origin_z.wrapping_add(dz as i16),
                ),
                priority: (ox * ox + oz * oz) as u64,
            });
        }
    }
    tasks.sort_by_key(|task| task.priority);
    tasks
}

/// Surveys the preview region, feeding the pool as fast as it drains.
pub fn survey_region(config: &Config) -> Result<Census, ToolError> {
    let surveyor = start_surveyor(config).map_err(ToolError::Workers)?;
    let tasks = region_tasks(config);
    tracing::info!(blocks = tasks.len(), seed = config.world.seed, "surveying region");
    feed(&surveyor, tasks)
}

/// Submits `tasks` in order, retrying whenever the queue is full, until every
/// block is back. Fails once results stop arriving and a worker is gone.
fn feed(surveyor: &AsyncBlockSurveyor, tasks: Vec<BlockSurveyTask>) -> Result<Census, ToolError> {
    let total = tasks.len();
    let started = surveyor.worker_count();
    let mut census = Census::default();
    let mut pending = tasks.into_iter().peekable();

    while census.blocks < total {
        while let Some(&task) = pending.peek() {
            if surveyor.submit(task).is_err() {
                break;
            }
            pending.next();
        }

        let results = surveyor.drain_results();
        if results.is_empty() {
            if started == 0 || surveyor.worker_count() < started {
                let remaining = total - census.blocks;
                tracing::error!(remaining, workers = surveyor.worker_count(), "survey workers lost");
                return Err(ToolError::WorkersLost { remaining });
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        for block in &results {
            census.record(block);
        }
    }

    Ok(census)
}
