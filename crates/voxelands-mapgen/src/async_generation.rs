//! Background block surveying on a fixed thread pool.
//!
//! Each worker owns the `BlockMakeData` of the block it is working on, so
//! blocks are surveyed in parallel without sharing any mutable state. The
//! noise fields are pure, so a block's result never depends on which worker
//! picked it up or in what order.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use dashmap::DashMap;
use glam::I16Vec3;

use crate::WorldSeed;
use crate::block::BlockMakeData;
use crate::sector::block_is_underground;

/// A request to survey one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSurveyTask {
    pub seed: WorldSeed,
    pub blockpos: I16Vec3,
    /// Lower values are meant to be surveyed first, e.g. squared distance
    /// to the player. Workers take tasks in submission order.
    pub priority: u64,
}

/// The outcome of surveying a block.
#[derive(Clone, Copy, Debug)]
pub struct SurveyedBlock {
    /// Generation context with the biome filled in.
    pub data: BlockMakeData,
    /// Whether the block sits below the lowest ground of its sector.
    pub underground: bool,
    /// Wall-clock survey time, in microseconds.
    pub generation_time_us: u64,
}

struct QueuedTask {
    task: BlockSurveyTask,
    cancelled: Arc<AtomicBool>,
}

/// Decrements the live worker count when a worker exits, including by panic.
struct WorkerGuard(Arc<AtomicUsize>);

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Surveys blocks across a pool of worker threads.
pub struct AsyncBlockSurveyor {
    task_sender: Sender<QueuedTask>,
    /// Held so the queue stays connected while no worker is running.
    _task_receiver: Receiver<QueuedTask>,
    result_receiver: Receiver<SurveyedBlock>,
    /// Cancellation flag of every queued or running task.
    active_tasks: Arc<DashMap<I16Vec3, Arc<AtomicBool>>>,
    in_flight: Arc<AtomicU64>,
    live_workers: Arc<AtomicUsize>,
}

impl AsyncBlockSurveyor {
    /// Starts `thread_count` workers.
    ///
    /// At most `max_concurrent * 2` tasks wait in the queue; further
    /// submissions are rejected. Up to `result_capacity` finished blocks
    /// are buffered before workers block on delivery. With no workers the
    /// queue still accepts tasks until it is full; nothing completes them.
    pub fn new(
        thread_count: usize,
        max_concurrent: usize,
        result_capacity: usize,
    ) -> io::Result<Self> {
        let (task_sender, task_receiver) = bounded::<QueuedTask>(max_concurrent * 2);
        let (result_sender, result_receiver) = bounded::<SurveyedBlock>(result_capacity);
        let in_flight = Arc::new(AtomicU64::new(0));
        let live_workers = Arc::new(AtomicUsize::new(0));

        for index in 0..thread_count {
            let receiver = task_receiver.clone();
            let sender = result_sender.clone();
            let in_flight = Arc::clone(&in_flight);
            let guard = WorkerGuard(Arc::clone(&live_workers));
            live_workers.fetch_add(1, Ordering::Relaxed);

            std::thread::Builder::new()
                .name(format!("block-survey-{index}"))
                .spawn(move || {
                    let _guard = guard;
                    while let Ok(queued) = receiver.recv() {
                        if queued.cancelled.load(Ordering::Relaxed) {
                            tracing::trace!(blockpos = %queued.task.blockpos, "skipped cancelled survey");
                            in_flight.fetch_sub(1, Ordering::Relaxed);
                            continue;
                        }

                        let block = survey_block_sync(&queued.task);

                        if !queued.cancelled.load(Ordering::Relaxed) {
                            let _ = sender.send(block);
                        }
                        in_flight.fetch_sub(1, Ordering::Relaxed);
                    }
                    tracing::debug!(worker = index, "block survey worker exiting");
                })?;
        }

        tracing::debug!(
            threads = thread_count,
            max_concurrent,
            result_capacity,
            "started block surveyor"
        );

        Ok(Self {
            task_sender,
            _task_receiver: task_receiver,
            result_receiver,
            active_tasks: Arc::new(DashMap::new()),
            in_flight,
            live_workers,
        })
    }

    /// A surveyor sized to the machine, leaving two cores free.
    pub fn with_defaults() -> io::Result<Self> {
        let cpus = num_cpus::get().max(2);
        Self::new((cpus - 2).max(1), 64, 128)
    }

    /// Queues a block for surveying. Hands the task back if the queue is full.
    pub fn submit(&self, task: BlockSurveyTask) -> Result<(), BlockSurveyTask> {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.active_tasks
            .insert(task.blockpos, Arc::clone(&cancelled));
        self.in_flight.fetch_add(1, Ordering::Relaxed);

        self.task_sender
            .try_send(QueuedTask { task, cancelled })
            .map_err(|e| {
                self.in_flight.fetch_sub(1, Ordering::Relaxed);
                self.active_tasks.remove(&task.blockpos);
                match e {
                    TrySendError::Full(queued) => {
                        tracing::debug!(blockpos = %task.blockpos, "survey queue full, rejected task");
                        queued.task
                    }
                    TrySendError::Disconnected(queued) => {
                        tracing::warn!(blockpos = %task.blockpos, "survey queue closed, rejected task");
                        queued.task
                    }
                }
            })
    }

    /// Cancels a queued or running survey. Finished surveys are unaffected.
    pub fn cancel(&self, blockpos: &I16Vec3) {
        if let Some((_, cancelled)) = self.active_tasks.remove(blockpos) {
            cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// Takes every finished survey without blocking.
    pub fn drain_results(&self) -> Vec<SurveyedBlock> {
        let mut results = Vec::new();
        while let Ok(block) = self.result_receiver.try_recv() {
            self.active_tasks.remove(&block.data.blockpos);
            results.push(block);
        }
        results
    }

    /// Tasks queued or executing.
    pub fn in_flight_count(&self) -> u64 {
        self.in_flight.load(Ordering::Relaxed)
    }

    pub fn is_pending(&self, blockpos: &I16Vec3) -> bool {
        self.active_tasks.contains_key(blockpos)
    }

    /// Workers still running. Drops below the spawned count only if a
    /// worker panicked.
    pub fn worker_count(&self) -> usize {
        self.live_workers.load(Ordering::Relaxed)
    }
}

/// Surveys one block on the calling thread.
pub fn survey_block_sync(task: &BlockSurveyTask) -> SurveyedBlock {
    let start = std::time::Instant::now();
    let data = BlockMakeData::classified(task.seed, task.blockpos);
    let underground = block_is_underground(task.seed, task.blockpos);
    let generation_time_us = start.elapsed().as_micros() as u64;

    SurveyedBlock {
        data,
        underground,
        generation_time_us,
    }
}
