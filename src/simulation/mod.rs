//! Plague simulation core
//!
//! `PlagueCore` owns everything a run needs: the two generation buffers, the
//! live config, the random source, and the last tick's outputs. One call to
//! [`PlagueCore::tick`] advances one generation:
//!
//! 1. maybe inject a mutation into the current buffer
//! 2. scan every cell in ascending order, writing the next buffer
//! 3. summarise the next buffer
//! 4. swap buffers
//!
//! Readers only ever see the buffer published by the last completed tick.

use rand::rngs::SmallRng;

use crate::core::PlagueResult;
use crate::domain::{Cell, PlagueConfig};
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/mutation.rs"]
mod mutation;
#[path = "step/resurrect.rs"]
mod resurrect;
#[path = "step/infect.rs"]
mod infect;
#[path = "step/step.rs"]
mod step;
#[path = "stats/stats.rs"]
mod stats;
#[path = "stats/history.rs"]
mod history;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Plague;
pub use history::{StatsHistory, StatsSample, HISTORY_CAPACITY, HISTORY_SAMPLE_EVERY};
pub use infect::{overcomes, virulence};
pub use init::DEFAULT_SEED;
pub use mutation::{MutationEvent, MUTATION_REACH};
pub use perf_stats::PerfStats;
pub use random::Dice;
pub use render_extract::{immunity_level, RenderBuffers};
pub use stats::TickStats;
pub use step::TickReport;

use perf_timer::PerfTimer;

/// The simulation context
pub struct PlagueCore<D: Dice = SmallRng> {
    /// Live parameters. May be written directly between ticks; every tick
    /// re-validates them before touching state.
    pub config: PlagueConfig,
    current: Grid,
    next: Grid,
    dice: D,

    generation: u64,
    last_stats: TickStats,
    last_mutation: Option<MutationEvent>,
    history: StatsHistory,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl PlagueCore<SmallRng> {
    /// Fresh board of `width x height` newborn cells with default settings.
    pub fn new(width: u32, height: u32) -> PlagueResult<Self> {
        Self::with_seed(width, height, PlagueConfig::default(), DEFAULT_SEED)
    }

    pub fn with_seed(width: u32, height: u32, config: PlagueConfig, seed: u64) -> PlagueResult<Self> {
        init::create_plague_core(width, height, config, seed)
    }

    /// Reset onto a fresh random stream: same as [`PlagueCore::reset`] after
    /// reseeding, so the run is reproducible from `seed` alone.
    pub fn reseed(&mut self, seed: u64) -> PlagueResult<()> {
        init::reseed(self, seed)
    }
}

impl<D: Dice> PlagueCore<D> {
    /// Start from a prepared generation and an explicit random source.
    pub fn from_grid(grid: Grid, config: PlagueConfig, dice: D) -> PlagueResult<Self> {
        init::create_plague_core_from_grid(grid, config, dice)
    }

    pub fn width(&self) -> u32 { self.current.width() }

    pub fn height(&self) -> u32 { self.current.height() }

    pub fn n_cells(&self) -> usize { self.current.size() }

    /// Completed ticks since construction or the last reset.
    pub fn generation(&self) -> u64 { self.generation }

    /// The generation published by the last completed tick.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.current.get(idx)
    }

    /// Stats of the published generation.
    pub fn stats(&self) -> &TickStats {
        &self.last_stats
    }

    /// Mutation injected during the last tick, if any.
    pub fn mutation(&self) -> Option<MutationEvent> {
        self.last_mutation
    }

    pub fn history(&self) -> &StatsHistory {
        &self.history
    }

    /// Advance one generation. On error nothing changes.
    pub fn tick(&mut self) -> PlagueResult<TickReport> {
        step::step(self)
    }

    /// Run up to `n` ticks, stopping at the first rejected one.
    /// Returns how many ticks completed.
    pub fn step_n(&mut self, n: u32) -> PlagueResult<u32> {
        for done in 0..n {
            if let Err(err) = self.tick() {
                if done == 0 {
                    return Err(err);
                }
                return Ok(done);
            }
        }
        Ok(n)
    }

    /// Fresh newborn board of the same size; clears generation, stats and history.
    pub fn reset(&mut self) -> PlagueResult<()> {
        init::reset(self)
    }

    pub fn set_config(&mut self, config: PlagueConfig) -> PlagueResult<()> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> PlagueResult<()> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    /// Set one control-panel key (`IMMUNE_ENTROPY`, `MUTATION`, ...).
    pub fn set_setting(&mut self, name: &str, value: f64) -> PlagueResult<()> {
        settings::set_setting(self, name, value)
    }

    pub fn get_setting(&self, name: &str) -> Option<f64> {
        settings::get_setting(self, name)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Copy the published generation into the render transfer buffers.
    pub fn extract_snapshot(&mut self) -> usize {
        render_extract::extract_snapshot(self)
    }

    pub fn render_buffers(&self) -> &RenderBuffers {
        &self.render
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
