use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::core::PlagueResult;
use crate::domain::PlagueConfig;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::render_extract::RenderBuffers;
use super::resurrect::newborn_grid;
use super::stats::TickStats;
use super::history::StatsHistory;
use super::{Dice, PlagueCore};

/// Seed used when the host does not supply one.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_B1A6_0E;

pub(super) fn create_plague_core(
    width: u32,
    height: u32,
    config: PlagueConfig,
    seed: u64,
) -> PlagueResult<PlagueCore<SmallRng>> {
    config.validate()?;
    let mut dice = SmallRng::seed_from_u64(seed);
    let current = newborn_grid(width, height, &config, &mut dice)?;
    debug!(width, height, seed, "plague core created");
    Ok(assemble(current, config, dice))
}

pub(super) fn create_plague_core_from_grid<D: Dice>(
    grid: Grid,
    config: PlagueConfig,
    dice: D,
) -> PlagueResult<PlagueCore<D>> {
    config.validate()?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        "plague core created from seeded grid"
    );
    Ok(assemble(grid, config, dice))
}

/// Rebuild both buffers from scratch and forget all history.
pub(super) fn reset<D: Dice>(world: &mut PlagueCore<D>) -> PlagueResult<()> {
    world.config.validate()?;
    let current = newborn_grid(
        world.current.width(),
        world.current.height(),
        &world.config,
        &mut world.dice,
    )?;
    world.next = current.clone();
    world.current = current;
    world.generation = 0;
    world.last_stats = TickStats::from_cells(world.current.cells());
    world.last_mutation = None;
    world.history.clear();
    world.perf_stats.reset();
    debug!("plague core reset");
    Ok(())
}

pub(super) fn reseed(world: &mut PlagueCore<SmallRng>, seed: u64) -> PlagueResult<()> {
    world.config.validate()?;
    world.dice = SmallRng::seed_from_u64(seed);
    debug!(seed, "plague core reseeded");
    reset(world)
}

fn assemble<D: Dice>(current: Grid, config: PlagueConfig, dice: D) -> PlagueCore<D> {
    let size = current.size();
    PlagueCore {
        config,
        next: current.clone(),
        last_stats: TickStats::from_cells(current.cells()),
        current,
        dice,
        generation: 0,
        last_mutation: None,
        history: StatsHistory::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers::with_capacity(size),
    }
}
