use tracing::warn;

use crate::core::PlagueResult;
use crate::domain::{Infection, PlagueConfig};
use crate::grid::Grid;

use super::infect::{try_infect, Attempt};
use super::mutation::{inject, MutationEvent};
use super::resurrect::resurrect;
use super::stats::TickStats;
use super::{Dice, PerfTimer, PlagueCore};

/// What a finished tick hands to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub generation: u64,
    pub stats: TickStats,
    pub mutation: Option<MutationEvent>,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PassCounters {
    pub(crate) processed: u32,
    pub(crate) skipped: u32,
    pub(crate) resurrected: u32,
    pub(crate) attempts: u32,
    pub(crate) infections: u32,
}

/// Advance one generation.
///
/// The config is validated before anything is touched; a rejected tick
/// leaves every buffer at the prior generation.
pub(super) fn step<D: Dice>(world: &mut PlagueCore<D>) -> PlagueResult<TickReport> {
    if let Err(err) = world.config.validate() {
        warn!(%err, generation = world.generation, "tick rejected: invalid config");
        return Err(err);
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let tick_timer = PerfTimer::start(perf_on);

    // === MUTATION ===
    let t0 = PerfTimer::start(perf_on);
    let mutation = inject(&mut world.current, world.config.mutation, &mut world.dice);
    let mutation_ms = t0.elapsed_ms();

    // === PER-CELL PASS ===
    let t0 = PerfTimer::start(perf_on);
    let counters = run_pass(&mut world.current, &mut world.next, &world.config, &mut world.dice);
    let pass_ms = t0.elapsed_ms();

    // === STATS ===
    let t0 = PerfTimer::start(perf_on);
    let stats = TickStats::from_cells(world.next.cells());
    let stats_ms = t0.elapsed_ms();

    // `next` is now the published generation
    std::mem::swap(&mut world.current, &mut world.next);
    world.generation += 1;
    world
        .history
        .record(world.generation, &stats, world.current.size());
    world.last_stats = stats.clone();
    world.last_mutation = mutation;

    if perf_on {
        let perf = &mut world.perf_stats;
        perf.mutation_ms = mutation_ms;
        perf.pass_ms = pass_ms;
        perf.stats_ms = stats_ms;
        perf.cells_processed = counters.processed;
        perf.cells_skipped = counters.skipped;
        perf.cells_resurrected = counters.resurrected;
        perf.infection_attempts = counters.attempts;
        perf.infections = counters.infections;
        perf.mutated = mutation.is_some();
        perf.tick_ms = tick_timer.elapsed_ms();
    }

    Ok(TickReport {
        generation: world.generation,
        stats,
        mutation,
    })
}

/// One ascending scan over every cell, writing the next generation.
///
/// Order matters: a successful infection marks its victim `PendingInfected`
/// in `current`, and every later index in the same scan observes that mark.
pub(crate) fn run_pass<D: Dice>(
    current: &mut Grid,
    next: &mut Grid,
    config: &PlagueConfig,
    dice: &mut D,
) -> PassCounters {
    let mut counters = PassCounters::default();

    for i in 0..current.size() {
        let cell = current[i];

        // Claimed by an earlier attacker this tick; its next slot is already written.
        if cell.infected == Infection::PendingInfected {
            counters.skipped += 1;
            continue;
        }
        counters.processed += 1;

        if cell.life == 0 {
            next[i] = resurrect(current, i, config, dice);
            counters.resurrected += 1;
            continue;
        }

        next[i] = cell.aged();

        if cell.infected == Infection::Infected {
            counters.attempts += 1;
            if let Attempt::Infected(target) = try_infect(current, next, i, config, dice) {
                debug_assert_ne!(target, i);
                counters.infections += 1;
            }
        }
    }

    counters
}
