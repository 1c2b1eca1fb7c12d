use std::collections::VecDeque;

use rand::SeedableRng;

use super::*;
use crate::core::PlagueError;
use crate::domain::{Infection, IMMUNE_MAX};

/// Dice that replays queued draws and falls back to zero once exhausted.
#[derive(Default)]
struct ScriptedDice {
    below: VecDeque<usize>,
    unit: VecDeque<f64>,
}

impl ScriptedDice {
    fn new(below: &[usize], unit: &[f64]) -> Self {
        Self {
            below: below.iter().copied().collect(),
            unit: unit.iter().copied().collect(),
        }
    }
}

impl Dice for ScriptedDice {
    fn below(&mut self, n: usize) -> usize {
        self.below.pop_front().unwrap_or(0) % n
    }

    fn unit(&mut self) -> f64 {
        self.unit.pop_front().unwrap_or(0.0)
    }
}

fn uniform_board(width: u32, height: u32, cell: Cell) -> Grid {
    Grid::filled(width, height, cell).unwrap()
}

fn no_mutation() -> PlagueConfig {
    PlagueConfig {
        mutation: 0.0,
        ..PlagueConfig::default()
    }
}

#[test]
fn forced_mutation_on_quiet_board_infects_exactly_one_cell() {
    let grid = uniform_board(4, 4, Cell::new(5, Infection::Healthy, 0, 0.0));
    let config = PlagueConfig {
        mutation: 1.0,
        ..PlagueConfig::default()
    };
    // unit draws: mutation roll, reach, magnitude (all zero -> zero offset)
    // below draws: target index 0, sign, then cell 0's infection direction
    let dice = ScriptedDice::new(&[0, 0, 3], &[0.0, 0.0, 0.0]);
    let mut world = PlagueCore::from_grid(grid, config, dice).unwrap();

    let report = world.tick().unwrap();

    assert_eq!(report.generation, 1);
    assert_eq!(report.mutation, Some(MutationEvent { index: 0, code: 0 }));
    assert_eq!(report.stats.infected_count, 1);
    let cell0 = world.cell(0).unwrap();
    assert_eq!(cell0.infected, Infection::Infected);
    assert_eq!(cell0.life, 4);
    assert!(world.grid().cells()[1..].iter().all(|c| c.life == 4 && !c.is_infected()));
}

#[test]
fn mutated_strain_spreads_to_its_chosen_neighbor() {
    let grid = uniform_board(4, 4, Cell::new(5, Infection::Healthy, 0, 0.0));
    let config = PlagueConfig {
        mutation: 1.0,
        ..PlagueConfig::default()
    };
    // Mutate index 5 by +64 (reach 0.5*128, magnitude 1.0*64, sign +),
    // then cell 5 attacks South (index 9).
    let dice = ScriptedDice::new(&[5, 0, 3], &[0.0, 0.5, 1.0]);
    let mut world = PlagueCore::from_grid(grid, config, dice).unwrap();

    let report = world.tick().unwrap();

    assert_eq!(report.mutation, Some(MutationEvent { index: 5, code: 64 }));
    assert_eq!(report.stats.infected_count, 2);
    let victim = world.cell(9).unwrap();
    assert_eq!(victim.infected, Infection::Infected);
    assert_eq!(victim.code, 63);
    assert_eq!(victim.immune, 60.0);
    assert_eq!(victim.life, 4);
}

#[test]
fn victim_behind_the_scan_keeps_its_aged_life() {
    let mut grid = uniform_board(4, 4, Cell::new(5, Infection::Healthy, 0, 0.0));
    grid[5] = Cell::new(5, Infection::Infected, 100, 0.0);
    // Cell 5 attacks North (index 1), which the scan has already aged.
    let dice = ScriptedDice::new(&[2], &[]);
    let mut world = PlagueCore::from_grid(grid, no_mutation(), dice).unwrap();

    world.tick().unwrap();

    let victim = world.cell(1).unwrap();
    assert_eq!(victim.infected, Infection::Infected);
    assert_eq!(victim.life, 4);
    assert_eq!(victim.code, 99);
    assert_eq!(world.stats().infected_count, 2);
}

#[test]
fn two_attackers_cannot_share_a_victim() {
    let mut grid = uniform_board(4, 4, Cell::new(5, Infection::Healthy, 0, 0.0));
    // Both 5 and 13 border 9: 5 from the North, 13 from the South.
    grid[5] = Cell::new(5, Infection::Infected, 100, 0.0);
    grid[13] = Cell::new(5, Infection::Infected, 200, 0.0);
    let dice = ScriptedDice::new(&[3, 2], &[]);
    let mut world = PlagueCore::from_grid(grid, no_mutation(), dice).unwrap();

    world.tick().unwrap();

    let victim = world.cell(9).unwrap();
    assert_eq!(victim.code, 99, "first attacker in scan order wins");
    assert_eq!(world.stats().infected_count, 3);
    assert!(world.grid().cells().iter().all(|c| c.infected != Infection::PendingInfected));
}

#[test]
fn vaccination_stops_a_spread_that_would_otherwise_succeed() {
    let build = |vaccinated: bool| {
        let mut grid = uniform_board(4, 4, Cell::new(5, Infection::Healthy, 0, 30.0));
        grid[5] = Cell::new(5, Infection::Infected, 100, 0.0);
        let config = PlagueConfig {
            is_vaccinated: vaccinated,
            ..no_mutation()
        };
        PlagueCore::from_grid(grid, config, ScriptedDice::new(&[1], &[])).unwrap()
    };

    let mut open = build(false);
    open.tick().unwrap();
    assert_eq!(open.stats().infected_count, 2);

    let mut protected = build(true);
    protected.tick().unwrap();
    assert_eq!(protected.stats().infected_count, 1);
}

#[test]
fn expired_cells_are_reborn_from_previous_generation() {
    let mut grid = uniform_board(3, 3, Cell::new(5, Infection::Healthy, 40, 50.0));
    grid[4] = Cell::new(0, Infection::Infected, 200, 128.0);
    // life draw 2, neighbors West (3) and East (5)
    let dice = ScriptedDice::new(&[2, 0, 1], &[]);
    let mut world = PlagueCore::from_grid(grid, no_mutation(), dice).unwrap();

    world.tick().unwrap();

    let reborn = world.cell(4).unwrap();
    assert_eq!(reborn.life, 2);
    assert_eq!(reborn.infected, Infection::Healthy);
    assert_eq!(reborn.code, 40);
    assert_eq!(reborn.immune, 50.0 - world.config.immune_entropy);
}

#[test]
fn invalid_config_rejects_tick_without_touching_state() {
    let mut world = PlagueCore::with_seed(8, 8, PlagueConfig::default(), 42).unwrap();
    world.tick().unwrap();
    let before = world.grid().clone();
    let stats_before = world.stats().clone();

    world.config.life_max = 0;
    assert!(matches!(world.tick(), Err(PlagueError::InvalidSetting { name: "LIFE_MAX", .. })));
    assert_eq!(world.generation(), 1);
    assert_eq!(world.grid(), &before);
    assert_eq!(world.stats(), &stats_before);

    world.config.life_max = 20;
    assert!(world.tick().is_ok());
    assert_eq!(world.generation(), 2);
}

#[test]
fn construction_rejects_bad_arguments() {
    assert!(matches!(PlagueCore::new(1, 5), Err(PlagueError::InvalidDimensions { .. })));
    let config = PlagueConfig {
        mutation: 2.0,
        ..PlagueConfig::default()
    };
    assert!(PlagueCore::with_seed(4, 4, config, 1).is_err());
}

#[test]
fn invariants_hold_over_many_ticks() {
    let config = PlagueConfig {
        mutation: 0.5,
        ..PlagueConfig::default()
    };
    let mut world = PlagueCore::with_seed(24, 16, config, 0xC0FFEE).unwrap();

    for _ in 0..300 {
        let report = world.tick().unwrap();
        let cells = world.grid().cells();

        assert_eq!(report.stats.infected_count as usize, world.grid().infected_count());
        assert_eq!(report.stats.color_histogram.iter().sum::<u32>() as usize, cells.len());
        for cell in cells {
            assert!((0.0..=IMMUNE_MAX).contains(&cell.immune));
            assert!(cell.life < world.config.life_max);
            assert_ne!(cell.infected, Infection::PendingInfected);
        }
    }
}

#[test]
fn same_seed_same_trajectory() {
    let run = |seed: u64| {
        let mut world = PlagueCore::with_seed(20, 20, PlagueConfig::default(), seed).unwrap();
        let reports: Vec<TickReport> = (0..100).map(|_| world.tick().unwrap()).collect();
        (reports, world.grid().clone())
    };

    let (reports_a, grid_a) = run(7);
    let (reports_b, grid_b) = run(7);
    assert_eq!(reports_a, reports_b);
    assert_eq!(grid_a, grid_b);

    let (_, grid_c) = run(8);
    assert_ne!(grid_a, grid_c);
}

#[test]
fn history_samples_every_tenth_generation() {
    let mut world = PlagueCore::with_seed(10, 10, PlagueConfig::default(), 3).unwrap();
    assert_eq!(world.step_n(25).unwrap(), 25);
    let generations: Vec<u64> = world.history().iter().map(|s| s.generation).collect();
    assert_eq!(generations, vec![10, 20]);
}

#[test]
fn step_n_stops_on_rejected_config() {
    let mut world = PlagueCore::with_seed(6, 6, PlagueConfig::default(), 3).unwrap();
    world.config.mutation = f32::NAN;
    assert!(world.step_n(5).is_err());
    assert_eq!(world.generation(), 0);
}

#[test]
fn reset_rebuilds_a_newborn_board() {
    let config = PlagueConfig {
        mutation: 1.0,
        ..PlagueConfig::default()
    };
    let mut world = PlagueCore::with_seed(6, 6, config, 9).unwrap();
    world.step_n(30).unwrap();
    world.reset().unwrap();

    assert_eq!(world.generation(), 0);
    assert!(world.history().is_empty());
    assert!(world.mutation().is_none());
    assert_eq!(world.stats().infected_count, 0);
    assert!(world.grid().cells().iter().all(|c| c.code == 0 && c.immune == 0.0));
}

#[test]
fn reseed_reproduces_a_fresh_run() {
    let mut fresh = PlagueCore::with_seed(12, 12, PlagueConfig::default(), 77).unwrap();
    fresh.step_n(15).unwrap();

    let mut reused = PlagueCore::with_seed(12, 12, PlagueConfig::default(), 1).unwrap();
    reused.step_n(40).unwrap();
    reused.reseed(77).unwrap();
    assert_eq!(reused.generation(), 0);
    reused.step_n(15).unwrap();

    assert_eq!(reused.grid(), fresh.grid());
    assert_eq!(reused.stats(), fresh.stats());
}

#[test]
fn settings_apply_from_the_next_tick() {
    let mut world = PlagueCore::with_seed(6, 6, PlagueConfig::default(), 4).unwrap();
    world.set_setting("MUTATION", 1.0).unwrap();
    assert!(world.set_setting("MUTATION", 3.0).is_err());
    assert_eq!(world.get_setting("MUTATION"), Some(1.0));

    let report = world.tick().unwrap();
    assert!(report.mutation.is_some());
    assert_eq!(world.mutation(), report.mutation);
}

#[test]
fn snapshot_mirrors_published_generation() {
    let mut world = PlagueCore::with_seed(5, 4, PlagueConfig::default(), 12).unwrap();
    world.step_n(3).unwrap();

    assert_eq!(world.extract_snapshot(), 20);
    let render = world.render_buffers();
    for (i, cell) in world.grid().cells().iter().enumerate() {
        assert_eq!(render.codes()[i], cell.code);
        assert_eq!(render.infected()[i], cell.is_infected() as u8);
        assert_eq!(render.life()[i] as u32, cell.life);
        assert_eq!(render.immunity()[i], immunity_level(cell.immune));
    }
}

#[test]
fn perf_metrics_count_the_pass() {
    let mut world = PlagueCore::with_seed(8, 8, PlagueConfig::default(), 5).unwrap();
    assert_eq!(world.get_perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.tick().unwrap();
    let perf = world.get_perf_stats();
    assert_eq!(perf.cells_processed() + perf.cells_skipped(), 64);
    assert!(perf.cells_skipped() <= perf.infections());
    assert!(perf.tick_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats(), PerfStats::default());
}

#[test]
fn scripted_and_seeded_dice_share_the_engine() {
    let grid = uniform_board(4, 4, Cell::newborn(3));
    let mut world = PlagueCore::from_grid(grid, no_mutation(), rand::rngs::SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(world.step_n(4).unwrap(), 4);
    assert_eq!(world.stats().infected_count, 0);
}
