use std::collections::VecDeque;

use serde::Serialize;

use crate::domain::code::COLOR_BUCKETS;
use crate::domain::IMMUNE_MAX;

use super::stats::TickStats;

/// Generations between two recorded samples.
pub const HISTORY_SAMPLE_EVERY: u64 = 10;
/// Samples kept before the oldest is dropped.
pub const HISTORY_CAPACITY: usize = 200;

/// A stats snapshot normalised for the trend graphs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSample {
    pub generation: u64,
    /// Mean immunity as a percentage of the maximum
    pub immunity_pct: f64,
    /// Infected cells as a percentage of the board
    pub infected_pct: f64,
    pub color_histogram: [u32; COLOR_BUCKETS],
}

impl StatsSample {
    pub fn from_stats(generation: u64, stats: &TickStats, n_cells: usize) -> Self {
        let n = n_cells.max(1) as f64;
        Self {
            generation,
            immunity_pct: 100.0 * stats.immunity_sum / n / IMMUNE_MAX as f64,
            infected_pct: 100.0 * stats.infected_count as f64 / n,
            color_histogram: stats.color_histogram,
        }
    }
}

/// Rolling window of periodic samples.
#[derive(Clone, Debug)]
pub struct StatsHistory {
    samples: VecDeque<StatsSample>,
}

impl Default for StatsHistory {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }
}

impl StatsHistory {
    /// Record `stats` if `generation` falls on the sampling interval.
    /// Returns true when a sample was taken.
    pub fn record(&mut self, generation: u64, stats: &TickStats, n_cells: usize) -> bool {
        if generation == 0 || generation % HISTORY_SAMPLE_EVERY != 0 {
            return false;
        }
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples
            .push_back(StatsSample::from_stats(generation, stats, n_cells));
        true
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatsSample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&StatsSample> {
        self.samples.back()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.samples).unwrap_or_else(|_| "[]".to_string())
    }
}
