use serde::Serialize;

use crate::domain::code::{color_bucket, COLOR_BUCKETS};
use crate::domain::Cell;

/// Per-generation summary of a finished buffer. Immutable once emitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickStats {
    /// Sum of every cell's immunity
    pub immunity_sum: f64,
    /// Cells in the `Infected` state
    pub infected_count: u32,
    /// Cell count per 32-code arc of the color ring
    pub color_histogram: [u32; COLOR_BUCKETS],
}

impl TickStats {
    /// Fold a finished generation in ascending index order.
    pub fn from_cells(cells: &[Cell]) -> Self {
        cells.iter().fold(TickStats::default(), |mut stats, cell| {
            stats.accumulate(cell);
            stats
        })
    }

    #[inline]
    fn accumulate(&mut self, cell: &Cell) {
        if cell.is_infected() {
            self.infected_count += 1;
        }
        self.immunity_sum += cell.immune as f64;
        self.color_histogram[color_bucket(cell.code)] += 1;
    }

    pub fn mean_immunity(&self, n_cells: usize) -> f64 {
        if n_cells == 0 {
            0.0
        } else {
            self.immunity_sum / n_cells as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Infection;

    #[test]
    fn folds_counts_sum_and_histogram() {
        let cells = [
            Cell::new(1, Infection::Infected, 0, 10.0),
            Cell::new(1, Infection::Healthy, 40, 20.5),
            Cell::new(1, Infection::Infected, 255, 0.0),
            Cell::new(1, Infection::PendingInfected, 33, 1.0),
        ];
        let stats = TickStats::from_cells(&cells);
        assert_eq!(stats.infected_count, 2);
        assert_eq!(stats.immunity_sum, 31.5);
        assert_eq!(stats.color_histogram, [1, 2, 0, 0, 0, 0, 0, 1]);
        assert_eq!(stats.mean_immunity(cells.len()), 31.5 / 4.0);
    }

    #[test]
    fn histogram_always_sums_to_cell_count() {
        let cells: Vec<Cell> = (0..=255u8)
            .map(|code| Cell::new(0, Infection::Healthy, code, 0.0))
            .collect();
        let stats = TickStats::from_cells(&cells);
        assert_eq!(stats.color_histogram.iter().sum::<u32>(), 256);
        assert!(stats.color_histogram.iter().all(|&n| n == 32));
    }

    #[test]
    fn empty_board_has_zero_mean() {
        assert_eq!(TickStats::default().mean_immunity(0), 0.0);
    }
}
