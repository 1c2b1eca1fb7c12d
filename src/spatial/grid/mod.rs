//! Grid - one generation of the plague board
//!
//! A flat row-major `Vec<Cell>` with wraparound addressing. The engine keeps
//! two of these and flips between them every tick.

use crate::core::{PlagueError, PlagueResult};
use crate::domain::Cell;

mod indexing;
mod sizing;

pub use indexing::{neighbor_index, Direction};
pub use sizing::{grid_dims_for_budget, DEFAULT_CELL_BUDGET};

/// Smallest width/height for which a single wrap always lands in range.
pub const MIN_SIDE: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid with every slot set to `cell`.
    pub fn filled(width: u32, height: u32, cell: Cell) -> PlagueResult<Self> {
        check_dimensions(width, height)?;
        let size = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            size,
            cells: vec![cell; size],
        })
    }

    /// Grid built from `width * height` cells laid out row-major.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> PlagueResult<Self> {
        check_dimensions(width, height)?;
        let size = width as usize * height as usize;
        if cells.len() != size {
            return Err(PlagueError::CellCountMismatch {
                width,
                height,
                expected: size,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            size,
            cells,
        })
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    /// Overwrite one slot. Returns false when `idx` is out of range.
    pub fn set(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn infected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_infected()).count()
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }
}

impl std::ops::IndexMut<usize> for Grid {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }
}

fn check_dimensions(width: u32, height: u32) -> PlagueResult<()> {
    if width < MIN_SIDE || height < MIN_SIDE || width.checked_mul(height).is_none() {
        return Err(PlagueError::InvalidDimensions { width, height });
    }
    Ok(())
}
