use crate::core::PlagueResult;
use crate::domain::code::circular_mean;
use crate::domain::{Cell, Infection, PlagueConfig};
use crate::grid::{Direction, Grid};

use super::Dice;

/// Fresh lifespan in `[0, life_max)`.
#[inline]
pub(crate) fn roll_life<D: Dice>(life_max: u32, dice: &mut D) -> u32 {
    dice.below(life_max.max(1) as usize) as u32
}

/// Rebirth of the cell at `idx`, inheriting from two random neighbors of the
/// previous generation.
///
/// The two neighbors are drawn independently and may coincide. Draw order is
/// fixed: lifespan, first neighbor, second neighbor.
pub(crate) fn resurrect<D: Dice>(previous: &Grid, idx: usize, config: &PlagueConfig, dice: &mut D) -> Cell {
    let life = roll_life(config.life_max, dice);
    let n0 = previous[previous.neighbor(idx, Direction::from_draw(dice.below(8)))];
    let n1 = previous[previous.neighbor(idx, Direction::from_draw(dice.below(8)))];

    let code = circular_mean(n0.code, n1.code);
    let immune = (n0.immune + n1.immune) / 2.0 - config.immune_entropy;

    Cell::new(life, Infection::Healthy, code, immune)
}

/// A generation of cells with no ancestry: random lifespans, healthy, code 0, no immunity.
pub(crate) fn newborn_grid<D: Dice>(width: u32, height: u32, config: &PlagueConfig, dice: &mut D) -> PlagueResult<Grid> {
    let mut grid = Grid::filled(width, height, Cell::default())?;
    for cell in grid.cells_mut() {
        *cell = Cell::newborn(roll_life(config.life_max, dice));
    }
    Ok(grid)
}
