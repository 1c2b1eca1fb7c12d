use serde::Serialize;
use tracing::trace;

use crate::domain::code::shift_code;
use crate::domain::Infection;
use crate::grid::Grid;

use super::Dice;

/// Upper bound of the (doubly randomised) mutation step on the code ring.
pub const MUTATION_REACH: f64 = 128.0;

/// A spontaneous infection seeded this tick, for the host to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MutationEvent {
    pub index: usize,
    pub code: u8,
}

/// Roll for a spontaneous mutation and apply it to the *current* buffer.
///
/// With probability `probability` a random cell's code is pushed a random
/// distance around the ring and the cell is forced into the infected state,
/// so the per-cell pass that follows treats it as a live infection source.
pub(crate) fn inject<D: Dice>(current: &mut Grid, probability: f32, dice: &mut D) -> Option<MutationEvent> {
    if !dice.chance(probability as f64) {
        return None;
    }

    let index = dice.below(current.size());
    let reach = dice.uniform(MUTATION_REACH);
    let magnitude = dice.uniform(reach);
    let offset = if dice.coin() { -magnitude } else { magnitude };

    let cell = &mut current[index];
    cell.code = shift_code(cell.code, offset);
    cell.infected = Infection::Infected;

    trace!(index, code = cell.code, offset, "mutation injected");
    Some(MutationEvent {
        index,
        code: cell.code,
    })
}
