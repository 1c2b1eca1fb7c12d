use crate::domain::cell::clamp_immunity;
use crate::domain::code::{blend_strain, code_diff};
use crate::domain::{Infection, PlagueConfig};
use crate::grid::{Direction, Grid};

use super::Dice;

/// Outcome of one infected cell's attempt on a random neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Attempt {
    /// Neighbor was already infected or already claimed this tick.
    Blocked,
    /// Neighbor's immunity held.
    Resisted,
    /// Neighbor at this index was infected.
    Infected(usize),
}

/// Effective virulence of a strain against a victim: the code distance,
/// quartered under vaccination.
#[inline]
pub fn virulence(attacker_code: u8, victim_code: u8, vaccinated: bool) -> u8 {
    let d = code_diff(victim_code, attacker_code);
    if vaccinated { d >> 2 } else { d }
}

/// An infection lands only when virulence strictly exceeds immunity.
#[inline]
pub fn overcomes(virulence: u8, immune: f32) -> bool {
    virulence as f32 > immune
}

/// Let the infected cell at `attacker` try to infect one random neighbor.
///
/// Reads the victim from `current`; on success writes the victim's new state
/// into `next` and marks it `PendingInfected` in `current`. That mark is the
/// one deliberate write into the read buffer during a pass: it stops later
/// attackers in the same ascending scan from claiming the same victim, and
/// tells the scan to skip the victim's own turn.
pub(crate) fn try_infect<D: Dice>(
    current: &mut Grid,
    next: &mut Grid,
    attacker: usize,
    config: &PlagueConfig,
    dice: &mut D,
) -> Attempt {
    let target = current.neighbor(attacker, Direction::from_draw(dice.below(8)));
    let victim = current[target];
    if victim.infected.is_infected() {
        return Attempt::Blocked;
    }

    let strain = current[attacker].code;
    if !overcomes(virulence(strain, victim.code, config.is_vaccinated), victim.immune) {
        return Attempt::Resisted;
    }

    // A victim the scan has not reached yet still holds a stale slot in
    // `next`; age it forward first so no old field survives.
    let mut infected = if target > attacker { victim.aged() } else { next[target] };
    infected.infected = Infection::Infected;
    infected.immune = clamp_immunity(victim.immune + config.immune_boost);
    infected.code = blend_strain(strain, victim.code);
    next[target] = infected;

    current[target].infected = Infection::PendingInfected;
    Attempt::Infected(target)
}
