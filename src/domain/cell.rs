//! Cell - one slot of the plague board
//!
//! Cells are never allocated or freed individually: a grid is built once and
//! every slot is rewritten in place each generation (aged, infected or reborn).

/// Upper bound for a cell's immunity.
pub const IMMUNE_MAX: f32 = 128.0;

/// Infection state of a cell.
///
/// `PendingInfected` only ever appears in the buffer being *read* during a
/// tick. It marks a cell that an earlier attacker already claimed this tick,
/// so no second attacker can target it and the pass skips it when its own
/// turn comes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Infection {
    #[default]
    Healthy,
    Infected,
    PendingInfected,
}

impl Infection {
    /// True for any state that blocks a new infection attempt.
    #[inline]
    pub fn is_infected(self) -> bool {
        !matches!(self, Infection::Healthy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    /// Generations left before resurrection (0 = resurrect on next tick)
    pub life: u32,
    pub infected: Infection,
    /// Genetic signature on a 256-point ring
    pub code: u8,
    /// Immunity level in [0, IMMUNE_MAX]
    pub immune: f32,
}

impl Cell {
    pub fn new(life: u32, infected: Infection, code: u8, immune: f32) -> Self {
        Self {
            life,
            infected,
            code,
            immune: clamp_immunity(immune),
        }
    }

    /// A brand new cell with no ancestry: healthy, code 0, no immunity.
    pub fn newborn(life: u32) -> Self {
        Self {
            life,
            ..Self::default()
        }
    }

    /// The same cell one generation older. Infection, code and immunity carry over.
    #[inline]
    pub fn aged(&self) -> Self {
        Self {
            life: self.life.saturating_sub(1),
            ..*self
        }
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.infected == Infection::Infected
    }
}

/// Clamp immunity into [0, IMMUNE_MAX]. NaN collapses to 0.
#[inline]
pub fn clamp_immunity(immune: f32) -> f32 {
    if immune.is_nan() {
        return 0.0;
    }
    immune.clamp(0.0, IMMUNE_MAX)
}
