use crate::domain::IMMUNE_MAX;

use super::{Dice, PlagueCore};

/// Structure-of-arrays copy of the published generation for the JS renderer.
///
/// The host reads these straight out of wasm memory through the pointer
/// getters, so each array is exactly `n_cells` long once extracted.
#[derive(Clone, Debug, Default)]
pub struct RenderBuffers {
    pub(crate) codes: Vec<u8>,
    /// Immunity scaled to a 0..=255 grey level
    pub(crate) immunity: Vec<u8>,
    /// 1 for infected, 0 otherwise
    pub(crate) infected: Vec<u8>,
    pub(crate) life: Vec<u16>,
}

impl RenderBuffers {
    pub(crate) fn with_capacity(n_cells: usize) -> Self {
        Self {
            codes: Vec::with_capacity(n_cells),
            immunity: Vec::with_capacity(n_cells),
            infected: Vec::with_capacity(n_cells),
            life: Vec::with_capacity(n_cells),
        }
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    pub fn immunity(&self) -> &[u8] {
        &self.immunity
    }

    pub fn infected(&self) -> &[u8] {
        &self.infected
    }

    pub fn life(&self) -> &[u16] {
        &self.life
    }
}

/// Immunity as a grey level: 128 immunity saturates at 255.
#[inline]
pub fn immunity_level(immune: f32) -> u8 {
    (immune * 256.0 / IMMUNE_MAX).clamp(0.0, 255.0) as u8
}

/// Refill the transfer buffers from the current generation. Returns the cell count.
pub(super) fn extract_snapshot<D: Dice>(world: &mut PlagueCore<D>) -> usize {
    let cells = world.current.cells();
    let render = &mut world.render;

    render.codes.clear();
    render.immunity.clear();
    render.infected.clear();
    render.life.clear();

    for cell in cells {
        render.codes.push(cell.code);
        render.immunity.push(immunity_level(cell.immune));
        render.infected.push(cell.is_infected() as u8);
        render.life.push(cell.life.min(u16::MAX as u32) as u16);
    }

    cells.len()
}
