use super::MIN_SIDE;

/// Cell budget the board is sized for when the host does not pick one.
pub const DEFAULT_CELL_BUDGET: u32 = 120_000;

/// Board dimensions close to `cell_budget` cells with the aspect ratio of a
/// `view_width` x `view_height` viewport. Each side is at least 2.
pub fn grid_dims_for_budget(cell_budget: u32, view_width: f64, view_height: f64) -> (u32, u32) {
    if !(view_width > 0.0 && view_height > 0.0) || !view_width.is_finite() || !view_height.is_finite() {
        let side = (cell_budget as f64).sqrt().floor() as u32;
        return (side.max(MIN_SIDE), side.max(MIN_SIDE));
    }
    let n = cell_budget as f64;
    let width = (n * view_width / view_height).sqrt().floor() as u32;
    let height = (n * view_height / view_width).sqrt().floor() as u32;
    (width.max(MIN_SIDE), height.max(MIN_SIDE))
}
