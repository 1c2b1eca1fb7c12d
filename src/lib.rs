//! Plague Engine - epidemic and genetic drift simulation in WASM
//!
//! A toroidal board of cells, each carrying a genetic code on a 256-point
//! ring, an immunity level, an infection state and a lifespan. Infected cells
//! try to infect a neighbor every generation; cells that run out of life are
//! reborn from two neighbors; spontaneous mutations seed new strains.
//!
//! Architecture:
//! - core/        - Errors shared across layers
//! - domain/      - Cells, code ring arithmetic, configuration
//! - spatial/     - Grid storage and neighbor addressing
//! - simulation/  - Tick engine, stats, and the JS facade
//!
//! Rendering is the host's job: it reads the published generation after
//! each tick and never during one.

pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦠 Plague WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Control-panel keys accepted by `Plague.setSetting`, as a JSON array
#[wasm_bindgen]
pub fn setting_names_json() -> String {
    serde_json::to_string(&domain::config::SETTING_NAMES).unwrap_or_default()
}

/// Cell budget the host should size its board for by default
#[wasm_bindgen]
pub fn default_cell_budget() -> u32 {
    grid::DEFAULT_CELL_BUDGET
}

// Re-export main types
pub use crate::core::{PlagueError, PlagueResult};
pub use domain::{Cell, Infection, PlagueConfig};
pub use grid::{Direction, Grid};
pub use simulation::{MutationEvent, Plague, PlagueCore, TickReport, TickStats};
