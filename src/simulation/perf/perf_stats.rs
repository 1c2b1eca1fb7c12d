use wasm_bindgen::prelude::*;

/// Timing and counters for the last tick. All zeros while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(crate) tick_ms: f64,
    pub(crate) mutation_ms: f64,
    pub(crate) pass_ms: f64,
    pub(crate) stats_ms: f64,
    pub(crate) cells_processed: u32,
    pub(crate) cells_skipped: u32,
    pub(crate) cells_resurrected: u32,
    pub(crate) infection_attempts: u32,
    pub(crate) infections: u32,
    pub(crate) mutated: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn mutation_ms(&self) -> f64 { self.mutation_ms }
    #[wasm_bindgen(getter)]
    pub fn pass_ms(&self) -> f64 { self.pass_ms }
    #[wasm_bindgen(getter)]
    pub fn stats_ms(&self) -> f64 { self.stats_ms }

    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn cells_skipped(&self) -> u32 { self.cells_skipped }
    #[wasm_bindgen(getter)]
    pub fn cells_resurrected(&self) -> u32 { self.cells_resurrected }
    #[wasm_bindgen(getter)]
    pub fn infection_attempts(&self) -> u32 { self.infection_attempts }
    #[wasm_bindgen(getter)]
    pub fn infections(&self) -> u32 { self.infections }
    #[wasm_bindgen(getter)]
    pub fn mutated(&self) -> bool { self.mutated }
}
