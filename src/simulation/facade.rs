use wasm_bindgen::prelude::*;

use crate::domain::PlagueConfig;
use crate::grid::grid_dims_for_budget;

use super::perf_stats::PerfStats;
use super::{PlagueCore, DEFAULT_SEED};

fn to_js(err: crate::core::PlagueError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing handle on a plague simulation.
///
/// The host calls `tick()` once per animation frame, then reads the published
/// generation through `extract_snapshot()` and the pointer getters, plus the
/// stats and mutation getters.
#[wasm_bindgen]
pub struct Plague {
    core: PlagueCore,
}

#[wasm_bindgen]
impl Plague {
    /// Create a new board with given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Plague, JsValue> {
        Self::with_seed(width, height, DEFAULT_SEED)
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Plague, JsValue> {
        let core = PlagueCore::with_seed(width, height, PlagueConfig::default(), seed).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Size the board to roughly `cell_budget` cells with the viewport's aspect ratio
    #[wasm_bindgen(js_name = forViewport)]
    pub fn for_viewport(cell_budget: u32, view_width: f64, view_height: f64, seed: u64) -> Result<Plague, JsValue> {
        let (width, height) = grid_dims_for_budget(cell_budget, view_width, view_height);
        Self::with_seed(width, height, seed)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn n_cells(&self) -> usize { self.core.n_cells() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    // === SIMULATION ===

    /// Advance one generation
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.core.tick().map(|_| ()).map_err(to_js)
    }

    /// Advance up to `n` generations; returns how many completed
    pub fn step_n(&mut self, n: u32) -> Result<u32, JsValue> {
        self.core.step_n(n).map_err(to_js)
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.core.reset().map_err(to_js)
    }

    /// Fresh board drawn from `seed`
    pub fn reseed(&mut self, seed: u64) -> Result<(), JsValue> {
        self.core.reseed(seed).map_err(to_js)
    }

    // === SETTINGS ===

    #[wasm_bindgen(getter = IMMUNE_ENTROPY)]
    pub fn immune_entropy(&self) -> f32 { self.core.config.immune_entropy }

    #[wasm_bindgen(getter = IMMUNE_BOOST)]
    pub fn immune_boost(&self) -> f32 { self.core.config.immune_boost }

    #[wasm_bindgen(getter = LIFE_MAX)]
    pub fn life_max(&self) -> u32 { self.core.config.life_max }

    #[wasm_bindgen(getter = MUTATION)]
    pub fn mutation_rate(&self) -> f32 { self.core.config.mutation }

    #[wasm_bindgen(getter = isVaccinated)]
    pub fn is_vaccinated(&self) -> bool { self.core.config.is_vaccinated }

    #[wasm_bindgen(js_name = setVaccinated)]
    pub fn set_vaccinated(&mut self, vaccinated: bool) {
        self.core.config.is_vaccinated = vaccinated;
    }

    /// Set a control-panel key from its numeric slider value
    #[wasm_bindgen(js_name = setSetting)]
    pub fn set_setting(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.core.set_setting(name, value).map_err(to_js)
    }

    #[wasm_bindgen(js_name = getSetting)]
    pub fn get_setting(&self, name: &str) -> Option<f64> {
        self.core.get_setting(name)
    }

    #[wasm_bindgen(js_name = loadConfig)]
    pub fn load_config(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_config_json(json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    // === STATS ===

    #[wasm_bindgen(getter)]
    pub fn immunity_sum(&self) -> f64 { self.core.stats().immunity_sum }

    #[wasm_bindgen(getter)]
    pub fn infected_count(&self) -> u32 { self.core.stats().infected_count }

    pub fn color_histogram(&self) -> Vec<u32> {
        self.core.stats().color_histogram.to_vec()
    }

    #[wasm_bindgen(js_name = statsJson)]
    pub fn stats_json(&self) -> String {
        serde_json::to_string(self.core.stats()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> String {
        self.core.history().to_json()
    }

    // === MUTATION EVENT ===

    /// Index of the cell mutated during the last tick, if any
    pub fn mutation_index(&self) -> Option<u32> {
        self.core.mutation().map(|m| m.index as u32)
    }

    /// Code of the cell mutated during the last tick, if any
    pub fn mutation_code(&self) -> Option<u8> {
        self.core.mutation().map(|m| m.code)
    }

    // === PERF ===

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER TRANSFER ===

    /// Pack the published generation into the transfer buffers; returns the cell count
    pub fn extract_snapshot(&mut self) -> usize {
        self.core.extract_snapshot()
    }

    /// Pointer to per-cell genetic codes (u8)
    pub fn codes_ptr(&self) -> *const u8 {
        self.core.render_buffers().codes().as_ptr()
    }

    /// Pointer to per-cell immunity grey levels (u8)
    pub fn immunity_ptr(&self) -> *const u8 {
        self.core.render_buffers().immunity().as_ptr()
    }

    /// Pointer to per-cell infection flags (u8, 0/1)
    pub fn infected_ptr(&self) -> *const u8 {
        self.core.render_buffers().infected().as_ptr()
    }

    /// Pointer to per-cell remaining life (u16)
    pub fn life_ptr(&self) -> *const u16 {
        self.core.render_buffers().life().as_ptr()
    }

    /// Elements in each transfer buffer after the last extraction
    pub fn snapshot_len(&self) -> usize {
        self.core.render_buffers().codes().len()
    }
}
