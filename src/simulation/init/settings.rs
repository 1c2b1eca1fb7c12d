use tracing::{debug, warn};

use crate::core::PlagueResult;
use crate::domain::PlagueConfig;

use super::perf_stats::PerfStats;
use super::{Dice, PlagueCore};

pub(super) fn enable_perf_metrics<D: Dice>(world: &mut PlagueCore<D>, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<D: Dice>(world: &PlagueCore<D>) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_config<D: Dice>(world: &mut PlagueCore<D>, config: PlagueConfig) -> PlagueResult<()> {
    if let Err(err) = config.validate() {
        warn!(%err, "config rejected");
        return Err(err);
    }
    debug!(?config, "config replaced");
    world.config = config;
    Ok(())
}

pub(super) fn load_config_json<D: Dice>(world: &mut PlagueCore<D>, json: &str) -> PlagueResult<()> {
    let config = PlagueConfig::from_json(json).map_err(|err| {
        warn!(%err, "config json rejected");
        err
    })?;
    debug!(?config, "config loaded from json");
    world.config = config;
    Ok(())
}

pub(super) fn set_setting<D: Dice>(world: &mut PlagueCore<D>, name: &str, value: f64) -> PlagueResult<()> {
    match world.config.set_by_name(name, value) {
        Ok(()) => {
            debug!(name, value, "setting changed");
            Ok(())
        }
        Err(err) => {
            warn!(%err, name, value, "setting rejected");
            Err(err)
        }
    }
}

pub(super) fn get_setting<D: Dice>(world: &PlagueCore<D>, name: &str) -> Option<f64> {
    world.config.get_by_name(name)
}
