//! Tunable simulation parameters
//!
//! Field names on the wire match the control panel's keys so a JS host can
//! round-trip the same JSON object it binds its sliders to.

use serde::{Deserialize, Serialize};

use crate::core::{PlagueError, PlagueResult};

pub const DEFAULT_IMMUNE_ENTROPY: f32 = 0.8;
pub const DEFAULT_IMMUNE_BOOST: f32 = 60.0;
pub const DEFAULT_LIFE_MAX: u32 = 20;
pub const DEFAULT_MUTATION: f32 = 0.1;

/// Keys accepted by [`PlagueConfig::set_by_name`], in panel order.
pub const SETTING_NAMES: [&str; 5] = [
    "IMMUNE_ENTROPY",
    "IMMUNE_BOOST",
    "LIFE_MAX",
    "MUTATION",
    "isVaccinated",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlagueConfig {
    /// Immunity lost by a resurrected cell relative to its parents' average.
    #[serde(rename = "IMMUNE_ENTROPY")]
    pub immune_entropy: f32,
    /// Immunity gained by a cell when it becomes infected.
    #[serde(rename = "IMMUNE_BOOST")]
    pub immune_boost: f32,
    /// Exclusive upper bound on a (re)born cell's lifespan.
    #[serde(rename = "LIFE_MAX")]
    pub life_max: u32,
    /// Per-tick probability of a spontaneous mutation.
    #[serde(rename = "MUTATION")]
    pub mutation: f32,
    /// Quarters the effective virulence of every infection attempt.
    #[serde(rename = "isVaccinated")]
    pub is_vaccinated: bool,
}

impl Default for PlagueConfig {
    fn default() -> Self {
        Self {
            immune_entropy: DEFAULT_IMMUNE_ENTROPY,
            immune_boost: DEFAULT_IMMUNE_BOOST,
            life_max: DEFAULT_LIFE_MAX,
            mutation: DEFAULT_MUTATION,
            is_vaccinated: false,
        }
    }
}

impl PlagueConfig {
    pub fn from_json(json: &str) -> PlagueResult<Self> {
        let config: PlagueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and a bool: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> PlagueResult<()> {
        positive("IMMUNE_ENTROPY", self.immune_entropy)?;
        positive("IMMUNE_BOOST", self.immune_boost)?;
        if self.life_max == 0 {
            return Err(PlagueError::InvalidSetting {
                name: "LIFE_MAX",
                expected: "a positive integer",
                value: 0.0,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation) {
            return Err(PlagueError::InvalidSetting {
                name: "MUTATION",
                expected: "a probability in [0, 1]",
                value: self.mutation as f64,
            });
        }
        Ok(())
    }

    /// Set one key from a numeric control value. Booleans take any non-zero
    /// value as `true`. The config is left untouched when the value is rejected.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> PlagueResult<()> {
        let mut candidate = self.clone();
        match name {
            "IMMUNE_ENTROPY" => candidate.immune_entropy = value as f32,
            "IMMUNE_BOOST" => candidate.immune_boost = value as f32,
            "LIFE_MAX" => {
                if !value.is_finite() || value < 1.0 {
                    return Err(PlagueError::InvalidSetting {
                        name: "LIFE_MAX",
                        expected: "a positive integer",
                        value,
                    });
                }
                candidate.life_max = value as u32;
            }
            "MUTATION" => candidate.mutation = value as f32,
            "isVaccinated" => candidate.is_vaccinated = value != 0.0,
            other => return Err(PlagueError::UnknownSetting(other.to_string())),
        }
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        match name {
            "IMMUNE_ENTROPY" => Some(self.immune_entropy as f64),
            "IMMUNE_BOOST" => Some(self.immune_boost as f64),
            "LIFE_MAX" => Some(self.life_max as f64),
            "MUTATION" => Some(self.mutation as f64),
            "isVaccinated" => Some(if self.is_vaccinated { 1.0 } else { 0.0 }),
            _ => None,
        }
    }
}

fn positive(name: &'static str, value: f32) -> PlagueResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlagueError::InvalidSetting {
            name,
            expected: "a finite value > 0",
            value: value as f64,
        })
    }
}
