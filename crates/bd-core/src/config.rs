//! Decoder configuration.

use bd_common::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::schedule::RoundingMode;

/// Tunable parameters for burst decoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BurstConfig {
    /// Ratio between consecutive rate levels. Must be > 1.
    pub scale: f64,
    /// Escalation penalty weight. Must be >= 0; higher values demand more
    /// evidence before jumping to a higher burst level.
    pub penalty: f64,
    /// Rounding applied to the log terms of the level-count formula.
    pub rounding: RoundingMode,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            scale: 3.0,
            penalty: 0.5,
            rounding: RoundingMode::Ceil,
        }
    }
}

impl BurstConfig {
    /// Validate the configuration, returning an error naming the offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 1.0 {
            return Err(Error::InvalidConfiguration {
                parameter: "scale",
                value: self.scale,
                reason: "must be greater than 1",
            });
        }
        if !self.penalty.is_finite() || self.penalty < 0.0 {
            return Err(Error::InvalidConfiguration {
                parameter: "penalty",
                value: self.penalty,
                reason: "must be non-negative",
            });
        }
        Ok(())
    }
}
