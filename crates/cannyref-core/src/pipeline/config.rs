use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, DEFAULT_WIDTH, WINDOW_PAD,
};
use crate::error::{CannyRefError, Result};

/// Parameters of a single reference-model run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CannyConfig {
    /// Grid width in pixels.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Grid height in pixels.
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl Default for CannyConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            thresholds: ThresholdConfig::default(),
        }
    }
}

impl CannyConfig {
    /// Check the preconditions that do not depend on pixel data.
    ///
    /// The thresholds must satisfy `low < high`, and the grid must be
    /// able to feed the 3x3 stages their one-pixel reflected pad, which
    /// rules out anything smaller than 3x3.
    pub fn validate(&self) -> Result<()> {
        if self.thresholds.low >= self.thresholds.high {
            return Err(CannyRefError::ThresholdOrder {
                low: self.thresholds.low,
                high: self.thresholds.high,
            });
        }
        if 2 * WINDOW_PAD >= self.height.min(self.width) {
            return Err(CannyRefError::PadTooLarge {
                pad: WINDOW_PAD,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Double-threshold classification levels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Magnitudes at or above this are strong edges.
    pub high: u8,
    /// Magnitudes in [low, high) are weak edges.
    pub low: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            low: DEFAULT_LOW_THRESHOLD,
        }
    }
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}
