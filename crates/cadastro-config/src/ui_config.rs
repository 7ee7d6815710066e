use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UI_COMPACT_BELOW, DEFAULT_UI_WIDTH, MAX_UI_WIDTH,
    MIN_UI_WIDTH,
};

use serde::Deserialize;

/// Terminal rendering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Columns available for drawing the screen
    pub width: u16,
    /// Screens narrower than this use the compact layout
    pub compact_below: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_UI_WIDTH,
            compact_below: DEFAULT_UI_COMPACT_BELOW,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.width < MIN_UI_WIDTH || self.width > MAX_UI_WIDTH {
            return Err(ConfigError::ui(format!(
                "ui.width must be {}-{}, got {}",
                MIN_UI_WIDTH, MAX_UI_WIDTH, self.width
            )));
        }

        if self.compact_below < MIN_UI_WIDTH || self.compact_below > MAX_UI_WIDTH {
            return Err(ConfigError::ui(format!(
                "ui.compact_below must be {}-{}, got {}",
                MIN_UI_WIDTH, MAX_UI_WIDTH, self.compact_below
            )));
        }

        Ok(())
    }

    /// Whether the compact layout applies at `width` columns.
    pub fn is_compact(&self, width: u16) -> bool {
        width < self.compact_below
    }
}
