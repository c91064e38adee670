use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Class name the panel element carries inside its container.
pub const DEFAULT_PANEL_CLASS: &str = "tooltip_text";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to parse tooltip config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid tooltip config: {0}")]
    Invalid(String),
}

/// Placement constants for a tooltip. Every field is optional when
/// deserializing, missing ones fall back to the defaults.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TooltipConfig {
    /// Added to the pointer's x coordinate.
    pub offset_x: f64,
    /// Added to the pointer's y coordinate (before the scroll offset).
    pub offset_y: f64,
    /// Panel never starts closer than this to the left edge.
    pub min_left: f64,
    /// Space kept free on the right of the viewport. The panel is assumed
    /// to be no wider than this.
    pub right_reserve: f64,
    /// Class used to find the panel within a container.
    pub panel_class: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 5.0,
            offset_y: 20.0,
            min_left: 20.0,
            right_reserve: 350.0,
            panel_class: DEFAULT_PANEL_CLASS.to_string(),
        }
    }
}

impl TooltipConfig {
    /// Parse a config from a RON document, e.g. `(right_reserve: 300.0)`.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: TooltipConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("min_left", self.min_left),
            ("right_reserve", self.right_reserve),
        ];

        if let Some((name, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be a finite number")));
        }

        if self.panel_class.trim().is_empty() {
            return Err(ConfigError::Invalid("panel_class must not be empty".into()));
        }

        Ok(())
    }

    /// Smallest viewport width for which the horizontal bounds don't invert.
    pub fn min_viewport_width(&self) -> f64 {
        self.min_left + self.right_reserve
    }
}
