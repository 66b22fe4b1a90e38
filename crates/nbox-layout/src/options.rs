//! Host-level layout options.

use nbox_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Default padding of the stock theme, in device-independent pixels.
pub const DEFAULT_PADDING: f32 = 4.0;

/// Options shared by every box a host lays out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Space between consecutive children along the main axis
    pub padding: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl LayoutOptions {
    /// Set the padding.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let options: LayoutOptions = serde_json::from_str(source).map_err(|e| ConfigError::Malformed {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the padding is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::InvalidPadding { value: self.padding });
        }
        Ok(())
    }
}
