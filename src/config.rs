//! Widget configuration supplied by the host page.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetConfig {
    /// Id of the canvas to draw into; created under `<body>` when absent.
    pub canvas_id: String,
    /// Canvas width and height in pixels.
    pub canvas_px: u32,
    /// Fixed RNG seed for reproducible games; entropy when `None`.
    pub seed: Option<u64>,
    /// Appended to the share text.
    pub share_url: String,
    /// `log` level name for the console logger.
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            canvas_id: "t48-canvas".to_string(),
            canvas_px: 400,
            seed: None,
            share_url: String::new(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "serde_json")]
    #[error("invalid widget config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("canvas size must be at least {min}px, got {got}px")]
    CanvasTooSmall { min: u32, got: u32 },
}

impl WidgetConfig {
    pub const MIN_CANVAS_PX: u32 = 120;

    /// Parse from JSON; missing fields take their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.canvas_px < Self::MIN_CANVAS_PX {
            return Err(ConfigError::CanvasTooSmall {
                min: Self::MIN_CANVAS_PX,
                got: self.canvas_px,
            });
        }
        Ok(self)
    }
}
