//! Debug overlay configuration resource.
//!
//! Holds the tunables of the layout overlay, loaded from an INI file. Provides
//! defaults for safe startup and methods to load/save the configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [overlay]
//! min_scale = 0.2
//! max_scale = 3.0
//! handle_size = 12
//! indicator_x = 10
//! indicator_y = 10
//! indicator_line_spacing = 18
//! indicator_font_size = 14
//! toggle_key = F11
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_MIN_SCALE: f32 = 0.2;
const DEFAULT_MAX_SCALE: f32 = 3.0;
const DEFAULT_HANDLE_SIZE: f32 = 12.0;
const DEFAULT_INDICATOR_X: f32 = 10.0;
const DEFAULT_INDICATOR_Y: f32 = 10.0;
const DEFAULT_INDICATOR_LINE_SPACING: f32 = 18.0;
const DEFAULT_INDICATOR_FONT_SIZE: f32 = 14.0;
const DEFAULT_TOGGLE_KEY: &str = "F11";
const DEFAULT_CONFIG_PATH: &str = "./overlay.ini";

const SECTION: &str = "overlay";

/// Overlay configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct EditorConfig {
    /// Smallest scale a resize gesture may produce.
    pub min_scale: f32,
    /// Largest scale a resize gesture may produce.
    pub max_scale: f32,
    /// Side of a square resize handle, in world units.
    pub handle_size: f32,
    /// Screen position of the first indicator label.
    pub indicator_x: f32,
    pub indicator_y: f32,
    /// Vertical distance between stacked indicator labels.
    pub indicator_line_spacing: f32,
    pub indicator_font_size: f32,
    /// Name of the key that toggles debug mode.
    pub toggle_key: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            handle_size: DEFAULT_HANDLE_SIZE,
            indicator_x: DEFAULT_INDICATOR_X,
            indicator_y: DEFAULT_INDICATOR_Y,
            indicator_line_spacing: DEFAULT_INDICATOR_LINE_SPACING,
            indicator_font_size: DEFAULT_INDICATOR_FONT_SIZE,
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. A scale range
    /// that is empty or not strictly positive is ignored with a warning.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let get_f32 = |key: &str| -> Option<f32> {
            config
                .getfloat(SECTION, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        let min_scale = get_f32("min_scale").unwrap_or(self.min_scale);
        let max_scale = get_f32("max_scale").unwrap_or(self.max_scale);
        if min_scale > 0.0 && min_scale <= max_scale {
            self.min_scale = min_scale;
            self.max_scale = max_scale;
        } else {
            warn!(
                "Ignoring invalid scale range [{}, {}], keeping [{}, {}]",
                min_scale, max_scale, self.min_scale, self.max_scale
            );
        }

        if let Some(size) = get_f32("handle_size") {
            if size > 0.0 {
                self.handle_size = size;
            } else {
                warn!("Ignoring non-positive handle_size {}", size);
            }
        }
        if let Some(x) = get_f32("indicator_x") {
            self.indicator_x = x;
        }
        if let Some(y) = get_f32("indicator_y") {
            self.indicator_y = y;
        }
        if let Some(spacing) = get_f32("indicator_line_spacing") {
            self.indicator_line_spacing = spacing;
        }
        if let Some(font_size) = get_f32("indicator_font_size") {
            self.indicator_font_size = font_size;
        }
        if let Some(key) = config.get(SECTION, "toggle_key") {
            self.toggle_key = key;
        }

        info!(
            "Loaded config: scale [{}, {}], handle size {}, toggle key {}",
            self.min_scale, self.max_scale, self.handle_size, self.toggle_key
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(SECTION, "min_scale", Some(self.min_scale.to_string()));
        config.set(SECTION, "max_scale", Some(self.max_scale.to_string()));
        config.set(SECTION, "handle_size", Some(self.handle_size.to_string()));
        config.set(SECTION, "indicator_x", Some(self.indicator_x.to_string()));
        config.set(SECTION, "indicator_y", Some(self.indicator_y.to_string()));
        config.set(
            SECTION,
            "indicator_line_spacing",
            Some(self.indicator_line_spacing.to_string()),
        );
        config.set(
            SECTION,
            "indicator_font_size",
            Some(self.indicator_font_size.to_string()),
        );
        config.set(SECTION, "toggle_key", Some(self.toggle_key.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set the allowed scale range. Rejects empty or non-positive ranges.
    pub fn set_scale_range(&mut self, min: f32, max: f32) -> Result<(), String> {
        if min <= 0.0 || min > max {
            return Err(format!("Invalid scale range [{}, {}]", min, max));
        }
        self.min_scale = min;
        self.max_scale = max;
        Ok(())
    }
}
