//! Engine settings, stored as JSON.
//!
//! Every field has a default, so a partial or empty file is valid. Page
//! geometry is read once when an engine is built; the remaining fields can
//! be re-applied to a running engine.

use crate::clamp::ResizeBoundary;
use crate::constants::{
    DEFAULT_DPI, DEFAULT_GRID_UNIT, DROP_DEBOUNCE_MS, MIN_ELEMENT_SIZE, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM,
};
use crate::input::ControllerConfig;
use crate::snap::GridSnapper;
use crate::types::{Margins, PageSurface};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Directory under the platform config dir
const APP_DIR: &str = "pagecanvas";

/// Settings file name
const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that would break placement
    #[error("Invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub grid_unit: f32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub dpi: f32,
    pub margins: Margins,
    pub resize_boundary: ResizeBoundary,
    pub drop_debounce_ms: u64,
    pub min_element_size: f32,
    pub snap_resize: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            grid_unit: DEFAULT_GRID_UNIT,
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            dpi: DEFAULT_DPI,
            margins: Margins::default(),
            resize_boundary: ResizeBoundary::default(),
            drop_debounce_ms: DROP_DEBOUNCE_MS,
            min_element_size: MIN_ELEMENT_SIZE,
            snap_resize: true,
        }
    }
}

/// `<config_dir>/pagecanvas/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

impl EngineSettings {
    /// Read and validate settings from `path`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the default location. A missing, unreadable or invalid
    /// file falls back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            tracing::debug!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load settings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
            SettingsError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.grid_unit.is_finite() && self.grid_unit > 0.0) {
            return Err(invalid(
                "grid_unit",
                format!("must be positive, got {}", self.grid_unit),
            ));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(invalid(
                "dpi",
                format!("must be positive, got {}", self.dpi),
            ));
        }
        if !(self.page_width_mm > 0.0 && self.page_height_mm > 0.0) {
            return Err(invalid(
                "page",
                format!("{}x{}mm is empty", self.page_width_mm, self.page_height_mm),
            ));
        }
        let Margins { left, right, top } = self.margins;
        if left < 0.0 || right < 0.0 || top < 0.0 {
            return Err(invalid("margins", "must not be negative"));
        }
        let surface = self.page_surface();
        if left + right >= surface.width || top >= surface.height {
            return Err(invalid("margins", "leave no usable area on the page"));
        }
        if !(self.min_element_size.is_finite() && self.min_element_size >= 0.0) {
            return Err(invalid("min_element_size", "must not be negative"));
        }
        Ok(())
    }

    pub fn page_surface(&self) -> PageSurface {
        PageSurface::from_physical(self.page_width_mm, self.page_height_mm, self.dpi)
            .with_margins(self.margins)
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            grid: GridSnapper::new(self.grid_unit),
            resize_boundary: self.resize_boundary,
            min_element_size: self.min_element_size,
            snap_resize: self.snap_resize,
            drop_debounce: Duration::from_millis(self.drop_debounce_ms),
        }
    }
}
