//! Device configuration documents.
//!
//! Each TV target ships a JSON configuration naming the device base
//! module, the modifier modules layered onto it, the input map, and the
//! layouts the application was authored for. The application bootstrap
//! loads the document for the current target and uses it to pick,
//! among other things, which animation modifier to install.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error loading or interpreting a device configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read device configuration: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse device configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("device configuration defines no layouts")]
    NoLayouts,
}

/// Which animation modifier a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimModifier {
    /// Apply end states instantly; safest on weak engines.
    #[default]
    Noop,
    /// Interpolate towards end states via the tween engine.
    Tweened,
}

/// Module paths recognised as animation modifiers.
const NOOP_MODIFIER_SUFFIX: &str = "anim/noanim";
const TWEEN_MODIFIER_SUFFIX: &str = "anim/tween";

/// The device base module and the modifier modules layered onto it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Modules {
    pub base: String,
    pub modifiers: Vec<String>,
}

/// Key-map and other input-routing settings. Opaque to this crate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    pub map: HashMap<String, serde_json::Value>,
}

/// One authored screen layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub module: String,
    pub classes: Vec<String>,
}

/// A device configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceConfig {
    pub modules: Modules,
    pub input: InputConfig,
    pub layouts: Vec<Layout>,
    pub device_configuration_key: String,
}

impl DeviceConfig {
    /// Parse a configuration document from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration document from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// The animation modifier this configuration selects.
    ///
    /// Scans the modifier module paths for a recognised animation
    /// module; a configuration naming none (or only unknown paths)
    /// falls back to the no-op modifier.
    pub fn anim_modifier(&self) -> AnimModifier {
        for path in &self.modules.modifiers {
            if path.ends_with(TWEEN_MODIFIER_SUFFIX) {
                return AnimModifier::Tweened;
            }
            if path.ends_with(NOOP_MODIFIER_SUFFIX) {
                return AnimModifier::Noop;
            }
        }
        AnimModifier::Noop
    }

    /// The best layout for a screen: the largest one that fits, or the
    /// smallest authored layout when none fits.
    pub fn layout_for(&self, width: u32, height: u32) -> Result<&Layout, ConfigError> {
        let fitting = self
            .layouts
            .iter()
            .filter(|l| l.width <= width && l.height <= height)
            .max_by_key(|l| (l.width, l.height));
        fitting
            .or_else(|| self.layouts.iter().min_by_key(|l| (l.width, l.height)))
            .ok_or(ConfigError::NoLayouts)
    }
}
