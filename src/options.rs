//! Title composition options.
//!
//! [`TitleOptions`] is an immutable snapshot: the manager swaps the whole
//! value on reconfiguration and never mutates individual fields. Partial
//! configuration merges over hard-coded defaults — in code via struct-update
//! syntax, in YAML via per-field serde defaults — so every configure call is
//! a full reset to defaults + overrides, never a delta against the previous
//! configuration.

use crate::error::OptionsError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options controlling how display titles are composed.
///
/// Unknown YAML keys are ignored; missing keys take their defaults. An empty
/// string for `prefix`/`suffix`/`divider` behaves like an absent one at
/// composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOptions {
    /// Separator between the requested value and the prefix/suffix
    /// (`"Home page - MyApp"` uses the default `"-"`).
    #[serde(default = "crate::defaults::divider")]
    pub divider: String,

    /// Fixed text composed before the requested value (`"MyApp - Home page"`).
    #[serde(default)]
    pub prefix: Option<String>,

    /// Fixed text composed after the requested value (`"Home page - MyApp"`).
    #[serde(default)]
    pub suffix: Option<String>,

    /// Largest notification count rendered verbatim; higher counts show
    /// `"{max}+"` (`"(99+)"` with the default of 99).
    #[serde(default = "crate::defaults::max_notification_amount")]
    pub max_notification_amount: u32,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            divider: crate::defaults::divider(),
            prefix: None,
            suffix: None,
            max_notification_amount: crate::defaults::max_notification_amount(),
        }
    }
}

impl TitleOptions {
    /// Parse options from a YAML document.
    ///
    /// Missing keys fall back to defaults, unknown keys are ignored, so a
    /// document configuring a single field is valid.
    pub fn from_yaml(yaml: &str) -> Result<Self, OptionsError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    ///
    /// A missing file is not an error: defaults are returned (and the miss
    /// is logged) so hosts can ship without a config file.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading title options from {:?}", path);
            let contents = fs::read_to_string(path).map_err(OptionsError::Io)?;
            Ok(Self::from_yaml(&contents)?)
        } else {
            log::info!("Options file {:?} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save options to a YAML file.
    ///
    /// Writes to a temp file in the same directory then renames, so a crash
    /// mid-write cannot corrupt an existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(OptionsError::Io)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(OptionsError::Parse)?;

        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(OptionsError::Io)?;
        fs::rename(&temp_path, path).map_err(OptionsError::Io)?;

        Ok(())
    }
}
