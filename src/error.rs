//! Typed error variants for par-title.
//!
//! Only options-file I/O can fail. Every title operation (set, restore,
//! navigate, activate, deactivate) is infallible by design and degrades to
//! the best available fallback instead of erroring.

use thiserror::Error;

/// Errors produced when loading or saving a [`TitleOptions`] file.
///
/// The convenience APIs (`TitleOptions::load`, `TitleOptions::save`) return
/// `anyhow::Result`; `OptionsError` values coerce automatically and stay
/// downcastable for callers that want to match on the failure mode.
///
/// [`TitleOptions`]: crate::TitleOptions
#[derive(Debug, Error)]
pub enum OptionsError {
    /// An I/O error occurred reading or writing the options file.
    #[error("I/O error reading title options: {0}")]
    Io(#[from] std::io::Error),

    /// The options file contained invalid YAML.
    #[error("YAML parse error in title options: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}
