//! Shared integration test helpers for par-title.
//!
//! This module provides canonical factory functions used across the
//! `tests/` integration test suite.
//!
//! # Usage
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{manager_with_suffix, suffix_options};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use par_title::{MemorySink, TitleManager, TitleOptions};

/// The original title every test sink starts with, standing in for whatever
/// the host surface showed before the engine took over.
pub const ORIGINAL_TITLE: &str = "Browser";

/// Options with only a suffix configured (`"Home page - MyApp"` shape).
pub fn suffix_options(suffix: &str) -> TitleOptions {
    TitleOptions {
        suffix: Some(suffix.to_string()),
        ..TitleOptions::default()
    }
}

/// Options with only a prefix configured (`"MyApp - Home page"` shape).
pub fn prefix_options(prefix: &str) -> TitleOptions {
    TitleOptions {
        prefix: Some(prefix.to_string()),
        ..TitleOptions::default()
    }
}

/// A manager over a fresh [`MemorySink`] showing [`ORIGINAL_TITLE`].
pub fn manager_with(options: TitleOptions) -> TitleManager<MemorySink> {
    TitleManager::new(options, MemorySink::new(ORIGINAL_TITLE))
}

/// A manager configured with only a suffix, the most common host setup.
pub fn manager_with_suffix(suffix: &str) -> TitleManager<MemorySink> {
    manager_with(suffix_options(suffix))
}

/// A manager with no prefix or suffix, falling back to the original title.
pub fn bare_manager() -> TitleManager<MemorySink> {
    manager_with(TitleOptions::default())
}
