//! Default value functions for title options.
//!
//! Free functions used both by `TitleOptions::default()` and as
//! `#[serde(default = "crate::defaults::...")]` attributes, so a partial
//! YAML document deserializes to defaults + overrides.

pub fn divider() -> String {
    "-".to_string()
}

pub fn max_notification_amount() -> u32 {
    99
}
