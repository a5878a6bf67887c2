//! Pure title composition.
//!
//! [`compose_title`] turns a requested value plus the active options, the
//! live notification count, and the original (pre-takeover) title into the
//! final display string. It reads no ambient state: same inputs, same
//! output.

use crate::options::TitleOptions;

/// Compose the display string for a requested title value.
///
/// Rules, in order:
/// - The fallback is the configured prefix, else the configured suffix
///   (prefix wins when both are set), else `original_title`. Empty strings
///   count as unconfigured; an empty divider joins with a bare space.
/// - No value (or an empty one) composes to the fallback alone.
/// - A value equal to the fallback is returned as-is, so a page named after
///   the app does not render `"MyApp - MyApp"`.
/// - Otherwise the value is wrapped: `"prefix <divider> value"` and/or
///   `"value <divider> suffix"`, with one space on each side of the divider.
///   Prefix and suffix are mutually composable.
/// - A positive notification count prepends `"(n) "`, rendered as
///   `"{max}+"` when `n` exceeds `max_notification_amount`. A zero count
///   adds nothing, and an empty result stays empty.
pub fn compose_title(
    value: Option<&str>,
    options: &TitleOptions,
    notification_count: u32,
    original_title: &str,
) -> String {
    let prefix = options.prefix.as_deref().filter(|p| !p.is_empty());
    let suffix = options.suffix.as_deref().filter(|s| !s.is_empty());
    // An empty divider joins affix and value with a single space.
    let joiner = match options.divider.as_str() {
        "" => " ".to_string(),
        d => format!(" {d} "),
    };
    let fallback = prefix.or(suffix).unwrap_or(original_title);

    let base = match value.filter(|v| !v.is_empty()) {
        None => fallback.to_string(),
        Some(v) if v == fallback => v.to_string(),
        Some(v) => {
            let mut base = v.to_string();
            if let Some(p) = prefix {
                base = format!("{p}{joiner}{base}");
            }
            if let Some(s) = suffix {
                base = format!("{base}{joiner}{s}");
            }
            base
        }
    };

    if notification_count == 0 || base.is_empty() {
        return base;
    }

    let count = if notification_count > options.max_notification_amount {
        format!("{}+", options.max_notification_amount)
    } else {
        notification_count.to_string()
    };

    format!("({count}) {base}")
}
