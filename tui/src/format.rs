//! Small text formatting helpers shared by the section views.

use chrono::{DateTime, Duration as ChronoDuration, Local};
use unicode_width::UnicodeWidthChar;

/// Truncate to a display width, appending an ellipsis when cut. Strings
/// that already fit come back unchanged; the ellipsis column is only
/// reserved once truncation is actually needed.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_owned();
    }
    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Wall-clock time for a fixture entry recorded `minutes_ago`.
#[must_use]
pub fn clock_for(minutes_ago: u64) -> String {
    let when: DateTime<Local> = Local::now() - ChronoDuration::minutes(minutes_ago as i64);
    when.format("%H:%M:%S").to_string()
}

/// `"4m ago"` / `"just now"` labels for the activity feed.
#[must_use]
pub fn minutes_ago_label(minutes_ago: u64) -> String {
    if minutes_ago == 0 {
        "just now".to_owned()
    } else {
        format!("{minutes_ago}m ago")
    }
}

/// Nominal duration units rendered as seconds.
#[must_use]
pub fn duration_label(units: u64) -> String {
    format!("{units}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_keeps_exact_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn ago_labels() {
        assert_eq!(minutes_ago_label(0), "just now");
        assert_eq!(minutes_ago_label(7), "7m ago");
    }
}
