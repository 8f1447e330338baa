//! Width-aware text helpers.
//!
//! Widths are display columns: CJK characters count as 2 and ANSI escape
//! codes count as 0.

use console::Alignment;
use unicode_width::UnicodeWidthChar;

/// Display width of `s` in terminal columns, ignoring ANSI escapes.
pub fn display_width(s: &str) -> usize {
    console::measure_text_width(s)
}

/// Pads `s` on the right to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    console::pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads `s` on the left to `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    console::pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Centers `s` in `width` columns. Odd padding goes to the right.
pub fn pad_center(s: &str, width: usize) -> String {
    console::pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Keeps the start of `s`, replacing the cut tail with `marker`.
///
/// ```
/// use roster_render::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Hello", 8, "…"), "Hello");
/// ```
pub fn truncate_end(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if display_width(marker) >= max_width {
        return take_front(marker, max_width);
    }
    console::truncate_str(s, max_width, marker).into_owned()
}

/// Keeps the end of `s`, replacing the cut head with `marker`.
pub fn truncate_start(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let marker_width = display_width(marker);
    if marker_width >= max_width {
        return take_front(marker, max_width);
    }
    format!("{}{}", marker, take_back(s, max_width - marker_width))
}

/// Keeps both ends of `s`, replacing the middle with `marker`.
///
/// When the kept width is odd, the extra column goes to the start.
pub fn truncate_middle(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let marker_width = display_width(marker);
    if marker_width >= max_width {
        return take_front(marker, max_width);
    }
    let keep = max_width - marker_width;
    let tail = keep / 2;
    let head = keep - tail;
    format!("{}{}{}", take_front(s, head), marker, take_back(s, tail))
}

/// Longest prefix of `s` that fits in `width` columns.
fn take_front(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Longest suffix of `s` that fits in `width` columns.
fn take_back(s: &str, width: usize) -> String {
    let mut kept = Vec::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        kept.push(c);
        used += w;
    }
    kept.into_iter().rev().collect()
}
