//! Formatting utilities for terminal output

use crate::core::ScoreTally;

/// Circled-number glyph for a word length: ④ for a four-letter word
///
/// Lengths outside 1–20 fall back to `(n)`.
#[must_use]
pub fn length_glyph(length: usize) -> String {
    u32::try_from(length)
        .ok()
        .filter(|len| (1..=20).contains(len))
        .and_then(|len| char::from_u32(0x2460 + len - 1))
        .map_or_else(|| format!("({length})"), String::from)
}

/// One-line per-length breakdown, e.g. `④ ×2  ⑤ ×1`
///
/// Lengths with no words are left out. Returns an empty string for an empty tally.
#[must_use]
pub fn breakdown_line(tally: &ScoreTally) -> String {
    tally
        .breakdown()
        .map(|(len, count)| format!("{} ×{count}", length_glyph(len)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many of a root's words have been found
#[must_use]
pub fn found_bar(found: usize, total: usize, width: usize) -> String {
    create_progress_bar(found as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_for_common_lengths() {
        assert_eq!(length_glyph(1), "①");
        assert_eq!(length_glyph(3), "③");
        assert_eq!(length_glyph(8), "⑧");
        assert_eq!(length_glyph(20), "⑳");
    }

    #[test]
    fn glyph_fallback() {
        assert_eq!(length_glyph(0), "(0)");
        assert_eq!(length_glyph(21), "(21)");
    }

    #[test]
    fn breakdown_line_skips_zero_lengths() {
        let mut tally = ScoreTally::new();
        tally.record(4);
        tally.record(4);
        tally.record(5);
        assert_eq!(breakdown_line(&tally), "④ ×2  ⑤ ×1");
    }

    #[test]
    fn breakdown_line_empty() {
        assert_eq!(breakdown_line(&ScoreTally::new()), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn found_bar_quarter() {
        assert_eq!(found_bar(1, 4, 8), "██░░░░░░");
    }
}
