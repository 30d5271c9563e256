//! Formatting utilities for terminal output

/// Inner width of the boxed banners, borders excluded
pub const BANNER_WIDTH: usize = 38;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for unlocked achievements, e.g. `[██████░░░░░░] 2/4`
#[must_use]
pub fn achievement_bar(unlocked: usize, total: usize, width: usize) -> String {
    let bar = create_progress_bar(unlocked as f64, total as f64, width);
    format!("[{bar}] {unlocked}/{total}")
}

/// A line of a boxed banner: `* text      *`
///
/// Text longer than the banner is kept whole and the closing border follows it.
#[must_use]
pub fn banner_line(text: &str) -> String {
    format!("* {text:<width$} *", width = BANNER_WIDTH - 2)
}

/// Top or bottom edge of a boxed banner
#[must_use]
pub fn banner_edge() -> String {
    "*".repeat(BANNER_WIDTH + 2)
}

/// Centered title line of a boxed banner
#[must_use]
pub fn banner_title(title: &str) -> String {
    format!("* {title:^width$} *", width = BANNER_WIDTH - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 4.0, 8);
        assert_eq!(bar, "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(4.0, 4.0, 8);
        assert_eq!(bar, "████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(2.0, 4.0, 8);
        assert_eq!(bar, "████░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }

    #[test]
    fn achievement_bar_format() {
        assert_eq!(achievement_bar(1, 4, 4), "[█░░░] 1/4");
    }

    #[test]
    fn banner_lines_share_a_width() {
        let edge = banner_edge();
        let line = banner_line("Current Score: 12");
        let title = banner_title("RULES");
        assert_eq!(edge.len(), 40);
        assert_eq!(line.chars().count(), 40);
        assert_eq!(title.chars().count(), 40);
        assert!(line.starts_with("* Current Score: 12 "));
        assert!(line.ends_with(" *"));
        assert!(title.contains("RULES"));
    }
}
