//! Bordered frame rendering for failure messages.

use console::Style;

/// Render `message` inside a red double-line frame.
///
/// Layout matches the bordered notices npm tooling prints: one blank
/// row above and below the text and three spaces of padding either
/// side. Only the border is colored.
pub fn render_frame(message: &str) -> String {
    let border = if should_use_colors() {
        Style::new().red()
    } else {
        Style::new()
    };
    render_frame_styled(message, &border)
}

fn render_frame_styled(message: &str, border: &Style) -> String {
    let lines: Vec<&str> = message.lines().collect();
    let content_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let inner_width = content_width + 6;

    let side = border.apply_to("║").to_string();
    let mut output = String::new();

    output.push_str(&border.apply_to(format!("╔{}╗", "═".repeat(inner_width))).to_string());
    output.push('\n');

    output.push_str(&format!("{}{}{}\n", side, " ".repeat(inner_width), side));
    for line in &lines {
        output.push_str(&format!(
            "{}   {:<width$}   {}\n",
            side,
            line,
            side,
            width = content_width
        ));
    }
    output.push_str(&format!("{}{}{}\n", side, " ".repeat(inner_width), side));

    output.push_str(&border.apply_to(format!("╚{}╝", "═".repeat(inner_width))).to_string());
    output
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // NO_COLOR convention (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn plain(message: &str) -> String {
        render_frame_styled(message, &Style::new())
    }

    #[test]
    fn frame_matches_expected_layout() {
        let expected = "\
╔════════╗
║        ║
║   hi   ║
║        ║
╚════════╝";
        assert_eq!(plain("hi"), expected);
    }

    #[test]
    fn frame_uses_double_border() {
        let frame = plain("Use \"npm install\" for installation in this project");
        assert!(frame.contains('╔'));
        assert!(frame.contains('╗'));
        assert!(frame.contains('╚'));
        assert!(frame.contains('╝'));
        assert!(frame.contains('║'));
        assert!(frame.contains('═'));
    }

    #[test]
    fn every_row_has_the_same_width() {
        let frame = plain(
            "Use \"pnpm install\" for installation in this project.\n\nIf you don't have pnpm, install it via \"corepack enable\".\nFor more details, go to https://pnpm.js.org/",
        );
        let widths: HashSet<usize> = frame.lines().map(|line| line.chars().count()).collect();
        assert_eq!(widths.len(), 1, "ragged frame: {:?}", widths);
    }

    #[test]
    fn short_lines_pad_to_the_longest() {
        let long = "a much longer line";
        let frame = plain(&format!("ab\n{}", long));
        assert!(frame.contains(&format!("║   {}   ║", long)));
        assert!(frame.contains(&format!("║   {:<width$}   ║", "ab", width = long.chars().count())));
    }

    #[test]
    fn blank_interior_lines_survive() {
        let frame = plain("top\n\nbottom");
        // top/bottom padding rows plus the blank message line
        let blank_rows = frame
            .lines()
            .filter(|line| line.starts_with('║') && line.trim_matches(['║', ' ']).is_empty())
            .count();
        assert_eq!(blank_rows, 3);
    }

    #[test]
    fn padding_row_above_and_below_text() {
        let frame = plain("hello");
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].trim_matches(['║', ' ']).is_empty());
        assert!(lines[3].trim_matches(['║', ' ']).is_empty());
        assert!(lines[2].contains("hello"));
    }
}
