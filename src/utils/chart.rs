//! Terminal bar chart for the per-block progress recap.

use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;

/// Render one bar per (block, mean percent) pair, in the given order.
///
/// Example:
/// ```text
/// A1  ████████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░  30.00%
/// B2  ████████████████████████████████████░░░░  90.00%
/// ```
pub fn render_bar_chart(rows: &[(String, f64)]) -> String {
    let label_width = rows
        .iter()
        .map(|(block, _)| UnicodeWidthStr::width(block.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();

    for (block, avg) in rows {
        let filled = ((avg / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);

        out.push_str(&format!(
            "{:<label_width$}  {}{}  {:>6.2}%\n",
            block,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            avg,
        ));
    }

    out
}
