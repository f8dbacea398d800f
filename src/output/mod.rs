// Output formatting: terminal display for the CLI.

pub mod terminal;

/// Format a weight to four decimals, the precision the reports show.
pub fn format_weight(weight: f64) -> String {
    format!("{weight:.4}")
}
