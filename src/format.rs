//! Bounded rendering of float lists for console output

use std::fmt::Write;

/// Default number of elements shown by [`preview`]
pub const DEFAULT_PREVIEW: usize = 10;

/// Render at most `max` leading values as `[a, b, c]`.
///
/// A truncated list ends with `, ...]`. An empty list renders as
/// `No element in vector.`
pub fn preview(values: &[f32], max: usize) -> String {
    if values.is_empty() {
        return "No element in vector.".to_string();
    }

    let shown = values.len().min(max.max(1));
    let mut out = String::from("[");
    for (i, v) in values[..shown].iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", v);
    }
    if shown < values.len() {
        out.push_str(", ...");
    }
    out.push(']');
    out
}

/// Side-by-side rows `"\t{reference} vs {approx}"` for the first `max` pairs.
pub fn comparison_rows(reference: &[f32], approx: &[f32], max: usize) -> Vec<String> {
    reference
        .iter()
        .zip(approx)
        .take(max)
        .map(|(r, a)| format!("\t{} vs {}", r, a))
        .collect()
}
