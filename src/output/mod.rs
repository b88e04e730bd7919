// Output — CSV sink and terminal display.

pub mod csv_sink;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so speaker ids with accented letters
/// or emoji never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Mean of the defined scores, or `None` if there are none.
pub fn mean_score(scores: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, n) = scores
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, n), s| (sum + s, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}
