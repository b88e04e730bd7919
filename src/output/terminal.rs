// Colored terminal output for pair tables, comparisons and dictionaries.

use colored::{ColoredString, Colorize};

use super::{mean_score, truncate_chars};
use crate::dictionary::{Category, CategoryDictionary};
use crate::group::models::SegmentRow;
use crate::group::orchestrator::SpeakerProfile;
use crate::scoring::lsm::LsmBreakdown;

const SCORE_WIDTH: usize = 6;

/// Display one document's pair rows.
pub fn display_rows(file_id: &str, rows: &[SegmentRow]) {
    println!(
        "\n{}",
        format!("=== {} ({} pairs) ===", file_id, rows.len()).bold()
    );

    if rows.is_empty() {
        println!("  No speaker pairs (every segment has fewer than two speakers).");
        return;
    }

    println!(
        "  {:>4}  {:<20} {:<20} {:>6} {:>6}  {:>6}",
        "Seg".dimmed(),
        "P1".dimmed(),
        "P2".dimmed(),
        "P1_WC".dimmed(),
        "P2_WC".dimmed(),
        "LSM".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for row in rows {
        let pair = &row.row;
        println!(
            "  {:>4}  {:<20} {:<20} {:>6} {:>6}  {}",
            row.segment_number,
            truncate_chars(&pair.speaker_a, 17),
            truncate_chars(&pair.speaker_b, 17),
            pair.tokens_a,
            pair.tokens_b,
            score_cell(pair.score),
        );
    }

    let undefined = rows.iter().filter(|r| r.row.score.is_none()).count();
    match mean_score(rows.iter().map(|r| r.row.score)) {
        Some(mean) => println!("\n  Mean LSM: {}", colorize_score(mean, 0)),
        None => println!("\n  Mean LSM: {}", "undefined".dimmed()),
    }
    if undefined > 0 {
        println!(
            "  {} {} pair(s) undefined (a speaker had no analyzable tokens)",
            "~".yellow(),
            undefined
        );
    }
}

/// Display a two-text comparison with its per-category breakdown.
pub fn display_comparison(
    a: &SpeakerProfile,
    b: &SpeakerProfile,
    breakdown: Option<&LsmBreakdown>,
    dictionary: &CategoryDictionary,
) {
    println!("\n{}", "=== Language Style Matching ===".bold());
    println!("  Tokens: A = {}, B = {}", a.token_count, b.token_count);

    let Some(breakdown) = breakdown else {
        println!(
            "  LSM: {}",
            "undefined (one side has no analyzable tokens)".yellow()
        );
        return;
    };

    println!();
    println!(
        "  {:<10} {:>5} {:>5}  {:>6}",
        "Category".dimmed(),
        "A".dimmed(),
        "B".dimmed(),
        "Match".dimmed()
    );
    for category in Category::ALL {
        println!(
            "  {:<10} {:>5} {:>5}  {:>6.3}",
            dictionary.label(category),
            a.counts[category],
            b.counts[category],
            breakdown.get(category),
        );
    }
    println!("\n  LSM: {}", colorize_score(breakdown.score, 0).bold());
}

/// Display a dictionary's categories and how many entries list each.
pub fn display_dictionary(dictionary: &CategoryDictionary) {
    println!(
        "\n{}",
        format!("=== LSM Dictionary ({} entries) ===", dictionary.len()).bold()
    );
    let per_category = dictionary.entries_per_category();
    for category in Category::ALL {
        println!(
            "  {:>2}. {:<10} {:<24} {:>5}",
            category.id(),
            dictionary.label(category),
            category.description().dimmed(),
            per_category[category.index()],
        );
    }
}

/// Right-aligned LSM table cell, padded before coloring so escape codes
/// don't count toward the column width.
fn score_cell(score: Option<f64>) -> String {
    match score {
        Some(s) => colorize_score(s, SCORE_WIDTH).to_string(),
        None => format!("{:>width$}", "-", width = SCORE_WIDTH).dimmed().to_string(),
    }
}

/// Color a score by how closely styles match, right-aligned to `width`.
fn colorize_score(score: f64, width: usize) -> ColoredString {
    let text = format!("{score:>width$.3}");
    if score >= 0.85 {
        text.green()
    } else if score >= 0.70 {
        text.yellow()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match c {
                '\x1b' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => out.push(c),
            }
        }
        out
    }

    #[test]
    fn test_score_cell_pads_visible_text() {
        colored::control::set_override(true);

        let high = score_cell(Some(0.9));
        assert!(high.contains("\x1b["));
        assert!(high.contains(" 0.900"));
        assert_eq!(strip_ansi(&high), " 0.900");

        assert_eq!(strip_ansi(&score_cell(Some(0.5))), " 0.500");
        assert_eq!(strip_ansi(&score_cell(None)), "     -");

        colored::control::unset_override();
    }
}
