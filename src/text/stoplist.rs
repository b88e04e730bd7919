// Stop list — punctuation and small-number tokens dropped before counting.
//
// These tokens would otherwise inflate every speaker's word count without
// ever matching a function-word category, skewing the category ratios. The
// list is fixed: published LSM figures depend on reproducing it exactly.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens removed from every token stream, matched exactly (case-sensitive).
pub const STOP_TOKENS: &[&str] = &[
    "`", "~", "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+", "-", "–", "=", "[", "]",
    "\\", ";", "'", ",", ".", "/", "{", "}", "|", ":", "\"", "<", ">", "?", "..", "...", "«",
    "««", "»»", "“", "”", "‘", "‘‘", "’", "’’", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "0", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "25", "30", "33",
    "40", "50", "60", "66", "70", "75", "80", "90", "99", "100", "123", "1000", "10000", "12345",
    "100000", "1000000",
];

static DEFAULT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_TOKENS.iter().copied().collect());

/// Filter over the fixed stop token set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopList;

impl StopList {
    /// Whether `token` is dropped from the stream.
    pub fn contains(&self, token: &str) -> bool {
        DEFAULT_SET.contains(token)
    }

    /// Drop stop tokens, preserving the order of everything else.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.contains(t))
            .collect()
    }

    pub fn len(&self) -> usize {
        DEFAULT_SET.len()
    }

    pub fn is_empty(&self) -> bool {
        DEFAULT_SET.is_empty()
    }
}
