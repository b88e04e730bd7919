// Pairwise Language Style Matching score.
//
// For each category c, with ratio_x = count_x[c] / len_x:
//
//   s_c = 1 - |ratio_a - ratio_b| / (ratio_a + ratio_b + EPSILON)
//
// and the pair's LSM score is the mean of the eight s_c values. EPSILON
// only keeps the denominator nonzero: a category both speakers never use
// scores exactly 1.0. The score is undefined when either speaker has no
// tokens, since there is nothing to compare.

use serde::Serialize;

use super::counter::CategoryCounts;
use crate::dictionary::{Category, CATEGORY_COUNT};

/// Denominator stabilizer for the per-category similarity.
pub const EPSILON: f64 = 0.0001;

/// Per-category similarities behind one pair's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LsmBreakdown {
    /// `s_c` for each category, in id order
    pub categories: [f64; CATEGORY_COUNT],
    /// Mean of `categories`
    pub score: f64,
}

impl LsmBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        self.categories[category.index()]
    }
}

/// Similarity of one category's usage rates.
pub fn category_similarity(ratio_a: f64, ratio_b: f64) -> f64 {
    1.0 - (ratio_a - ratio_b).abs() / (ratio_a + ratio_b + EPSILON)
}

/// Full per-category breakdown, or `None` if either token count is zero.
pub fn breakdown(
    counts_a: &CategoryCounts,
    len_a: usize,
    counts_b: &CategoryCounts,
    len_b: usize,
) -> Option<LsmBreakdown> {
    if len_a == 0 || len_b == 0 {
        return None;
    }

    let mut categories = [0.0; CATEGORY_COUNT];
    for category in Category::ALL {
        let ratio_a = counts_a.get(category) as f64 / len_a as f64;
        let ratio_b = counts_b.get(category) as f64 / len_b as f64;
        categories[category.index()] = category_similarity(ratio_a, ratio_b);
    }

    let score = categories.iter().sum::<f64>() / CATEGORY_COUNT as f64;
    Some(LsmBreakdown { categories, score })
}

/// LSM score in (0, 1], or `None` (undefined) if either token count is zero.
pub fn score(
    counts_a: &CategoryCounts,
    len_a: usize,
    counts_b: &CategoryCounts,
    len_b: usize,
) -> Option<f64> {
    breakdown(counts_a, len_a, counts_b, len_b).map(|b| b.score)
}
