// Category counter — per-category occurrence counts for one token stream.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Category, CategoryDictionary, CATEGORY_COUNT};

/// Occurrence counts for all eight categories, indexed by [`Category`].
///
/// Always total: a category no token belongs to is present with count 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts([u32; CATEGORY_COUNT]);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// `(category, count)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| n as u64).sum()
    }

    pub fn as_array(&self) -> &[u32; CATEGORY_COUNT] {
        &self.0
    }
}

impl Index<Category> for CategoryCounts {
    type Output = u32;

    fn index(&self, category: Category) -> &u32 {
        &self.0[category.index()]
    }
}

impl From<[u32; CATEGORY_COUNT]> for CategoryCounts {
    fn from(counts: [u32; CATEGORY_COUNT]) -> Self {
        Self(counts)
    }
}

/// Count category memberships across a token stream.
///
/// Each token adds 1 to every category it belongs to, so a token listed
/// under two categories counts toward both. Tokens missing from the
/// dictionary count toward none.
pub fn count<S: AsRef<str>>(tokens: &[S], dictionary: &CategoryDictionary) -> CategoryCounts {
    let mut counts = [0u32; CATEGORY_COUNT];
    for token in tokens {
        for category in dictionary.lookup(token.as_ref()).iter() {
            counts[category.index()] += 1;
        }
    }
    CategoryCounts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream_is_all_zero() {
        let dict = CategoryDictionary::from_entries([("i", vec![Category::PersonalPronoun])]);
        let counts = count::<&str>(&[], &dict);
        assert_eq!(counts, CategoryCounts::default());
        assert_eq!(counts.iter().count(), CATEGORY_COUNT);
    }

    #[test]
    fn test_multi_category_token_counts_twice() {
        let dict = CategoryDictionary::from_entries([(
            "don't",
            vec![Category::AuxiliaryVerb, Category::Negation],
        )]);
        let counts = count(&["don't", "go"], &dict);
        assert_eq!(counts[Category::AuxiliaryVerb], 1);
        assert_eq!(counts[Category::Negation], 1);
        assert_eq!(counts.total(), 2);
    }
}
