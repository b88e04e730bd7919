// Category dictionary — token to LSM category membership.
//
// Loaded once from a LIWC-style `.dic` resource and never mutated after, so
// a single dictionary can be shared across threads by reference. Lookup
// supports exact entries and trailing-`*` wildcard entries; an exact entry
// always wins over a wildcard.

pub mod category;
pub mod parser;

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;

pub use category::{Category, CATEGORY_COUNT};

/// The default LSM dictionary compiled into the binary.
pub const BUNDLED_DICTIONARY: &str = include_str!("../../data/lsm.dic");

/// A set of categories packed into one byte (bit `id - 1` per category).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn insert(&mut self, category: Category) {
        self.0 |= 1 << category.index();
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & (1 << category.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Member categories in id order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// Immutable token → category lookup table.
#[derive(Debug, Clone, Default)]
pub struct CategoryDictionary {
    exact: HashMap<String, CategorySet>,
    /// Wildcard entries keyed by prefix (the word without its `*`)
    wildcards: HashMap<String, CategorySet>,
    /// Longest wildcard prefix in chars, bounds the prefix scan in `lookup`
    max_wildcard_chars: usize,
    /// Category labels as declared in the dictionary header
    labels: BTreeMap<Category, String>,
}

impl CategoryDictionary {
    /// Parse a `.dic` resource. See [`parser::parse_dic`] for the format.
    pub fn from_dic(content: &str) -> Result<Self> {
        parser::parse_dic(content)
    }

    /// The compiled-in default LSM dictionary.
    pub fn bundled() -> Result<Self> {
        Self::from_dic(BUNDLED_DICTIONARY)
    }

    /// Build a dictionary directly from `(word, categories)` pairs.
    ///
    /// Words are lower-cased; a word ending in `*` becomes a wildcard entry.
    /// Repeated words merge their category sets.
    pub fn from_entries<'a, I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, C)>,
        C: IntoIterator<Item = Category>,
    {
        let mut dict = Self::default();
        for (word, categories) in entries {
            let set: CategorySet = categories.into_iter().collect();
            dict.insert(word, set);
        }
        dict
    }

    pub(crate) fn insert(&mut self, word: &str, set: CategorySet) {
        let word = word.to_lowercase();
        if let Some(prefix) = word.strip_suffix('*') {
            self.max_wildcard_chars = self.max_wildcard_chars.max(prefix.chars().count());
            let entry = self.wildcards.entry(prefix.to_string()).or_default();
            entry.0 |= set.0;
        } else {
            let entry = self.exact.entry(word).or_default();
            entry.0 |= set.0;
        }
    }

    pub(crate) fn set_label(&mut self, category: Category, label: &str) {
        self.labels.insert(category, label.to_string());
    }

    /// Categories `token` belongs to. Unknown tokens map to the empty set.
    pub fn lookup(&self, token: &str) -> CategorySet {
        if let Some(set) = self.exact.get(token) {
            return *set;
        }
        if self.wildcards.is_empty() {
            return CategorySet::EMPTY;
        }

        // Longest matching wildcard prefix wins
        let mut ends: Vec<usize> = token
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(self.max_wildcard_chars)
            .collect();
        ends.reverse();
        for end in ends {
            if let Some(set) = self.wildcards.get(&token[..end]) {
                return *set;
            }
        }
        self.wildcards.get("").copied().unwrap_or_default()
    }

    /// Label for a category: the header's name if it declared one, otherwise
    /// the canonical short label.
    pub fn label(&self, category: Category) -> &str {
        self.labels
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.as_str())
    }

    /// Total number of entries (exact plus wildcard).
    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many entries (exact plus wildcard) list each category.
    pub fn entries_per_category(&self) -> [usize; CATEGORY_COUNT] {
        let mut counts = [0usize; CATEGORY_COUNT];
        for set in self.exact.values().chain(self.wildcards.values()) {
            for category in set.iter() {
                counts[category.index()] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> CategoryDictionary {
        CategoryDictionary::from_entries([
            ("i", vec![Category::PersonalPronoun]),
            ("we", vec![Category::PersonalPronoun]),
            ("the", vec![Category::Article]),
            ("never*", vec![Category::Negation]),
            ("neverland", vec![]),
            ("some*", vec![Category::ImpersonalPronoun]),
            ("somewhere*", vec![Category::Adverb]),
        ])
    }

    #[test]
    fn test_exact_lookup() {
        let d = dict();
        assert!(d.lookup("i").contains(Category::PersonalPronoun));
        assert_eq!(d.lookup("i").len(), 1);
        assert!(d.lookup("dog").is_empty());
    }

    #[test]
    fn test_wildcard_matches_prefix_and_itself() {
        let d = dict();
        assert!(d.lookup("never").contains(Category::Negation));
        assert!(d.lookup("nevermore").contains(Category::Negation));
        assert!(d.lookup("neve").is_empty());
    }

    #[test]
    fn test_exact_beats_wildcard() {
        let d = dict();
        assert!(d.lookup("neverland").is_empty());
    }

    #[test]
    fn test_longest_wildcard_wins() {
        let d = dict();
        let set = d.lookup("somewhereelse");
        assert!(set.contains(Category::Adverb));
        assert!(!set.contains(Category::ImpersonalPronoun));
        assert!(d.lookup("something").contains(Category::ImpersonalPronoun));
    }

    #[test]
    fn test_entries_are_lowercased() {
        let d = CategoryDictionary::from_entries([("The", vec![Category::Article])]);
        assert!(d.lookup("the").contains(Category::Article));
        assert!(d.lookup("The").is_empty());
    }

    #[test]
    fn test_repeated_words_merge() {
        let d = CategoryDictionary::from_entries([
            ("that", vec![Category::ImpersonalPronoun]),
            ("that", vec![Category::Conjunction]),
        ]);
        let set = d.lookup("that");
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Category::ImpersonalPronoun, Category::Conjunction]
        );
    }

    #[test]
    fn test_bundled_dictionary_covers_every_category() {
        let d = CategoryDictionary::bundled().unwrap();
        for (i, n) in d.entries_per_category().iter().enumerate() {
            assert!(*n > 0, "category {} has no entries", i + 1);
        }
        assert!(d.lookup("i").contains(Category::PersonalPronoun));
        assert!(d.lookup("the").contains(Category::Article));
    }
}
