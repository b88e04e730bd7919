// The eight canonical LSM function-word categories.

use serde::{Deserialize, Serialize};

/// Number of LSM categories. Every count vector covers all of them.
pub const CATEGORY_COUNT: usize = 8;

/// An LSM function-word category. Discriminants are the dictionary ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    PersonalPronoun = 1,
    ImpersonalPronoun = 2,
    Article = 3,
    Conjunction = 4,
    Preposition = 5,
    AuxiliaryVerb = 6,
    Adverb = 7,
    Negation = 8,
}

impl Category {
    /// All categories in id order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::PersonalPronoun,
        Category::ImpersonalPronoun,
        Category::Article,
        Category::Conjunction,
        Category::Preposition,
        Category::AuxiliaryVerb,
        Category::Adverb,
        Category::Negation,
    ];

    /// Map a dictionary id (1..=8) to its category.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=8 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based slot in a count vector.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Short LIWC-style label.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::PersonalPronoun => "ppron",
            Category::ImpersonalPronoun => "ipron",
            Category::Article => "article",
            Category::Conjunction => "conj",
            Category::Preposition => "prep",
            Category::AuxiliaryVerb => "auxverb",
            Category::Adverb => "adverb",
            Category::Negation => "negate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::PersonalPronoun => "Personal pronouns",
            Category::ImpersonalPronoun => "Impersonal pronouns",
            Category::Article => "Articles",
            Category::Conjunction => "Conjunctions",
            Category::Preposition => "Prepositions",
            Category::AuxiliaryVerb => "Auxiliary verbs",
            Category::Adverb => "High-frequency adverbs",
            Category::Negation => "Negations",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
