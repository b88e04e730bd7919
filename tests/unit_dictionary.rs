// Unit tests for dictionary parsing and lookup, including the bundled
// LSM dictionary.

use stylematch::dictionary::{Category, CategoryDictionary, BUNDLED_DICTIONARY};

const SAMPLE: &str = "\
%
1\tppron
2\tipron
3\tarticle
4\tconj
5\tprep
6\tauxverb
7\tadverb
8\tnegate
%
i\t1
we\t1
it\t2
the\t3
and\t4
in\t5
was\t6
really\t7
not\t8
n't*\t8
don't\t6\t8
";

// ============================================================
// Parsing
// ============================================================

#[test]
fn parses_all_eight_categories() {
    let dict = CategoryDictionary::from_dic(SAMPLE).unwrap();
    assert_eq!(dict.len(), 11);
    for (category, n) in Category::ALL.iter().zip(dict.entries_per_category()) {
        assert!(n >= 1, "{category} has no entries");
    }
    assert_eq!(dict.label(Category::Negation), "negate");
}

#[test]
fn multi_category_entries() {
    let dict = CategoryDictionary::from_dic(SAMPLE).unwrap();
    let set = dict.lookup("don't");
    assert!(set.contains(Category::AuxiliaryVerb));
    assert!(set.contains(Category::Negation));
    assert_eq!(set.len(), 2);
}

#[test]
fn header_labels_override_canonical_names() {
    let dict = CategoryDictionary::from_dic("%\n1\tpersonal\n%\ni\t1\n").unwrap();
    assert_eq!(dict.label(Category::PersonalPronoun), "personal");
    // Undeclared categories fall back to the short label
    assert_eq!(dict.label(Category::Article), "article");
}

#[test]
fn non_lsm_category_ids_are_rejected_in_header() {
    let err = CategoryDictionary::from_dic("%\n1\tppron\n12\tsocial\n%\n").unwrap_err();
    assert!(err.to_string().contains("12"), "unexpected error: {err}");
}

#[test]
fn blank_lines_are_ignored() {
    let dict = CategoryDictionary::from_dic("\n%\n\n1\tppron\n%\n\ni\t1\n\n").unwrap();
    assert_eq!(dict.len(), 1);
}

#[test]
fn windows_line_endings_parse() {
    let dict = CategoryDictionary::from_dic("%\r\n3\tarticle\r\n%\r\nthe\t3\r\n").unwrap();
    assert!(dict.lookup("the").contains(Category::Article));
}

// ============================================================
// Lookup
// ============================================================

#[test]
fn missing_tokens_map_to_no_categories() {
    let dict = CategoryDictionary::from_dic(SAMPLE).unwrap();
    assert!(dict.lookup("elephant").is_empty());
    assert!(dict.lookup("").is_empty());
}

#[test]
fn wildcard_prefix_lookup() {
    let dict = CategoryDictionary::from_dic(SAMPLE).unwrap();
    assert!(dict.lookup("n'tever").contains(Category::Negation));
    assert!(dict.lookup("n't").contains(Category::Negation));
}

#[test]
fn empty_dictionary_matches_nothing() {
    let dict = CategoryDictionary::default();
    assert!(dict.is_empty());
    assert!(dict.lookup("i").is_empty());
}

// ============================================================
// Bundled dictionary
// ============================================================

#[test]
fn bundled_dictionary_parses() {
    let dict = CategoryDictionary::from_dic(BUNDLED_DICTIONARY).unwrap();
    assert!(dict.len() > 200);
}

#[test]
fn bundled_dictionary_spot_checks() {
    let dict = CategoryDictionary::bundled().unwrap();
    let cases = [
        ("we", Category::PersonalPronoun),
        ("it", Category::ImpersonalPronoun),
        ("an", Category::Article),
        ("because", Category::Conjunction),
        ("with", Category::Preposition),
        ("would", Category::AuxiliaryVerb),
        ("very", Category::Adverb),
        ("never", Category::Negation),
    ];
    for (word, category) in cases {
        assert!(dict.lookup(word).contains(category), "{word} should be {category}");
    }
}

#[test]
fn bundled_contractions_count_as_negations() {
    let dict = CategoryDictionary::bundled().unwrap();
    let set = dict.lookup("didn't");
    assert!(set.contains(Category::AuxiliaryVerb));
    assert!(set.contains(Category::Negation));
}
