// LIWC-style `.dic` parser.
//
// Format:
//
//   %
//   1	ppron
//   2	ipron
//   %
//   i	1
//   never*	8
//
// The header between the first two `%` lines declares category ids and
// labels; every line after it is a word followed by its category ids.

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use super::{Category, CategoryDictionary, CategorySet};

/// Parse a `.dic` resource into a [`CategoryDictionary`].
///
/// Header ids must be in 1..=8. Word lines that reference an undeclared or
/// non-numeric id keep their other ids; the bad id is skipped with a warning.
pub fn parse_dic(content: &str) -> Result<CategoryDictionary> {
    let mut dict = CategoryDictionary::default();
    let mut declared = CategorySet::EMPTY;
    let mut separators = 0;

    for (line_no, raw) in content.lines().enumerate() {
        let line_no = line_no + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line == "%" {
            separators += 1;
            continue;
        }

        match separators {
            0 => bail!("line {line_no}: expected `%` header before any entries"),
            1 => {
                let (id, label) = split_fields(line);
                let id = label_id(id, line_no)?;
                let label = label.first().copied().unwrap_or_else(|| id.as_str());
                declared.insert(id);
                dict.set_label(id, label);
            }
            _ => {
                let (word, ids) = split_fields(line);
                let mut set = CategorySet::EMPTY;
                for id in ids {
                    match id.parse::<u8>().ok().and_then(Category::from_id) {
                        Some(cat) if declared.contains(cat) => set.insert(cat),
                        _ => warn!(line = line_no, word, id, "Skipping unknown category id"),
                    }
                }
                dict.insert(word, set);
            }
        }
    }

    if separators < 2 {
        bail!("dictionary header is not closed: expected two `%` lines, found {separators}");
    }

    debug!(
        entries = dict.len(),
        categories = declared.len(),
        "Parsed category dictionary"
    );
    Ok(dict)
}

/// Split a line into its first field and the remaining fields.
///
/// Tab-separated lines keep spaces inside the first field; otherwise any
/// whitespace separates fields.
fn split_fields(line: &str) -> (&str, Vec<&str>) {
    let mut fields: Vec<&str> = if line.contains('\t') {
        line.split('\t').map(str::trim).filter(|f| !f.is_empty()).collect()
    } else {
        line.split_whitespace().collect()
    };
    let first = if fields.is_empty() { "" } else { fields.remove(0) };
    (first, fields)
}

fn label_id(id: &str, line_no: usize) -> Result<Category> {
    let n: u8 = id
        .parse()
        .with_context(|| format!("line {line_no}: category id `{id}` is not a number"))?;
    match Category::from_id(n) {
        Some(cat) => Ok(cat),
        None => bail!("line {line_no}: category id {n} is outside the LSM range 1-8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let dic = "%\n1\tppron\n3\tarticle\n%\ni\t1\nthe\t3\na\t3\n";
        let d = parse_dic(dic).unwrap();
        assert_eq!(d.len(), 3);
        assert!(d.lookup("the").contains(Category::Article));
        assert_eq!(d.label(Category::PersonalPronoun), "ppron");
    }

    #[test]
    fn test_undeclared_id_is_skipped() {
        let dic = "%\n1\tppron\n%\ni\t1\t2\n";
        let d = parse_dic(dic).unwrap();
        let set = d.lookup("i");
        assert_eq!(set.len(), 1);
        assert!(set.contains(Category::PersonalPronoun));
    }

    #[test]
    fn test_header_id_out_of_range_fails() {
        assert!(parse_dic("%\n9\tsocial\n%\n").is_err());
        assert!(parse_dic("%\nxx\tppron\n%\n").is_err());
    }

    #[test]
    fn test_missing_header_fails() {
        assert!(parse_dic("i\t1\n").is_err());
        assert!(parse_dic("%\n1\tppron\ni\t1\n").is_err());
    }

    #[test]
    fn test_space_separated_lines() {
        let d = parse_dic("%\n8 negate\n%\nnever* 8\n").unwrap();
        assert!(d.lookup("nevermind").contains(Category::Negation));
    }
}
