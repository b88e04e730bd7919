// Plain transcript loader.
//
//   Alice: I think we should go.
//   Bob: We should go now.
//   and take the car.          <- continues Bob's turn
//   ---                        <- next segment
//   Alice: ...
//
// Speakers keep the order they first speak in within each segment.
// Segments are numbered from 1.
//
// A `Name:` prefix starts a turn when the name has already spoken in the
// segment, or when it looks like a speaker label: at most three words of
// letters, digits and `.`, `_`, `-`, `'`, starting with an uppercase letter
// or a digit. Clock times (`10:30`), URL schemes and annotation labels such
// as `Note:` stay inside the running turn.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::group::models::{Document, Group, Segment, Speaker};

static SPEAKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:]{1,40}?)\s*:(.*)$").expect("valid speaker pattern")
});

const SEGMENT_BREAK: &str = "---";

const MAX_NAME_WORDS: usize = 3;

/// Prefixes that annotate a turn rather than name a speaker (lower-cased).
const ANNOTATION_LABELS: &[&str] = &[
    "note", "nb", "n.b", "ps", "p.s", "edit", "update", "source", "re", "fyi", "subject",
    "time", "date", "example", "e.g", "i.e",
];

#[derive(Default)]
struct SegmentBuilder {
    speakers: Vec<Speaker>,
    /// Index into `speakers` of whoever spoke last
    current: Option<usize>,
}

impl SegmentBuilder {
    fn start_turn(&mut self, id: &str, text: &str) {
        let idx = match self.speakers.iter().position(|s| s.id == id) {
            Some(idx) => idx,
            None => {
                self.speakers.push(Speaker::new(id, Vec::<String>::new()));
                self.speakers.len() - 1
            }
        };
        self.speakers[idx].turns.push(text.to_string());
        self.current = Some(idx);
    }

    fn knows(&self, id: &str) -> bool {
        self.speakers.iter().any(|s| s.id == id)
    }

    fn continue_turn(&mut self, text: &str) {
        // Text before anyone has spoken has no owner
        let Some(idx) = self.current else { return };
        if let Some(turn) = self.speakers[idx].turns.last_mut() {
            if !turn.is_empty() {
                turn.push(' ');
            }
            turn.push_str(text);
        }
    }

    fn finish(self) -> Option<Group> {
        if self.speakers.is_empty() {
            None
        } else {
            Some(Group::new(self.speakers))
        }
    }
}

/// Parse transcript text into a document with one segment per `---` block.
pub fn parse_transcript(content: &str, file_id: &str) -> Document {
    let mut groups = Vec::new();
    let mut builder = SegmentBuilder::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == SEGMENT_BREAK {
            groups.extend(std::mem::take(&mut builder).finish());
            continue;
        }
        match SPEAKER_LINE.captures(trimmed) {
            Some(caps) if is_speaker_label(&caps[1], &caps[2], &builder) => {
                builder.start_turn(&caps[1], caps[2].trim());
            }
            _ => builder.continue_turn(trimmed),
        }
    }
    groups.extend(builder.finish());

    Document {
        file_id: file_id.to_string(),
        segments: groups
            .into_iter()
            .zip(1u64..)
            .map(|(group, segment_number)| Segment {
                segment_number,
                group,
            })
            .collect(),
    }
}

/// Whether `name` (the text before the first colon) opens a new turn.
/// `rest` is everything after the colon, untrimmed.
fn is_speaker_label(name: &str, rest: &str, builder: &SegmentBuilder) -> bool {
    if builder.knows(name) {
        return true;
    }

    // `https://...`
    if rest.starts_with("//") {
        return false;
    }
    // `10:30`, `2:1`
    let digit = |c: char| c.is_ascii_digit();
    if name.ends_with(digit) && rest.starts_with(digit) {
        return false;
    }

    let Some(first) = name.chars().next() else {
        return false;
    };
    if !(first.is_uppercase() || first.is_ascii_digit()) {
        return false;
    }
    if name.split_whitespace().count() > MAX_NAME_WORDS {
        return false;
    }
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || matches!(c, '.' | '_' | '-' | '\''))
    {
        return false;
    }

    let lowered = name.trim_end_matches('.').to_lowercase();
    !ANNOTATION_LABELS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speakers_in_first_appearance_order() {
        let doc = parse_transcript("Bob: hi\nAlice: hello\nBob: how are you", "t");
        let group = &doc.segments[0].group;
        assert_eq!(group.speakers[0].id, "Bob");
        assert_eq!(group.speakers[0].turns, vec!["hi", "how are you"]);
        assert_eq!(group.speakers[1].id, "Alice");
    }

    #[test]
    fn test_continuation_lines_join_previous_turn() {
        let doc = parse_transcript("Bob: we should\ngo now\n", "t");
        assert_eq!(doc.segments[0].group.speakers[0].turns, vec!["we should go now"]);
    }

    #[test]
    fn test_segment_breaks_number_from_one() {
        let doc = parse_transcript("A: one\nB: two\n---\nA: three\n---\n---\nC: four", "t");
        let numbers: Vec<u64> = doc.segments.iter().map(|s| s.segment_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(doc.segments[2].group.speakers[0].id, "C");
    }

    #[test]
    fn test_empty_turn_is_kept() {
        let doc = parse_transcript("A:\nB: words here", "t");
        let group = &doc.segments[0].group;
        assert_eq!(group.speakers[0].turns, vec![""]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_url_line_is_not_a_speaker() {
        let doc = parse_transcript("A: look at\nhttps://example.com", "t");
        let group = &doc.segments[0].group;
        assert_eq!(group.len(), 1);
        assert_eq!(group.speakers[0].turns, vec!["look at https://example.com"]);
    }

    #[test]
    fn test_clock_time_is_not_a_speaker() {
        let doc = parse_transcript("Alice: we met\nat 10:30 and left\nBob: ok", "t");
        let group = &doc.segments[0].group;
        assert_eq!(group.len(), 2);
        assert_eq!(group.speakers[0].turns, vec!["we met at 10:30 and left"]);
        assert_eq!(group.speakers[1].id, "Bob");
        assert_eq!(group.speakers[1].turns, vec!["ok"]);
    }

    #[test]
    fn test_annotation_label_continues_turn() {
        let doc = parse_transcript("Alice: it is wrong\nNote: see above\nPS: sorry", "t");
        let group = &doc.segments[0].group;
        assert_eq!(group.len(), 1);
        assert_eq!(group.speakers[0].turns, vec!["it is wrong Note: see above PS: sorry"]);
    }

    #[test]
    fn test_sentence_with_colon_continues_turn() {
        let doc = parse_transcript(
            "A: two things\nthe first one is this: go\nMy plan, roughly: wait",
            "t",
        );
        let group = &doc.segments[0].group;
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_known_lowercase_speaker_keeps_turns() {
        // A lower-case label is only a speaker once it has spoken
        let doc = parse_transcript("Bob: hi\nbob: again", "t");
        assert_eq!(doc.segments[0].group.len(), 1);
        assert_eq!(doc.segments[0].group.speakers[0].turns, vec!["hi bob: again"]);

        let mut builder = SegmentBuilder::default();
        builder.start_turn("p1", "hi");
        assert!(is_speaker_label("p1", " again", &builder));
        assert!(!is_speaker_label("p2", " hello", &builder));
    }

    #[test]
    fn test_speaker_ids_with_digits() {
        let doc = parse_transcript("P1: hello\nP2: 10 minutes late", "t");
        let group = &doc.segments[0].group;
        assert_eq!(group.len(), 2);
        assert_eq!(group.speakers[1].turns, vec!["10 minutes late"]);
    }
}
