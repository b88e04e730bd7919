// Group data models — speakers, segments and the rows produced for them.
//
// These types flow between the input loaders, the orchestrator and the
// output sinks. They derive serde so JSON documents deserialize straight
// into them.

use serde::{Deserialize, Serialize};

/// One speaker (or writer) and their turns, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Unique within a group, not necessarily across groups
    pub id: String,
    #[serde(default)]
    pub turns: Vec<String>,
}

impl Speaker {
    pub fn new(id: impl Into<String>, turns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            turns: turns.into_iter().map(Into::into).collect(),
        }
    }

    /// All turns as one text unit, each turn followed by a newline.
    pub fn joined_text(&self) -> String {
        self.turns.iter().fold(String::new(), |mut text, turn| {
            text.push_str(turn);
            text.push('\n');
            text
        })
    }
}

/// Speakers analyzed together: one conversation, file, or segment of one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub speakers: Vec<Speaker>,
}

impl Group {
    pub fn new(speakers: Vec<Speaker>) -> Self {
        Self { speakers }
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    /// Number of unordered speaker pairs, n(n-1)/2.
    pub fn pair_count(&self) -> usize {
        let n = self.speakers.len();
        n * n.saturating_sub(1) / 2
    }
}

/// A group plus the caller's segment number for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub segment_number: u64,
    #[serde(flatten)]
    pub group: Group,
}

/// A batch of segments from one input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Forwarded to the output untouched
    pub file_id: String,
    pub segments: Vec<Segment>,
}

/// The comparison of one unordered speaker pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRow {
    pub speaker_a: String,
    pub speaker_b: String,
    pub tokens_a: usize,
    pub tokens_b: usize,
    /// `None` when either speaker has no tokens
    pub score: Option<f64>,
}

impl PairRow {
    /// Composite pair identifier, `"<idA>;<idB>"`.
    pub fn pair_id(&self) -> String {
        format!("{};{}", self.speaker_a, self.speaker_b)
    }

    /// The score as output text: shortest round-trip decimal, or empty when
    /// undefined. Never "0" for an undefined score.
    pub fn score_text(&self) -> String {
        self.score.map(|s| s.to_string()).unwrap_or_default()
    }

    /// The five output fields: P1, P2, P1_WC, P2_WC, LSM.
    pub fn fields(&self) -> [String; 5] {
        [
            self.speaker_a.clone(),
            self.speaker_b.clone(),
            self.tokens_a.to_string(),
            self.tokens_b.to_string(),
            self.score_text(),
        ]
    }
}

/// A pair row tagged with the segment it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRow {
    pub segment_number: u64,
    pub pair_id: String,
    #[serde(flatten)]
    pub row: PairRow,
}

impl SegmentRow {
    pub fn new(segment_number: u64, row: PairRow) -> Self {
        Self {
            segment_number,
            pair_id: row.pair_id(),
            row,
        }
    }
}
