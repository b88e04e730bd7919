// Group orchestrator — turns one group of speakers into pairwise LSM rows.
//
// For each speaker, in order:
// 1. Join their turns into one text unit
// 2. Tokenize and drop stop tokens
// 3. Count category occurrences
//
// Then every unordered pair (i, j), i < j, is scored in a fixed order:
// (0,1), (0,2), ..., (0,n-1), (1,2), ... so output is reproducible.

use tracing::debug;

use super::models::{Group, PairRow, Segment, SegmentRow};
use crate::dictionary::CategoryDictionary;
use crate::scoring::counter::{self, CategoryCounts};
use crate::scoring::lsm;
use crate::text::stoplist::StopList;
use crate::text::tokenizer::Tokenizer;

/// One speaker's analyzed stream, held only while their group is processed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerProfile {
    pub token_count: usize,
    pub counts: CategoryCounts,
}

/// Tokenize, filter and count one block of text.
pub fn profile_text(
    text: &str,
    dictionary: &CategoryDictionary,
    tokenizer: &dyn Tokenizer,
    stop_list: &StopList,
) -> SpeakerProfile {
    let tokens = stop_list.filter(tokenizer.tokenize(text));
    SpeakerProfile {
        token_count: tokens.len(),
        counts: counter::count(&tokens, dictionary),
    }
}

/// Score every unordered speaker pair in `group`.
///
/// A group with fewer than two speakers yields no rows.
pub fn process(
    group: &Group,
    dictionary: &CategoryDictionary,
    tokenizer: &dyn Tokenizer,
    stop_list: &StopList,
) -> Vec<PairRow> {
    if group.len() < 2 {
        debug!(speakers = group.len(), "Group has no speaker pairs");
        return Vec::new();
    }

    let profiles: Vec<SpeakerProfile> = group
        .speakers
        .iter()
        .map(|speaker| profile_text(&speaker.joined_text(), dictionary, tokenizer, stop_list))
        .collect();

    let mut rows = Vec::with_capacity(group.pair_count());
    for i in 0..profiles.len() - 1 {
        for j in (i + 1)..profiles.len() {
            let (a, b) = (&profiles[i], &profiles[j]);
            rows.push(PairRow {
                speaker_a: group.speakers[i].id.clone(),
                speaker_b: group.speakers[j].id.clone(),
                tokens_a: a.token_count,
                tokens_b: b.token_count,
                score: lsm::score(&a.counts, a.token_count, &b.counts, b.token_count),
            });
        }
    }

    debug!(
        speakers = group.len(),
        pairs = rows.len(),
        undefined = rows.iter().filter(|r| r.score.is_none()).count(),
        "Scored group"
    );
    rows
}

/// Like [`process`], tagging each row with the segment number and pair id.
pub fn process_segment(
    segment: &Segment,
    dictionary: &CategoryDictionary,
    tokenizer: &dyn Tokenizer,
    stop_list: &StopList,
) -> Vec<SegmentRow> {
    process(&segment.group, dictionary, tokenizer, stop_list)
        .into_iter()
        .map(|row| SegmentRow::new(segment.segment_number, row))
        .collect()
}
