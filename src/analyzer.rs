// LSM analyzer — the initialize/process surface around the scoring core.
//
// `initialize` loads the category dictionary once; after that the analyzer
// is immutable, so one instance can score many segments, and segments of a
// document can be scored in parallel with rayon without any locking.

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::info;

use crate::dictionary::CategoryDictionary;
use crate::group::models::{Document, Group, PairRow, Segment, SegmentRow};
use crate::group::orchestrator::{self, SpeakerProfile};
use crate::scoring::lsm::{self, LsmBreakdown};
use crate::text::stoplist::StopList;
use crate::text::tokenizer::{Tokenizer, TwitterAwareTokenizer};

/// Loaded dictionary plus the tokenizer and stop list used with it.
pub struct LsmAnalyzer {
    dictionary: CategoryDictionary,
    tokenizer: Box<dyn Tokenizer>,
    stop_list: StopList,
}

impl LsmAnalyzer {
    /// Parse a `.dic` dictionary resource and pair it with the default
    /// tokenizer.
    pub fn initialize(dictionary_source: &str) -> Result<Self> {
        let dictionary = CategoryDictionary::from_dic(dictionary_source)
            .context("Failed to parse LSM dictionary")?;
        info!(entries = dictionary.len(), "Loaded LSM dictionary");
        Ok(Self::new(dictionary, Box::new(TwitterAwareTokenizer)))
    }

    /// Analyzer over the compiled-in dictionary.
    pub fn bundled() -> Result<Self> {
        Self::initialize(crate::dictionary::BUNDLED_DICTIONARY)
    }

    pub fn new(dictionary: CategoryDictionary, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            dictionary,
            tokenizer,
            stop_list: StopList,
        }
    }

    pub fn dictionary(&self) -> &CategoryDictionary {
        &self.dictionary
    }

    /// Pairwise rows for one group.
    pub fn process(&self, group: &Group) -> Vec<PairRow> {
        orchestrator::process(
            group,
            &self.dictionary,
            self.tokenizer.as_ref(),
            &self.stop_list,
        )
    }

    /// Pairwise rows for one segment, tagged with its number and pair ids.
    pub fn process_segment(&self, segment: &Segment) -> Vec<SegmentRow> {
        orchestrator::process_segment(
            segment,
            &self.dictionary,
            self.tokenizer.as_ref(),
            &self.stop_list,
        )
    }

    /// Rows for every segment of a document, in segment order.
    ///
    /// With `parallel`, segments are scored on the rayon pool; the output is
    /// identical to the sequential run.
    pub fn process_document(&self, document: &Document, parallel: bool) -> Vec<SegmentRow> {
        let rows: Vec<SegmentRow> = if parallel {
            document
                .segments
                .par_iter()
                .map(|segment| self.process_segment(segment))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            document
                .segments
                .iter()
                .flat_map(|segment| self.process_segment(segment))
                .collect()
        };

        info!(
            file = %document.file_id,
            segments = document.segments.len(),
            rows = rows.len(),
            "Processed document"
        );
        rows
    }

    /// Token count and category counts for a single text.
    pub fn profile(&self, text: &str) -> SpeakerProfile {
        orchestrator::profile_text(
            text,
            &self.dictionary,
            self.tokenizer.as_ref(),
            &self.stop_list,
        )
    }

    /// Compare two free-standing texts, with the per-category breakdown.
    ///
    /// Returns the two profiles and `None` for the breakdown when either
    /// text has no tokens left after filtering.
    pub fn compare(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> (SpeakerProfile, SpeakerProfile, Option<LsmBreakdown>) {
        let a = self.profile(text_a);
        let b = self.profile(text_b);
        let breakdown = lsm::breakdown(&a.counts, a.token_count, &b.counts, b.token_count);
        (a, b, breakdown)
    }
}
