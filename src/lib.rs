// stylematch: pairwise Language Style Matching for dyads and groups
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: text preparation, dictionary lookup, scoring, group
// orchestration, and the input/output layers around them.

pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod group;
pub mod input;
pub mod output;
pub mod scoring;
pub mod text;
