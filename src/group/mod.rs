// Groups of speakers and the pairwise orchestration over them.

pub mod models;
pub mod orchestrator;
