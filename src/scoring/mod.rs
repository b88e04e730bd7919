// Scoring — category counting and pairwise LSM similarity.

pub mod counter;
pub mod lsm;
