// Text preparation — tokenization and stop-token filtering.

pub mod stoplist;
pub mod tokenizer;
