//! Topic-weighted legislative bill retrieval.
//!
//! `docket-core` maps free text (typically a news headline) to a small,
//! diverse set of bills. A [`classifier::TopicClassifier`] scores the text
//! against embeddings of every topic label in the bill corpus, and a
//! [`selection::TopicSearcher`] spreads a fixed result budget across the
//! matched topics in proportion to their confidence, moving bills
//! cosponsored by the caller's own legislators to the front.
//!
//! Retrieval is deterministic: identical inputs always produce identical
//! output order. Corpus artifacts are grouped into immutable
//! [`corpus::CorpusSnapshot`] generations that can be swapped atomically.

pub mod bill;
pub mod cache;
pub mod classifier;
pub mod corpus;
pub mod district;
pub mod selection;
pub mod similarity;
pub mod types;
