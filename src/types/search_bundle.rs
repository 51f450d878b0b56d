use serde::{Deserialize, Serialize};

use crate::bill::Bill;
use crate::classifier::ClassifyError;
use crate::types::identifiers::CorpusVersion;

/// One topic label with the cosine similarity between it and the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTopic {
    pub topic: String,
    pub confidence: f32,
}

impl ScoredTopic {
    pub fn new(topic: impl Into<String>, confidence: f32) -> Self {
        Self {
            topic: topic.into(),
            confidence,
        }
    }
}

/// Outcome of one bucket after the fill pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub topic: String,
    pub capacity: usize,
    pub filled: usize,
}

/// Metadata describing how a headline search was resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    pub headline: String,
    pub corpus_version: CorpusVersion,
    pub topics: Vec<ScoredTopic>,
    pub buckets: Vec<BucketSummary>,
    pub bills_considered: usize,
    pub legislator_bills: usize,
}

/// The final result of a headline search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub bills: Vec<Bill>,
    pub search: SearchMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("No scored topics to allocate buckets for")]
    NoTopics,

    #[error("Invalid total confidence: {0}")]
    InvalidConfidence(f32),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),
}
