use thiserror::Error;
use tracing::debug;

use crate::cache::versioning::CorpusConfig;
use crate::classifier::embedding::{Embedder, EmbeddingError};
use crate::classifier::table::TopicEmbeddingTable;
use crate::similarity::{cosine_similarity, SimilarityError};
use crate::types::search_bundle::ScoredTopic;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Text to classify is empty")]
    EmptyText,
    #[error("No topics available")]
    NoTopics,
    #[error("Query embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("Topic table was built with model {table:?}, provider uses {provider:?}")]
    ModelMismatch { table: String, provider: String },
    #[error("Query has dimension {actual}, topic table expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Similarity failed: {0}")]
    Similarity(#[from] SimilarityError),
}

/// Ranks topic labels by cosine similarity to a piece of text.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    table: TopicEmbeddingTable,
    max_topics: usize,
    relative_threshold: f32,
}

impl TopicClassifier {
    pub fn new(table: TopicEmbeddingTable) -> Self {
        Self::with_config(table, &CorpusConfig::v0())
    }

    pub fn with_config(table: TopicEmbeddingTable, config: &CorpusConfig) -> Self {
        Self {
            table,
            max_topics: config.max_topics,
            relative_threshold: config.relative_threshold,
        }
    }

    pub fn table(&self) -> &TopicEmbeddingTable {
        &self.table
    }

    /// Embed `text` and rank it against every topic in the table.
    pub fn classify<E>(&self, embedder: &E, text: &str) -> Result<Vec<ScoredTopic>, ClassifyError>
    where
        E: Embedder + ?Sized,
    {
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyText);
        }
        if self.table.is_empty() {
            return Err(ClassifyError::NoTopics);
        }
        if embedder.model() != self.table.model() {
            return Err(ClassifyError::ModelMismatch {
                table: self.table.model().to_string(),
                provider: embedder.model().to_string(),
            });
        }

        let query = embedder.embed(text)?;
        let topics = self.rank(&query)?;

        debug!(
            topics = ?topics.iter().map(|t| (&t.topic, t.confidence)).collect::<Vec<_>>(),
            "classified text"
        );

        Ok(topics)
    }

    /// Score an already-embedded query.
    ///
    /// Returns at most `max_topics` entries in descending confidence, keeping
    /// only those at or above `top_confidence * relative_threshold`.
    pub fn rank(&self, query: &[f32]) -> Result<Vec<ScoredTopic>, ClassifyError> {
        if self.table.is_empty() {
            return Err(ClassifyError::NoTopics);
        }
        if query.len() != self.table.dimensions() {
            return Err(ClassifyError::DimensionMismatch {
                expected: self.table.dimensions(),
                actual: query.len(),
            });
        }

        let mut scored = self
            .table
            .iter()
            .map(|(topic, vector)| -> Result<ScoredTopic, ClassifyError> {
                Ok(ScoredTopic::new(topic, cosine_similarity(query, vector)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Stable and total, so NaN scores cannot break the sort.
        scored.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let top_confidence = scored[0].confidence;
        let cutoff = top_confidence * self.relative_threshold;

        Ok(scored
            .into_iter()
            .take(self.max_topics)
            .filter(|scored_topic| scored_topic.confidence >= cutoff)
            .collect())
    }
}
