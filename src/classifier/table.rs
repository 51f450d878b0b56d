use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::classifier::embedding::{Embedder, EmbeddingError};
use crate::types::identifiers::CorpusVersion;

#[derive(Debug, Error)]
pub enum TableBuildError {
    #[error("Embedding failed for topic {topic:?}: {source}")]
    Embedding {
        topic: String,
        #[source]
        source: EmbeddingError,
    },
    #[error("Provider returned an empty vector for topic {topic:?}")]
    EmptyEmbedding { topic: String },
    #[error("Topic {topic:?} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        topic: String,
        expected: usize,
        actual: usize,
    },
}

/// Embed every topic label, one provider call per label.
///
/// Any failure aborts the whole build; there is no partial table.
pub fn build_embeddings<E, I, S>(
    embedder: &E,
    topics: I,
) -> Result<BTreeMap<String, Vec<f32>>, TableBuildError>
where
    E: Embedder + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = BTreeMap::new();
    let mut dimensions = None;

    for topic in topics {
        let topic = topic.as_ref();
        if entries.contains_key(topic) {
            continue;
        }

        let vector = embedder
            .embed(topic)
            .map_err(|source| TableBuildError::Embedding {
                topic: topic.to_string(),
                source,
            })?;

        if vector.is_empty() {
            return Err(TableBuildError::EmptyEmbedding {
                topic: topic.to_string(),
            });
        }

        let expected = *dimensions.get_or_insert(vector.len());
        if vector.len() != expected {
            return Err(TableBuildError::DimensionMismatch {
                topic: topic.to_string(),
                expected,
                actual: vector.len(),
            });
        }

        entries.insert(topic.to_string(), vector);

        if entries.len() % 10 == 0 {
            info!(processed = entries.len(), "embedding topics");
        }
    }

    Ok(entries)
}

/// Topic label to embedding vector, for one corpus generation and one model.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEmbeddingTable {
    model: String,
    corpus_version: CorpusVersion,
    dimensions: usize,
    entries: BTreeMap<String, Vec<f32>>,
}

impl TopicEmbeddingTable {
    pub fn build<E, I, S>(
        embedder: &E,
        topics: I,
        corpus_version: CorpusVersion,
    ) -> Result<Self, TableBuildError>
    where
        E: Embedder + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = build_embeddings(embedder, topics)?;
        let dimensions = entries.values().next().map(Vec::len).unwrap_or(0);

        info!(
            topics = entries.len(),
            dimensions,
            model = embedder.model(),
            "topic embedding table built"
        );

        Ok(Self {
            model: embedder.model().to_string(),
            corpus_version,
            dimensions,
            entries,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn corpus_version(&self) -> &CorpusVersion {
        &self.corpus_version
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, topic: &str) -> Option<&[f32]> {
        self.entries.get(topic).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.entries
            .iter()
            .map(|(topic, vector)| (topic.as_str(), vector.as_slice()))
    }
}
