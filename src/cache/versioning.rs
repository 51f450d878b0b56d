use chrono::{DateTime, Utc};

use crate::types::identifiers::CorpusVersion;

// Key point:
// Serializable
// Embedding fields hashed into the corpus version
// Explicit defaults
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CorpusConfig {
    pub version: String,
    /// Model used for both topic and query embeddings.
    pub embedding_model: String,
    /// Upper bound on topics returned by classification.
    pub max_topics: usize,
    /// Fraction of the top confidence a topic must reach to be kept.
    pub relative_threshold: f32,
    /// Multiplier applied to each topic's confidence share when sizing buckets.
    pub result_budget: usize,
}

impl CorpusConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            embedding_model: "text-embedding-3-small".into(),
            max_topics: 5,
            relative_threshold: 0.5,
            result_budget: 5,
        }
    }

    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Serialized fields that change the embedding table. Query-time knobs
    /// (`max_topics`, `relative_threshold`, `result_budget`) are left out, so
    /// tuning them keeps a cached table valid.
    pub fn embedding_fingerprint(&self) -> Result<Vec<u8>, serde_json::Error> {
        #[derive(serde::Serialize)]
        struct Fingerprint<'a> {
            version: &'a str,
            embedding_model: &'a str,
        }

        serde_json::to_vec(&Fingerprint {
            version: &self.version,
            embedding_model: &self.embedding_model,
        })
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CorpusManifest {
    pub corpus_version: CorpusVersion,
    pub config: CorpusConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub bill_count: usize,
    pub topic_count: usize,
}
