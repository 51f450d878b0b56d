use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::bill::Bill;
use crate::cache::cache::{read_or_compute, ArtifactStore, StoreError};
use crate::cache::versioning::{CorpusConfig, CorpusManifest};
use crate::classifier::{Embedder, TableBuildError, TopicClassifier, TopicEmbeddingTable};
use crate::corpus::provider::{BillSource, MemberSource, ProviderError};
use crate::corpus::snapshot::{CorpusHandle, CorpusSnapshot};
use crate::district::DistrictTable;
use crate::types::identifiers::{BillId, CorpusVersion};

pub const BILLS_KEY: &str = "bills";
pub const TOPICS_KEY: &str = "topics";
pub const EMBEDDINGS_KEY: &str = "embeddings";
pub const DISTRICTS_KEY: &str = "districts";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Artifact store error: {0}")]
    Store(#[from] StoreError),
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("Topic table build failed: {0}")]
    TableBuild(#[from] TableBuildError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Config expects embedding model {config:?}, provider uses {provider:?}")]
    ModelMismatch { config: String, provider: String },
    #[error("Cached {key} artifact is stale: expected {expected}, found {found}")]
    StaleArtifact {
        key: &'static str,
        expected: String,
        found: String,
    },
}

/// Distinct policy-area and legislative-subject names, sorted.
pub fn collect_topics(bills: &[Bill]) -> Vec<String> {
    let topics: BTreeSet<&str> = bills.iter().flat_map(|bill| bill.topics()).collect();
    topics.into_iter().map(str::to_string).collect()
}

/// Builds corpus generations, memoizing every expensive artifact in `store`.
pub struct CorpusLoader<S> {
    store: S,
    config: CorpusConfig,
}

impl<S> CorpusLoader<S>
where
    S: ArtifactStore,
{
    pub fn new(store: S, config: CorpusConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Load (or fetch and compute) bills, topics and topic embeddings.
    pub fn load<B, E>(&self, source: &B, embedder: &E) -> Result<CorpusSnapshot, CorpusError>
    where
        B: BillSource + ?Sized,
        E: Embedder + ?Sized,
    {
        if embedder.model() != self.config.embedding_model {
            return Err(CorpusError::ModelMismatch {
                config: self.config.embedding_model.clone(),
                provider: embedder.model().to_string(),
            });
        }

        let bills: Vec<Bill> = read_or_compute(&self.store, BILLS_KEY, || {
            let bills = source.fetch_bills()?;
            info!(bills = bills.len(), "bill corpus fetched");
            Ok::<_, CorpusError>(bills)
        })?;

        let topics: Vec<String> = read_or_compute(&self.store, TOPICS_KEY, || {
            let topics = collect_topics(&bills);
            info!(topics = topics.len(), "identified topics");
            Ok::<_, CorpusError>(topics)
        })?;

        let config_json = self.config.embedding_fingerprint()?;
        let bill_ids: Vec<BillId> = bills.iter().map(Bill::id).collect();
        let corpus_version = CorpusVersion::compute(&config_json, &bill_ids);

        let table: TopicEmbeddingTable = read_or_compute(&self.store, EMBEDDINGS_KEY, || {
            Ok::<_, CorpusError>(TopicEmbeddingTable::build(
                embedder,
                &topics,
                corpus_version.clone(),
            )?)
        })?;

        verify_table(&table, &corpus_version, &self.config, &topics)?;

        let manifest = CorpusManifest {
            corpus_version,
            config: self.config.clone(),
            created_at: Utc::now(),
            bill_count: bills.len(),
            topic_count: topics.len(),
        };

        info!(
            corpus = %manifest.corpus_version,
            bills = manifest.bill_count,
            topics = manifest.topic_count,
            "corpus generation loaded"
        );

        let classifier = TopicClassifier::with_config(table, &self.config);
        Ok(CorpusSnapshot::new(manifest, bills, topics, classifier))
    }

    /// Purge every cached artifact, rebuild, and install the new generation.
    ///
    /// On failure the handle keeps serving the previous generation.
    pub fn refresh<B, E>(
        &self,
        handle: &CorpusHandle,
        source: &B,
        embedder: &E,
    ) -> Result<Arc<CorpusSnapshot>, CorpusError>
    where
        B: BillSource + ?Sized,
        E: Embedder + ?Sized,
    {
        self.store.purge()?;
        let snapshot = Arc::new(self.load(source, embedder)?);
        handle.swap(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    pub fn load_districts<M>(&self, source: &M) -> Result<DistrictTable, CorpusError>
    where
        M: MemberSource + ?Sized,
    {
        read_or_compute(&self.store, DISTRICTS_KEY, || {
            let members = source.fetch_members()?;
            Ok::<_, CorpusError>(DistrictTable::assemble(members))
        })
    }
}

// A cached table must come from this generation, this model, and cover
// exactly this topic list.
fn verify_table(
    table: &TopicEmbeddingTable,
    corpus_version: &CorpusVersion,
    config: &CorpusConfig,
    topics: &[String],
) -> Result<(), CorpusError> {
    if table.corpus_version() != corpus_version {
        return Err(CorpusError::StaleArtifact {
            key: EMBEDDINGS_KEY,
            expected: corpus_version.to_string(),
            found: table.corpus_version().to_string(),
        });
    }

    if table.model() != config.embedding_model {
        return Err(CorpusError::StaleArtifact {
            key: EMBEDDINGS_KEY,
            expected: config.embedding_model.clone(),
            found: table.model().to_string(),
        });
    }

    let covers_topics =
        table.len() == topics.len() && topics.iter().all(|topic| table.get(topic).is_some());
    if !covers_topics {
        return Err(CorpusError::StaleArtifact {
            key: EMBEDDINGS_KEY,
            expected: format!("{} topics", topics.len()),
            found: format!("{} topics", table.len()),
        });
    }

    Ok(())
}
