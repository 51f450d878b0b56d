use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::bill::Bill;
use crate::cache::versioning::CorpusManifest;
use crate::classifier::{Embedder, TopicClassifier};
use crate::district::District;
use crate::selection::{NameMatcher, TopicSearcher};
use crate::types::identifiers::CorpusVersion;
use crate::types::search_bundle::{SearchError, SearchMetadata, SearchResult};

/// One immutable corpus generation: bills, topic labels and their
/// embeddings, all from the same build.
#[derive(Debug)]
pub struct CorpusSnapshot {
    manifest: CorpusManifest,
    bills: Vec<Bill>,
    topics: Vec<String>,
    classifier: TopicClassifier,
    searcher: TopicSearcher<NameMatcher>,
}

impl CorpusSnapshot {
    pub(crate) fn new(
        manifest: CorpusManifest,
        bills: Vec<Bill>,
        topics: Vec<String>,
        classifier: TopicClassifier,
    ) -> Self {
        let searcher = TopicSearcher::new(NameMatcher, manifest.config.result_budget);
        Self {
            manifest,
            bills,
            topics,
            classifier,
            searcher,
        }
    }

    pub fn manifest(&self) -> &CorpusManifest {
        &self.manifest
    }

    pub fn version(&self) -> &CorpusVersion {
        &self.manifest.corpus_version
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn classifier(&self) -> &TopicClassifier {
        &self.classifier
    }

    /// Classify `headline` and retrieve bills for it, biased toward
    /// `district`'s legislators when one is given.
    pub fn search<E>(
        &self,
        embedder: &E,
        headline: &str,
        district: Option<&District>,
    ) -> Result<SearchResult, SearchError>
    where
        E: Embedder + ?Sized,
    {
        let topics = self.classifier.classify(embedder, headline)?;
        let retrieval = self.searcher.search(&self.bills, &topics, district)?;

        let bills = retrieval.to_bills();
        let buckets = retrieval.summaries();
        let bills_considered = retrieval.bills_considered;
        let legislator_bills = retrieval.legislator_bills;

        debug!(
            results = bills.len(),
            legislator_bills,
            corpus = %self.version(),
            "headline search resolved"
        );

        Ok(SearchResult {
            bills,
            search: SearchMetadata {
                headline: headline.to_string(),
                corpus_version: self.version().clone(),
                topics,
                buckets,
                bills_considered,
                legislator_bills,
            },
        })
    }
}

/// Shared pointer to the current generation.
///
/// Readers clone the `Arc` and keep using it for the whole call, so a
/// concurrent swap never mixes two generations within one search.
#[derive(Debug)]
pub struct CorpusHandle {
    current: RwLock<Arc<CorpusSnapshot>>,
}

impl CorpusHandle {
    pub fn new(snapshot: Arc<CorpusSnapshot>) -> Self {
        Self {
            current: RwLock::new(snapshot),
        }
    }

    pub fn current(&self) -> Arc<CorpusSnapshot> {
        // The guarded value is a single Arc; a poisoned lock cannot hold a torn write.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install `next` and return the generation it replaced.
    pub fn swap(&self, next: Arc<CorpusSnapshot>) -> Arc<CorpusSnapshot> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(from = %guard.version(), to = %next.version(), "corpus snapshot swapped");
        std::mem::replace(&mut *guard, next)
    }
}
