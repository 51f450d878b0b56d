pub mod identifiers;
pub mod search_bundle;

pub use identifiers::{BillId, CorpusVersion};
pub use search_bundle::{
    BucketSummary, RetrievalError, ScoredTopic, SearchError, SearchMetadata, SearchResult,
};
