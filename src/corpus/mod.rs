pub mod loader;
pub mod provider;
pub mod snapshot;

pub use crate::cache::versioning::{CorpusConfig, CorpusManifest};
pub use loader::{collect_topics, CorpusError, CorpusLoader};
pub use provider::{BillSource, MemberSource, ProviderError};
pub use snapshot::{CorpusHandle, CorpusSnapshot};
