pub mod cache;
pub mod invalidation;
pub mod versioning;

pub use cache::{read_or_compute, ArtifactStore, MemoryArtifactStore, StoreError};
pub use invalidation::FsArtifactStore;
pub use versioning::{CorpusConfig, CorpusManifest};
