pub mod classify;
pub mod embedding;
pub mod table;

pub use classify::{ClassifyError, TopicClassifier};
pub use embedding::{Embedder, EmbeddingError};
pub use table::{build_embeddings, TableBuildError, TopicEmbeddingTable};
