use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Failure reported by an embedding provider. Never retried here.
#[derive(Debug, Error)]
#[error("Embedding provider failed: {message}")]
pub struct EmbeddingError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl EmbeddingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Converts text into a dense vector.
///
/// Topic tables and queries must be embedded by the same model, otherwise
/// their similarities are meaningless. `model` is recorded in every table
/// and checked at query time.
pub trait Embedder {
    fn model(&self) -> &str;

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

impl<E: Embedder + ?Sized> Embedder for &E {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }
}
