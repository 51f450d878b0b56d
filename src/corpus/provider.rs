use std::error::Error as StdError;

use thiserror::Error;

use crate::bill::Bill;
use crate::district::Member;

/// Failure reported by an upstream data provider.
#[derive(Debug, Error)]
#[error("Provider failed: {message}")]
pub struct ProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl ProviderError {
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
}

/// Supplies the bill corpus. Order is meaningful and must be stable for
/// one corpus generation.
pub trait BillSource {
    fn fetch_bills(&self) -> Result<Vec<Bill>, ProviderError>;
}

/// Supplies the current membership of Congress.
pub trait MemberSource {
    fn fetch_members(&self) -> Result<Vec<Member>, ProviderError>;
}
