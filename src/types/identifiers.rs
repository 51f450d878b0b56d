use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable bill identifier: `<congress>-<type>-<number>`, type lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(String);

impl BillId {
    pub fn new(congress: u32, bill_type: &str, number: &str) -> Self {
        BillId(format!(
            "{congress}-{}-{}",
            bill_type.trim().to_lowercase(),
            number.trim()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash identifying one corpus generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusVersion(String);

impl CorpusVersion {
    /// Hash of the serialized embedding config followed by every bill id in
    /// corpus order. Reordering the corpus changes the version, since
    /// order drives retrieval.
    pub fn compute<'a, I>(config_json: &[u8], bill_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a BillId>,
    {
        let mut hasher = Sha256::new();
        hasher.update(config_json);

        for id in bill_ids {
            hasher.update(id.as_str().as_bytes());
            hasher.update(b"\n");
        }

        let hex = hex::encode(hasher.finalize());
        CorpusVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorpusVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_id_normalizes_type() {
        assert_eq!(BillId::new(119, "HR", " 1234 ").as_str(), "119-hr-1234");
    }

    #[test]
    fn corpus_version_depends_on_order() {
        let a = BillId::new(119, "hr", "1");
        let b = BillId::new(119, "s", "2");

        let forward = CorpusVersion::compute(b"{}", [&a, &b]);
        let backward = CorpusVersion::compute(b"{}", [&b, &a]);

        assert!(forward.as_str().starts_with("sha256:"));
        assert_ne!(forward, backward);
        assert_eq!(forward, CorpusVersion::compute(b"{}", [&a, &b]));
    }
}
