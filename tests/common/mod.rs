#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use docket_core::bill::{Bill, Cosponsor, LatestAction, SubjectName, Subjects};
use docket_core::classifier::{Embedder, EmbeddingError};
use docket_core::corpus::{BillSource, MemberSource, ProviderError};
use docket_core::district::Member;

pub const MODEL: &str = "text-embedding-3-small";

/// Embedder backed by a fixed text -> vector table.
pub struct LookupEmbedder {
    model: String,
    vectors: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
}

impl LookupEmbedder {
    pub fn new(entries: &[(&str, Vec<f32>)]) -> Self {
        Self::with_model(MODEL, entries)
    }

    pub fn with_model(model: &str, entries: &[(&str, Vec<f32>)]) -> Self {
        Self {
            model: model.to_string(),
            vectors: entries
                .iter()
                .map(|(text, vector)| (text.to_string(), vector.clone()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for LookupEmbedder {
    fn model(&self) -> &str {
        &self.model
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| EmbeddingError::new(format!("no vector for {text:?}")))
    }
}

/// Three-topic vocabulary on orthogonal axes plus a few query vectors.
pub fn civic_embedder() -> LookupEmbedder {
    LookupEmbedder::new(&[
        ("Health", vec![1.0, 0.0, 0.0]),
        ("Education", vec![0.0, 1.0, 0.0]),
        ("Taxation", vec![0.0, 0.0, 1.0]),
        ("Hospitals close rural wards", vec![0.9, 0.3, 0.05]),
        ("School lunch funding cut", vec![0.2, 0.95, 0.1]),
        ("Mystery", vec![0.0, 0.0, 0.0]),
    ])
}

pub fn make_bill(number: &str, topics: &[&str]) -> Bill {
    make_bill_with_cosponsors(number, topics, &[])
}

pub fn make_bill_with_cosponsors(number: &str, topics: &[&str], cosponsors: &[(&str, &str)]) -> Bill {
    Bill {
        number: number.to_string(),
        title: format!("Bill {number}"),
        congress: 119,
        bill_type: "HR".to_string(),
        url: format!("https://api.congress.gov/v3/bill/119/hr/{number}"),
        latest_action: LatestAction {
            action_date: "2025-03-01".to_string(),
            text: "Referred to committee.".to_string(),
        },
        cosponsors: cosponsors
            .iter()
            .map(|(first, last)| Cosponsor {
                first_name: first.to_string(),
                last_name: last.to_string(),
                party: "I".to_string(),
            })
            .collect(),
        subjects: Subjects {
            legislative_subjects: topics
                .iter()
                .map(|name| SubjectName { name: name.to_string() })
                .collect(),
            policy_area: None,
        },
        legislation_url: None,
    }
}

pub fn numbers(bills: &[Bill]) -> Vec<&str> {
    bills.iter().map(|bill| bill.number.as_str()).collect()
}

pub struct StaticBills {
    bills: Vec<Bill>,
    calls: AtomicUsize,
}

impl StaticBills {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BillSource for StaticBills {
    fn fetch_bills(&self) -> Result<Vec<Bill>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bills.clone())
    }
}

pub struct UnreachableBills;

impl BillSource for UnreachableBills {
    fn fetch_bills(&self) -> Result<Vec<Bill>, ProviderError> {
        Err(ProviderError::new("connection refused"))
    }
}

pub struct StaticMembers(pub Vec<Member>);

impl MemberSource for StaticMembers {
    fn fetch_members(&self) -> Result<Vec<Member>, ProviderError> {
        Ok(self.0.clone())
    }
}
