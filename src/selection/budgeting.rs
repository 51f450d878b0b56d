use crate::bill::Bill;
use crate::types::search_bundle::{BucketSummary, RetrievalError, ScoredTopic};

/// Per-search result slot for one topic.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    pub topic: &'a str,
    pub capacity: usize,
    pub members: Vec<&'a Bill>,
}

impl Bucket<'_> {
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn summary(&self) -> BucketSummary {
        BucketSummary {
            topic: self.topic.to_string(),
            capacity: self.capacity,
            filled: self.members.len(),
        }
    }
}

/// `capacity[i] = ceil(confidence[i] / sum(confidences) * result_budget)`.
///
/// Each bucket rounds up on its own, so capacities may sum past
/// `result_budget`. A topic whose share is not positive gets capacity zero.
/// A zero or non-finite total, or a share that overflows `f32`, is rejected.
pub fn bucket_capacities(
    topics: &[ScoredTopic],
    result_budget: usize,
) -> Result<Vec<usize>, RetrievalError> {
    if topics.is_empty() {
        return Err(RetrievalError::NoTopics);
    }

    let total: f32 = topics.iter().map(|t| t.confidence).sum();
    if !total.is_finite() || total == 0.0 {
        return Err(RetrievalError::InvalidConfidence(total));
    }

    topics
        .iter()
        .map(|t| {
            let share = (t.confidence / total * result_budget as f32).ceil();
            if !share.is_finite() {
                Err(RetrievalError::InvalidConfidence(total))
            } else if share > 0.0 {
                // Saturating cast: huge finite shares clamp to usize::MAX.
                Ok(share as usize)
            } else {
                Ok(0)
            }
        })
        .collect()
}

/// Single pass over `ordered`, offering each bill to every bucket in topic
/// order. A bill matching several open buckets joins all of them.
pub fn fill_buckets<'a>(
    ordered: &[&'a Bill],
    topics: &'a [ScoredTopic],
    capacities: &[usize],
) -> Vec<Bucket<'a>> {
    let mut buckets: Vec<Bucket<'a>> = topics
        .iter()
        .zip(capacities)
        .map(|(scored, &capacity)| Bucket {
            topic: scored.topic.as_str(),
            capacity,
            members: Vec::new(),
        })
        .collect();

    let mut remaining = capacities
        .iter()
        .fold(0usize, |sum, &capacity| sum.saturating_add(capacity));

    for &bill in ordered {
        if remaining == 0 {
            break;
        }

        for bucket in buckets.iter_mut() {
            if bucket.is_full() {
                continue;
            }
            if bill.has_topic(bucket.topic) {
                bucket.members.push(bill);
                remaining -= 1;
            }
        }
    }

    buckets
}
