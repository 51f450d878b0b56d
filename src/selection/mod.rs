pub mod budgeting;
pub mod ranking;

use tracing::debug;

use crate::bill::Bill;
use crate::district::District;
use crate::types::search_bundle::{BucketSummary, RetrievalError, ScoredTopic};
pub use budgeting::{bucket_capacities, fill_buckets, Bucket};
pub use ranking::{precede_legislator_bills, BiasedOrder, NameMatcher, SponsorMatcher};

/// Default multiplier for bucket sizing.
pub const DEFAULT_RESULT_BUDGET: usize = 5;

/// Filled buckets for one search, borrowing from the corpus.
#[derive(Debug, Clone)]
pub struct Retrieval<'a> {
	pub buckets: Vec<Bucket<'a>>,
	pub bills_considered: usize,
	pub legislator_bills: usize,
}

impl<'a> Retrieval<'a> {
	/// Bucket members concatenated in topic order. A bill may repeat.
	pub fn bills(&self) -> impl Iterator<Item = &'a Bill> + '_ {
		self.buckets
			.iter()
			.flat_map(|bucket| bucket.members.iter().copied())
	}

	pub fn to_bills(&self) -> Vec<Bill> {
		self.bills().cloned().collect()
	}

	pub fn summaries(&self) -> Vec<BucketSummary> {
		self.buckets.iter().map(Bucket::summary).collect()
	}
}

#[derive(Debug, Clone)]
pub struct TopicSearcher<M> {
	matcher: M,
	result_budget: usize,
}

impl Default for TopicSearcher<NameMatcher> {
	fn default() -> Self {
		Self {
			matcher: NameMatcher,
			result_budget: DEFAULT_RESULT_BUDGET,
		}
	}
}

impl<M> TopicSearcher<M>
where
	M: SponsorMatcher,
{
	pub fn new(matcher: M, result_budget: usize) -> Self {
		Self {
			matcher,
			result_budget,
		}
	}

	pub fn search<'a>(
		&self,
		bills: &'a [Bill],
		topics: &'a [ScoredTopic],
		district: Option<&District>,
	) -> Result<Retrieval<'a>, RetrievalError> {
		// 1. Bucket sizing
		let capacities = bucket_capacities(topics, self.result_budget)?;
		debug!(?capacities, "bucket capacities");

		// 2. Ordering bias
		let order = match district {
			Some(district) => precede_legislator_bills(&self.matcher, bills, district),
			None => BiasedOrder::unbiased(bills),
		};

		// 3. Fill pass
		let buckets = fill_buckets(&order.bills, topics, &capacities);

		debug_assert!(buckets.iter().all(|b| b.members.len() <= b.capacity));

		Ok(Retrieval {
			buckets,
			bills_considered: bills.len(),
			legislator_bills: order.legislator_bills,
		})
	}

	/// Ordered result list: highest-confidence bucket first.
	pub fn retrieve(
		&self,
		bills: &[Bill],
		topics: &[ScoredTopic],
		district: Option<&District>,
	) -> Result<Vec<Bill>, RetrievalError> {
		Ok(self.search(bills, topics, district)?.to_bills())
	}
}

/// [`TopicSearcher::retrieve`] with name matching and the default budget.
pub fn retrieve(
	bills: &[Bill],
	topics: &[ScoredTopic],
	district: Option<&District>,
) -> Result<Vec<Bill>, RetrievalError> {
	TopicSearcher::<NameMatcher>::default().retrieve(bills, topics, district)
}
