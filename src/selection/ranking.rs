use crate::bill::{Bill, Cosponsor};
use crate::district::{District, Legislator};

/// Decides whether a bill cosponsor is one of a district's legislators.
///
/// Kept behind a trait so a stable-identifier join can replace name
/// matching without touching bucket logic.
pub trait SponsorMatcher {
    fn matches(&self, legislator: &Legislator, cosponsor: &Cosponsor) -> bool;

    fn is_legislator_bill(&self, bill: &Bill, district: &District) -> bool {
        district.legislators.iter().any(|legislator| {
            bill.cosponsors
                .iter()
                .any(|cosponsor| self.matches(legislator, cosponsor))
        })
    }
}

/// v0: exact, case-sensitive first + last name equality.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameMatcher;

impl SponsorMatcher for NameMatcher {
    fn matches(&self, legislator: &Legislator, cosponsor: &Cosponsor) -> bool {
        legislator.first_name == cosponsor.first_name && legislator.last_name == cosponsor.last_name
    }
}

/// Bills in retrieval order, with the legislator-bill prefix length.
#[derive(Debug, Clone)]
pub struct BiasedOrder<'a> {
    pub bills: Vec<&'a Bill>,
    pub legislator_bills: usize,
}

impl<'a> BiasedOrder<'a> {
    pub fn unbiased(bills: &'a [Bill]) -> Self {
        Self {
            bills: bills.iter().collect(),
            legislator_bills: 0,
        }
    }
}

/// Stable partition: bills cosponsored by any district legislator first,
/// then the rest. Corpus order is kept inside each half.
pub fn precede_legislator_bills<'a, M>(
    matcher: &M,
    bills: &'a [Bill],
    district: &District,
) -> BiasedOrder<'a>
where
    M: SponsorMatcher + ?Sized,
{
    let (mut ordered, rest): (Vec<&Bill>, Vec<&Bill>) = bills
        .iter()
        .partition(|bill| matcher.is_legislator_bill(bill, district));

    let legislator_bills = ordered.len();
    ordered.extend(rest);

    BiasedOrder {
        bills: ordered,
        legislator_bills,
    }
}
