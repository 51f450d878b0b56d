use serde::{Deserialize, Serialize};

use crate::types::identifiers::BillId;

/// The most recent recorded action on a bill.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAction {
    pub action_date: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cosponsor {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub party: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectName {
    pub name: String,
}

/// Subject taxonomy attached to a bill.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subjects {
    #[serde(default)]
    pub legislative_subjects: Vec<SubjectName>,
    #[serde(default)]
    pub policy_area: Option<SubjectName>,
}

/// A legislative record as held in the corpus.
///
/// Field names follow the Congress.gov wire format so cached corpora stay
/// readable by other consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub number: String,
    pub title: String,
    pub congress: u32,
    #[serde(rename = "type")]
    pub bill_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub latest_action: LatestAction,
    #[serde(default)]
    pub cosponsors: Vec<Cosponsor>,
    #[serde(default)]
    pub subjects: Subjects,
    #[serde(default)]
    pub legislation_url: Option<String>,
}

impl Bill {
    pub fn id(&self) -> BillId {
        BillId::new(self.congress, &self.bill_type, &self.number)
    }

    /// Policy-area name (if any) followed by every legislative subject name.
    ///
    /// Order carries no meaning; the set is only used for membership tests.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.subjects
            .policy_area
            .iter()
            .chain(self.subjects.legislative_subjects.iter())
            .map(|subject| subject.name.as_str())
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics().any(|candidate| candidate == topic)
    }

    /// Public text page for the bill, falling back to the API record URL.
    pub fn canonical_url(&self) -> &str {
        self.legislation_url.as_deref().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill_with(policy_area: Option<&str>, subjects: &[&str]) -> Bill {
        Bill {
            number: "42".into(),
            title: "A bill".into(),
            congress: 119,
            bill_type: "HR".into(),
            url: "https://api.congress.gov/v3/bill/119/hr/42".into(),
            latest_action: LatestAction::default(),
            cosponsors: Vec::new(),
            subjects: Subjects {
                legislative_subjects: subjects
                    .iter()
                    .map(|name| SubjectName { name: name.to_string() })
                    .collect(),
                policy_area: policy_area.map(|name| SubjectName { name: name.into() }),
            },
            legislation_url: None,
        }
    }

    #[test]
    fn topics_include_policy_area_and_subjects() {
        let bill = bill_with(Some("Health"), &["Medicare", "Hospital care"]);
        let topics: Vec<&str> = bill.topics().collect();

        assert_eq!(topics, vec!["Health", "Medicare", "Hospital care"]);
        assert!(bill.has_topic("Medicare"));
        assert!(!bill.has_topic("medicare"));
    }

    #[test]
    fn missing_policy_area_is_skipped() {
        let bill = bill_with(None, &["Taxation"]);
        assert_eq!(bill.topics().collect::<Vec<_>>(), vec!["Taxation"]);
    }

    #[test]
    fn canonical_url_prefers_legislation_url() {
        let mut bill = bill_with(None, &[]);
        assert_eq!(bill.canonical_url(), "https://api.congress.gov/v3/bill/119/hr/42");

        bill.legislation_url = Some("https://www.congress.gov/bill/119th-congress/house-bill/42".into());
        assert_eq!(
            bill.canonical_url(),
            "https://www.congress.gov/bill/119th-congress/house-bill/42"
        );
    }
}
