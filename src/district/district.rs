use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegislatorRole {
    Representative,
    Senator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legislator {
    #[serde(rename = "type")]
    pub role: LegislatorRole,
    pub first_name: String,
    pub last_name: String,
}

/// One congressional district and the legislators who represent it.
///
/// Used only to bias result ordering, never to filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub state: String,
    pub district_number: u32,
    #[serde(default)]
    pub legislators: Vec<Legislator>,
}

impl District {
    pub fn new(state: impl Into<String>, district_number: u32) -> Self {
        Self {
            state: state.into(),
            district_number,
            legislators: Vec::new(),
        }
    }

    pub fn with_legislator(
        mut self,
        role: LegislatorRole,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.legislators.push(Legislator {
            role,
            first_name: first_name.into(),
            last_name: last_name.into(),
        });
        self
    }
}
