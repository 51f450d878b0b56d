use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::district::{District, Legislator, LegislatorRole};

/// House seats per state after the 2020 apportionment.
#[rustfmt::skip]
pub const STATE_SEATS: &[(&str, u32)] = &[
    ("AL", 7), ("AK", 1), ("AZ", 9), ("AR", 4), ("CA", 52), ("CO", 8), ("CT", 5), ("DE", 1),
    ("FL", 28), ("GA", 14), ("HI", 2), ("ID", 2), ("IL", 17), ("IN", 9), ("IA", 4), ("KS", 4),
    ("KY", 6), ("LA", 6), ("ME", 2), ("MD", 8), ("MA", 9), ("MI", 13), ("MN", 8), ("MS", 4),
    ("MO", 8), ("MT", 2), ("NE", 3), ("NV", 4), ("NH", 2), ("NJ", 12), ("NM", 3), ("NY", 26),
    ("NC", 14), ("ND", 1), ("OH", 15), ("OK", 5), ("OR", 6), ("PA", 17), ("RI", 2), ("SC", 7),
    ("SD", 1), ("TN", 9), ("TX", 38), ("UT", 4), ("VT", 1), ("VA", 11), ("WA", 10), ("WV", 2),
    ("WI", 8), ("WY", 1),
];

#[rustfmt::skip]
const STATE_NAMES: &[(&str, &str)] = &[
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("Arkansas", "AR"),
    ("California", "CA"), ("Colorado", "CO"), ("Connecticut", "CT"), ("Delaware", "DE"),
    ("Florida", "FL"), ("Georgia", "GA"), ("Hawaii", "HI"), ("Idaho", "ID"),
    ("Illinois", "IL"), ("Indiana", "IN"), ("Iowa", "IA"), ("Kansas", "KS"),
    ("Kentucky", "KY"), ("Louisiana", "LA"), ("Maine", "ME"), ("Maryland", "MD"),
    ("Massachusetts", "MA"), ("Michigan", "MI"), ("Minnesota", "MN"), ("Mississippi", "MS"),
    ("Missouri", "MO"), ("Montana", "MT"), ("Nebraska", "NE"), ("Nevada", "NV"),
    ("New Hampshire", "NH"), ("New Jersey", "NJ"), ("New Mexico", "NM"), ("New York", "NY"),
    ("North Carolina", "NC"), ("North Dakota", "ND"), ("Ohio", "OH"), ("Oklahoma", "OK"),
    ("Oregon", "OR"), ("Pennsylvania", "PA"), ("Rhode Island", "RI"), ("South Carolina", "SC"),
    ("South Dakota", "SD"), ("Tennessee", "TN"), ("Texas", "TX"), ("Utah", "UT"),
    ("Vermont", "VT"), ("Virginia", "VA"), ("Washington", "WA"), ("West Virginia", "WV"),
    ("Wisconsin", "WI"), ("Wyoming", "WY"),
];

pub fn state_abbreviation(state_name: &str) -> Option<&'static str> {
    STATE_NAMES
        .iter()
        .find(|(name, _)| *name == state_name)
        .map(|(_, abbr)| *abbr)
}

/// Table key for a district, e.g. `CA-12`.
pub fn district_key(state: &str, district_number: u32) -> String {
    format!("{state}-{district_number}")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    #[error("Roster name is not in 'Last, First' form: {0}")]
    UnparseableName(String),
    #[error("Unknown state: {0}")]
    UnknownState(String),
}

/// A sitting member of Congress. Senators have no district number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    pub state: String,
    pub district_number: Option<u32>,
}

impl Member {
    /// Parse a roster entry such as `"Pelosi, Nancy"` or `"Sanders, Bernard J."`.
    ///
    /// Only the first given name is kept, so that it lines up with the
    /// cosponsor names in bill records.
    pub fn from_roster_name(
        roster_name: &str,
        state_name: &str,
        district_number: Option<u32>,
    ) -> Result<Self, MemberError> {
        let (last, given) = roster_name
            .split_once(", ")
            .ok_or_else(|| MemberError::UnparseableName(roster_name.to_string()))?;

        let first = given
            .split(' ')
            .next()
            .filter(|first| !first.is_empty())
            .ok_or_else(|| MemberError::UnparseableName(roster_name.to_string()))?;

        let state = state_abbreviation(state_name)
            .ok_or_else(|| MemberError::UnknownState(state_name.to_string()))?;

        Ok(Member {
            first_name: first.to_string(),
            last_name: last.to_string(),
            state: state.to_string(),
            district_number,
        })
    }

    pub fn is_senator(&self) -> bool {
        self.district_number.is_none()
    }
}

/// Every House district keyed by `STATE-N`, vacant seats included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictTable {
    districts: BTreeMap<String, District>,
}

impl DistrictTable {
    /// Seat every representative in their district and every senator in all
    /// districts of their state.
    pub fn assemble<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Member>,
    {
        let mut districts = BTreeMap::new();
        for (state, seats) in STATE_SEATS {
            for number in 1..=*seats {
                districts.insert(district_key(state, number), District::new(*state, number));
            }
        }

        let mut senators: BTreeMap<String, Vec<Member>> = BTreeMap::new();

        for member in members {
            match member.district_number {
                Some(number) => {
                    let key = district_key(&member.state, number);
                    match districts.get_mut(&key) {
                        Some(district) => {
                            district.legislators.push(Legislator {
                                role: LegislatorRole::Representative,
                                first_name: member.first_name,
                                last_name: member.last_name,
                            });
                        }
                        None => warn!(district = %key, "skipping representative for unknown district"),
                    }
                }
                None => senators.entry(member.state.clone()).or_default().push(member),
            }
        }

        for district in districts.values_mut() {
            let Some(state_senators) = senators.get(&district.state) else {
                continue;
            };
            for senator in state_senators {
                district.legislators.push(Legislator {
                    role: LegislatorRole::Senator,
                    first_name: senator.first_name.clone(),
                    last_name: senator.last_name.clone(),
                });
            }
        }

        info!(districts = districts.len(), "district table assembled");

        DistrictTable { districts }
    }

    pub fn get(&self, state: &str, district_number: u32) -> Option<&District> {
        self.districts.get(&district_key(state, district_number))
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &District)> {
        self.districts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_counts_cover_the_house() {
        let total: u32 = STATE_SEATS.iter().map(|(_, seats)| seats).sum();
        assert_eq!(total, 435);
        assert_eq!(STATE_SEATS.len(), 50);
    }

    #[test]
    fn roster_name_keeps_first_given_name() {
        let member = Member::from_roster_name("Sanders, Bernard J.", "Vermont", None).unwrap();
        assert_eq!(member.first_name, "Bernard");
        assert_eq!(member.last_name, "Sanders");
        assert_eq!(member.state, "VT");
        assert!(member.is_senator());
    }

    #[test]
    fn roster_name_errors() {
        assert_eq!(
            Member::from_roster_name("Nobody", "Ohio", Some(1)),
            Err(MemberError::UnparseableName("Nobody".into()))
        );
        assert_eq!(
            Member::from_roster_name("Norton, Eleanor", "District of Columbia", Some(1)),
            Err(MemberError::UnknownState("District of Columbia".into()))
        );
    }
}
