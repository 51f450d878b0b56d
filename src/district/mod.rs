pub mod district;
pub mod table;

pub use district::{District, Legislator, LegislatorRole};
pub use table::{district_key, state_abbreviation, DistrictTable, Member, MemberError, STATE_SEATS};
