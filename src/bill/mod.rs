pub mod bill;

pub use crate::types::identifiers::BillId;
pub use bill::{Bill, Cosponsor, LatestAction, SubjectName, Subjects};
