use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A member who missed the most recent sessions in a row. The streak counts
/// consecutive absences walking backwards from the latest session.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct AtRiskMember {
    member_id: String,
    name: String,
    phone: Option<String>,
    group_leader: String,
    missed_streak: usize,
}

impl AtRiskMember {
    pub fn new(
        member_id: String,
        name: String,
        phone: Option<String>,
        group_leader: String,
        missed_streak: usize,
    ) -> Self {
        Self {
            member_id,
            name,
            phone,
            group_leader,
            missed_streak,
        }
    }
}
