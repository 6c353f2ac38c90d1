use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One row of the flat, cross-group member directory.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct MemberOverview {
    member_id: String,
    name: String,
    phone: Option<String>,
    group_id: String,
    group_leader: String,
    month_range: String,
}

impl MemberOverview {
    pub fn new(
        member_id: String,
        name: String,
        phone: Option<String>,
        group_id: String,
        group_leader: String,
        month_range: String,
    ) -> Self {
        Self {
            member_id,
            name,
            phone,
            group_id,
            group_leader,
            month_range,
        }
    }
}
