use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The group with the most members present on a date.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct LeadingGroup {
    group_id: String,
    leader_name: String,
    present_count: usize,
}

impl LeadingGroup {
    pub fn new(group_id: String, leader_name: String, present_count: usize) -> Self {
        Self {
            group_id,
            leader_name,
            present_count,
        }
    }
}

/// One row of the historical session table. A session nobody attended has no
/// leading group.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct SessionRecord {
    date: String,
    present_count: usize,
    absent_count: usize,
    rate: u8,
    leading_group: Option<LeadingGroup>,
}

impl SessionRecord {
    pub fn new(
        date: String,
        present_count: usize,
        absent_count: usize,
        rate: u8,
        leading_group: Option<LeadingGroup>,
    ) -> Self {
        Self {
            date,
            present_count,
            absent_count,
            rate,
            leading_group,
        }
    }
}
