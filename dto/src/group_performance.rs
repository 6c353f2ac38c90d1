use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Attendance figures for one group over the queried sessions. The rate is a
/// whole percentage of present marks among recorded ones.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct GroupPerformance {
    group_id: String,
    leader_name: String,
    member_count: usize,
    present_count: usize,
    recorded_count: usize,
    rate: u8,
}

impl GroupPerformance {
    pub fn new(
        group_id: String,
        leader_name: String,
        member_count: usize,
        present_count: usize,
        recorded_count: usize,
        rate: u8,
    ) -> Self {
        Self {
            group_id,
            leader_name,
            member_count,
            present_count,
            recorded_count,
            rate,
        }
    }
}
