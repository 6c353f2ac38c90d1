use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One row of the most-consistent-members board.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct LeaderboardEntry {
    member_id: String,
    name: String,
    group_leader: String,
    present_count: usize,
    recorded_count: usize,
    rate: u8,
}

impl LeaderboardEntry {
    pub fn new(
        member_id: String,
        name: String,
        group_leader: String,
        present_count: usize,
        recorded_count: usize,
        rate: u8,
    ) -> Self {
        Self {
            member_id,
            name,
            group_leader,
            present_count,
            recorded_count,
            rate,
        }
    }
}
