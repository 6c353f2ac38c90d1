use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Present, absent and unrecorded counts for one session date.
#[derive(Debug, Serialize, Deserialize, Getters, Copy, Clone, Eq, PartialEq, Default)]
pub struct SessionTally {
    present: usize,
    absent: usize,
    unrecorded: usize,
}

impl SessionTally {
    pub fn new(present: usize, absent: usize, unrecorded: usize) -> Self {
        Self {
            present,
            absent,
            unrecorded,
        }
    }
}

/// One group's share of a session.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct GroupSessionTally {
    group_id: String,
    leader_name: String,
    tally: SessionTally,
}

impl GroupSessionTally {
    pub fn new(group_id: String, leader_name: String, tally: SessionTally) -> Self {
        Self {
            group_id,
            leader_name,
            tally,
        }
    }
}

/// Counts for a single session, with one line per group sorted by present
/// count, best first.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct SessionBreakdown {
    date: String,
    total: SessionTally,
    groups: Vec<GroupSessionTally>,
}

impl SessionBreakdown {
    pub fn new(date: String, total: SessionTally, groups: Vec<GroupSessionTally>) -> Self {
        Self {
            date,
            total,
            groups,
        }
    }
}
