use crate::attendance_status::AttendanceStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload for creating or updating a group.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct GroupDetails {
    leader_name: String,
    co_leader_name: Option<String>,
    month_range: String,
}

impl GroupDetails {
    pub fn new(leader_name: String, co_leader_name: Option<String>, month_range: String) -> Self {
        Self {
            leader_name,
            co_leader_name,
            month_range,
        }
    }
}

/// Payload for creating or updating a member.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct MemberDetails {
    name: String,
    phone: Option<String>,
}

impl MemberDetails {
    pub fn new(name: String, phone: Option<String>) -> Self {
        Self { name, phone }
    }
}

/// Payload naming a single session date key.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct SessionDate {
    date: String,
}

impl SessionDate {
    pub fn new(date: String) -> Self {
        Self { date }
    }
}

/// Payload for marking one attendance cell or a whole date column.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct AttendanceMark {
    date: String,
    status: AttendanceStatus,
}

impl AttendanceMark {
    pub fn new(date: String, status: AttendanceStatus) -> Self {
        Self { date, status }
    }
}
