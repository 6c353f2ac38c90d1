use crate::attendance_status::AttendanceStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tracked member. The attendance map is keyed by session date
/// (`YYYY-MM-DD`) and may be sparse: a missing key reads as
/// [AttendanceStatus::Unrecorded], exactly like an empty cell.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct Member {
    id: String,
    name: String,
    phone: Option<String>,
    attendance: BTreeMap<String, AttendanceStatus>,
}

impl Member {
    pub fn new(
        id: String,
        name: String,
        phone: Option<String>,
        attendance: BTreeMap<String, AttendanceStatus>,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            attendance,
        }
    }

    /// Status for a date key, defaulting missing entries to not recorded.
    pub fn status_on(&self, date_key: &str) -> AttendanceStatus {
        self.attendance.get(date_key).copied().unwrap_or_default()
    }

    /// Same member with new contact details, keeping id and attendance.
    pub fn with_details(&self, name: String, phone: Option<String>) -> Self {
        Self {
            id: self.id.clone(),
            name,
            phone,
            attendance: self.attendance.clone(),
        }
    }

    /// Same member with one attendance cell replaced.
    pub fn with_status(&self, date_key: String, status: AttendanceStatus) -> Self {
        let mut attendance = self.attendance.clone();
        attendance.insert(date_key, status);
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            attendance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance_status::AttendanceStatus::{Absent, Present, Unrecorded};

    fn get_member() -> Member {
        Member::new(
            "m1".to_owned(),
            "Jon Doe".to_owned(),
            Some("0301 1234567".to_owned()),
            BTreeMap::from([
                ("2024-01-07".to_owned(), Present),
                ("2024-01-14".to_owned(), Absent),
            ]),
        )
    }

    #[test]
    fn should_read_status_for_known_date() {
        assert_eq!(Present, get_member().status_on("2024-01-07"));
    }

    #[test]
    fn should_default_missing_date_to_unrecorded() {
        assert_eq!(Unrecorded, get_member().status_on("2024-02-04"));
    }

    #[test]
    fn should_replace_details_and_keep_attendance() {
        let member = get_member().with_details("Jane Doe".to_owned(), None);

        assert_eq!("m1", member.id());
        assert_eq!("Jane Doe", member.name());
        assert_eq!(&None, member.phone());
        assert_eq!(Present, member.status_on("2024-01-07"));
    }

    #[test]
    fn should_replace_single_status() {
        let member = get_member().with_status("2024-01-14".to_owned(), Present);

        assert_eq!(Present, member.status_on("2024-01-14"));
        assert_eq!(Present, member.status_on("2024-01-07"));
    }
}
