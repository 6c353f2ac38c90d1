use crate::attendance_status::AttendanceStatus::{Absent, Present, Unrecorded};
use serde::{Deserialize, Deserializer, Serialize};

/// Status of one member for one session date.
///
/// Serializes to the same codes roster files use (`P`, `A`, empty string), so
/// snapshots stay interchangeable with exported rosters. Any other stored
/// value reads back as [Unrecorded].
#[derive(Debug, Serialize, Copy, Clone, Eq, PartialEq, Default)]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
    #[default]
    #[serde(rename = "")]
    Unrecorded,
}

impl AttendanceStatus {
    /// Maps a raw roster cell to a status. The cell is trimmed and
    /// case-normalized first; anything but `P` or `A` counts as not recorded.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "P" => Present,
            "A" => Absent,
            _ => Unrecorded,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Present => "P",
            Absent => "A",
            Unrecorded => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Present => "Present",
            Absent => "Absent",
            Unrecorded => "No Record",
        }
    }

    /// Next status when a cell is tapped:
    /// not recorded, then present, then absent, then not recorded again.
    pub fn cycled(&self) -> Self {
        match self {
            Unrecorded => Present,
            Present => Absent,
            Absent => Unrecorded,
        }
    }

    pub fn is_recorded(&self) -> bool {
        *self != Unrecorded
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(AttendanceStatus::from_code(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        code = {"P", "p", " a ", "", "x", "PA"},
        expected_status = {Present, Present, Absent, Unrecorded, Unrecorded, Unrecorded}
    )]
    fn should_map_code_to_status(code: &str, expected_status: AttendanceStatus) {
        assert_eq!(expected_status, AttendanceStatus::from_code(code));
    }

    #[parameterized(
        status = {Present, Absent, Unrecorded},
        expected_code = {"P", "A", ""}
    )]
    fn should_expose_code(status: AttendanceStatus, expected_code: &str) {
        assert_eq!(expected_code, status.code());
    }

    #[parameterized(
        status = {Present, Absent, Unrecorded},
        expected_label = {"Present", "Absent", "No Record"}
    )]
    fn should_expose_label(status: AttendanceStatus, expected_label: &str) {
        assert_eq!(expected_label, status.label());
    }

    #[test]
    fn should_cycle_back_to_unrecorded_after_three_steps() {
        let status = Unrecorded;

        assert_eq!(Present, status.cycled());
        assert_eq!(Absent, status.cycled().cycled());
        assert_eq!(Unrecorded, status.cycled().cycled().cycled());
    }

    #[test]
    fn should_keep_code_and_from_code_consistent() {
        for status in [Present, Absent, Unrecorded] {
            assert_eq!(status, AttendanceStatus::from_code(status.code()));
        }
    }

    #[parameterized(
        status = {Present, Absent, Unrecorded},
        expected_result = {true, true, false}
    )]
    fn should_tell_whether_status_is_recorded(status: AttendanceStatus, expected_result: bool) {
        assert_eq!(expected_result, status.is_recorded());
    }
}
