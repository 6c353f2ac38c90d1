use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A tracked group and its members, in display order. Newly created members
/// go to the front of the list; members ingested from a roster keep file
/// order.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct Group {
    id: String,
    leader_name: String,
    co_leader_name: Option<String>,
    month_range: String,
    members: Vec<Member>,
}

impl Group {
    pub fn new(
        id: String,
        leader_name: String,
        co_leader_name: Option<String>,
        month_range: String,
        members: Vec<Member>,
    ) -> Self {
        Self {
            id,
            leader_name,
            co_leader_name,
            month_range,
            members,
        }
    }

    /// Same group with new descriptive fields, keeping id and members.
    pub fn with_details(
        &self,
        leader_name: String,
        co_leader_name: Option<String>,
        month_range: String,
    ) -> Self {
        Self {
            id: self.id.clone(),
            leader_name,
            co_leader_name,
            month_range,
            members: self.members.clone(),
        }
    }

    /// Same group with its member list replaced.
    pub fn with_members(&self, members: Vec<Member>) -> Self {
        Self {
            id: self.id.clone(),
            leader_name: self.leader_name.clone(),
            co_leader_name: self.co_leader_name.clone(),
            month_range: self.month_range.clone(),
            members,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::attendance_status::AttendanceStatus::{Absent, Present};
    use std::collections::BTreeMap;

    pub const FIRST_GROUP_ID: &str = "G1";
    pub const SECOND_GROUP_ID: &str = "G2";
    pub const FIRST_SESSION_DATE: &str = "2024-01-07";
    pub const SECOND_SESSION_DATE: &str = "2024-01-14";

    pub fn get_roster_as_csv() -> String {
        format!(
            "S_No,Group_Id,Leader,Co_Leader,Month_Range,Member Name,PHONE NUMBER,{FIRST_SESSION_DATE},{SECOND_SESSION_DATE}\n\
            1,G1,\"Alice Johnson\",\"Ben Carter\",\"Jan-Mar\",\"David Okafor\",\"0301 1234567\",P,A\n\
            2,G1,\"Alice Johnson\",\"Ben Carter\",\"Jan-Mar\",\"Esther Mensah\",\"\",A,P\n\
            3,G2,\"Fatima Noor\",\"\",\"Jan-Mar\",\"Grace Adeyemi\",\"0302 7654321\",P,P"
        )
    }

    pub fn get_expected_groups() -> Vec<Group> {
        vec![
            Group::new(
                FIRST_GROUP_ID.to_owned(),
                "Alice Johnson".to_owned(),
                Some("Ben Carter".to_owned()),
                "Jan-Mar".to_owned(),
                vec![
                    Member::new(
                        "G1-David Okafor-1".to_owned(),
                        "David Okafor".to_owned(),
                        Some("0301 1234567".to_owned()),
                        BTreeMap::from([
                            (FIRST_SESSION_DATE.to_owned(), Present),
                            (SECOND_SESSION_DATE.to_owned(), Absent),
                        ]),
                    ),
                    Member::new(
                        "G1-Esther Mensah-2".to_owned(),
                        "Esther Mensah".to_owned(),
                        None,
                        BTreeMap::from([
                            (FIRST_SESSION_DATE.to_owned(), Absent),
                            (SECOND_SESSION_DATE.to_owned(), Present),
                        ]),
                    ),
                ],
            ),
            Group::new(
                SECOND_GROUP_ID.to_owned(),
                "Fatima Noor".to_owned(),
                None,
                "Jan-Mar".to_owned(),
                vec![Member::new(
                    "G2-Grace Adeyemi-3".to_owned(),
                    "Grace Adeyemi".to_owned(),
                    Some("0302 7654321".to_owned()),
                    BTreeMap::from([
                        (FIRST_SESSION_DATE.to_owned(), Present),
                        (SECOND_SESSION_DATE.to_owned(), Present),
                    ]),
                )],
            ),
        ]
    }

    #[test]
    fn should_replace_details_and_keep_members() {
        let group = get_expected_groups().swap_remove(0);

        let updated = group.with_details("Ama Boateng".to_owned(), None, "Apr-Jun".to_owned());

        assert_eq!(group.id(), updated.id());
        assert_eq!("Ama Boateng", updated.leader_name());
        assert_eq!(&None, updated.co_leader_name());
        assert_eq!("Apr-Jun", updated.month_range());
        assert_eq!(group.members(), updated.members());
    }

    #[test]
    fn should_replace_members() {
        let group = get_expected_groups().swap_remove(0);

        let updated = group.with_members(vec![]);

        assert_eq!(group.id(), updated.id());
        assert_eq!(group.leader_name(), updated.leader_name());
        assert!(updated.members().is_empty());
    }
}
