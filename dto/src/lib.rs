pub mod at_risk;
pub mod attendance_status;
pub mod command;
pub mod dashboard;
pub mod date_range;
pub mod group;
pub mod group_performance;
pub mod history;
pub mod leaderboard;
pub mod member;
pub mod member_overview;
pub mod session;
