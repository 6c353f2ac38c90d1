use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One point of the per-session attendance trend.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct TrendPoint {
    date: String,
    present_count: usize,
    absent_count: usize,
}

impl TrendPoint {
    pub fn new(date: String, present_count: usize, absent_count: usize) -> Self {
        Self {
            date,
            present_count,
            absent_count,
        }
    }
}

/// Headline figures for the dashboard. The trend lists sessions in ascending
/// date order.
#[derive(Debug, Serialize, Deserialize, Getters, Clone, Eq, PartialEq)]
pub struct DashboardSummary {
    total_groups: usize,
    total_members: usize,
    overall_rate: u8,
    trend: Vec<TrendPoint>,
}

impl DashboardSummary {
    pub fn new(
        total_groups: usize,
        total_members: usize,
        overall_rate: u8,
        trend: Vec<TrendPoint>,
    ) -> Self {
        Self {
            total_groups,
            total_members,
            overall_rate,
            trend,
        }
    }
}
