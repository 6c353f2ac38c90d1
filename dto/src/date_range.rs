use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inclusive calendar bounds for report queries. An absent bound leaves that
/// side open; the default range spans everything.
#[derive(Debug, Serialize, Deserialize, Getters, Copy, Clone, Eq, PartialEq, Default)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| from <= date) && self.to.is_none_or(|to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[parameterized(
        from = {None, Some((2024, 1, 1)), None, Some((2024, 1, 7)), Some((2024, 1, 14)), None},
        to = {None, None, Some((2024, 1, 7)), Some((2024, 1, 7)), Some((2024, 1, 21)), Some((2024, 1, 6))},
        expected_result = {true, true, true, true, false, false}
    )]
    fn should_tell_whether_date_is_in_range(
        from: Option<(i32, u32, u32)>,
        to: Option<(i32, u32, u32)>,
        expected_result: bool,
    ) {
        let range = DateRange::new(
            from.map(|(year, month, day)| date(year, month, day)),
            to.map(|(year, month, day)| date(year, month, day)),
        );

        assert_eq!(expected_result, range.contains(date(2024, 1, 7)));
    }

    #[test]
    fn should_span_everything_by_default() {
        let range = DateRange::default();

        assert!(range.contains(NaiveDate::MIN));
        assert!(range.contains(NaiveDate::MAX));
    }
}
