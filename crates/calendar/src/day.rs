use crate::month::month_name;
use crate::node::{CalendarNode, NodeId};
use chrono::{Datelike, NaiveDate, Weekday};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    date: NaiveDate,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month())
    }

    /// Day of the month, 1..=31.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Day of the year, 1..=366.
    pub fn ordinal(&self) -> u32 {
        self.date.ordinal()
    }

    /// Formats with `chrono` strftime syntax.
    pub fn format(&self, pattern: &str) -> String {
        self.date.format(pattern).to_string()
    }

    /// Short label used in headers, e.g. `Mon Jan 2`.
    pub fn label(&self) -> String {
        self.format("%a %b %-d")
    }

    pub fn prev(&self) -> Option<Day> {
        self.date.pred_opt().map(Day::new)
    }

    pub fn next(&self) -> Option<Day> {
        self.date.succ_opt().map(Day::new)
    }
}

impl CalendarNode for Day {
    fn id(&self) -> NodeId {
        NodeId::Day(self.date)
    }

    fn name(&self) -> String {
        self.label()
    }

    fn date_range(&self) -> RangeInclusive<NaiveDate> {
        self.date..=self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn label_has_no_padding() {
        assert_eq!(day(2006, 1, 2).label(), "Mon Jan 2");
        assert_eq!(day(2024, 12, 25).label(), "Wed Dec 25");
    }

    #[test]
    fn neighbors_cross_month_and_year_boundaries() {
        assert_eq!(day(2024, 2, 29).next(), Some(day(2024, 3, 1)));
        assert_eq!(day(2024, 1, 1).prev(), Some(day(2023, 12, 31)));
    }

    #[test]
    fn accessors_reflect_the_date() {
        let leap = day(2024, 2, 29);
        assert_eq!(leap.month(), 2);
        assert_eq!(leap.month_name(), "February");
        assert_eq!(leap.ordinal(), 60);
        assert_eq!(leap.weekday(), Weekday::Thu);
    }
}
