use crate::day::Day;
use crate::error::CalendarError;
use crate::node::{CalendarNode, NodeId};
use crate::week::Week;
use crate::weekday_offset;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::ops::RangeInclusive;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of month `number` (1..=12), empty for anything else.
pub fn month_name(number: u32) -> &'static str {
    number
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    year: i32,
    number: u32,
    first: NaiveDate,
    last: NaiveDate,
    weeks: Vec<Week>,
}

impl Month {
    /// `year_start` is the first day of the year's first week; grid rows are
    /// numbered relative to it so they match [`crate::Year::in_weeks`].
    pub(crate) fn new(
        year: i32,
        number: u32,
        first_weekday: Weekday,
        year_start: NaiveDate,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&number) {
            return Err(CalendarError::InvalidMonth(number));
        }

        let out_of_range = || CalendarError::YearOutOfRange(year);
        let first = NaiveDate::from_ymd_opt(year, number, 1).ok_or_else(out_of_range)?;
        let next_first = if number == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, number + 1, 1)
        };
        let last = next_first
            .and_then(|date| date.pred_opt())
            .ok_or_else(out_of_range)?;

        let mut weeks = Vec::with_capacity(6);
        let mut row_start = first
            .checked_sub_days(Days::new(weekday_offset(first.weekday(), first_weekday)))
            .ok_or_else(out_of_range)?;
        while row_start <= last {
            let number = (row_start.signed_duration_since(year_start).num_days() / 7 + 1) as u32;
            weeks.push(Week::starting(year, number, row_start).ok_or_else(out_of_range)?);
            row_start = row_start
                .checked_add_days(Days::new(7))
                .ok_or_else(out_of_range)?;
        }

        Ok(Self {
            year,
            number,
            first,
            last,
            weeks,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1..=12.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn short_name(&self) -> &'static str {
        let name = month_name(self.number);
        &name[..name.len().min(3)]
    }

    /// Quarter the month belongs to, 1..=4.
    pub fn quarter(&self) -> u8 {
        ((self.number - 1) / 3 + 1) as u8
    }

    pub fn first_day(&self) -> Day {
        Day::new(self.first)
    }

    pub fn last_day(&self) -> Day {
        Day::new(self.last)
    }

    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.first
            .iter_days()
            .take_while(|date| *date <= self.last)
            .map(Day::new)
    }

    /// Rows of the month grid, padded with days of the adjacent months.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }
}

impl CalendarNode for Month {
    fn id(&self) -> NodeId {
        NodeId::Month {
            year: self.year,
            month: self.number,
        }
    }

    fn name(&self) -> String {
        month_name(self.number).to_string()
    }

    fn date_range(&self) -> RangeInclusive<NaiveDate> {
        self.first..=self.last
    }
}
