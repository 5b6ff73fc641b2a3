use crate::day::Day;
use crate::error::CalendarError;
use crate::month::Month;
use crate::node::{CalendarNode, NodeId};
use crate::quarter::Quarter;
use crate::week::Week;
use crate::weekday_offset;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::ops::RangeInclusive;

/// Root of the calendar tree. Everything below it is computed in [`Year::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    number: i32,
    first_weekday: Weekday,
    first: NaiveDate,
    last: NaiveDate,
    quarters: Vec<Quarter>,
    weeks: Vec<Week>,
}

impl Year {
    pub fn new(number: i32, first_weekday: Weekday) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::YearOutOfRange(number);
        let first = NaiveDate::from_ymd_opt(number, 1, 1).ok_or_else(out_of_range)?;
        let last = NaiveDate::from_ymd_opt(number, 12, 31).ok_or_else(out_of_range)?;
        let year_start = first
            .checked_sub_days(Days::new(weekday_offset(first.weekday(), first_weekday)))
            .ok_or_else(out_of_range)?;

        let mut quarters = Vec::with_capacity(4);
        for quarter in 1..=4u8 {
            let head = u32::from(quarter - 1) * 3 + 1;
            let months = [
                Month::new(number, head, first_weekday, year_start)?,
                Month::new(number, head + 1, first_weekday, year_start)?,
                Month::new(number, head + 2, first_weekday, year_start)?,
            ];
            quarters.push(Quarter::new(number, quarter, months));
        }

        let mut weeks = Vec::with_capacity(54);
        let mut start = year_start;
        while start <= last {
            let week_number = weeks.len() as u32 + 1;
            weeks.push(Week::starting(number, week_number, start).ok_or_else(out_of_range)?);
            start = start.checked_add_days(Days::new(7)).ok_or_else(out_of_range)?;
        }

        Ok(Self {
            number,
            first_weekday,
            first,
            last,
            quarters,
            weeks,
        })
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn is_leap(&self) -> bool {
        self.last.ordinal() == 366
    }

    pub fn quarters(&self) -> &[Quarter] {
        &self.quarters
    }

    pub fn months(&self) -> impl Iterator<Item = &Month> + '_ {
        self.quarters.iter().flat_map(|quarter| quarter.months().iter())
    }

    /// Month by number (1..=12).
    pub fn month(&self, number: u32) -> Option<&Month> {
        self.months().find(|month| month.number() == number)
    }

    /// Weeks covering the whole year, the first containing Jan 1 and the
    /// last containing Dec 31.
    pub fn in_weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.first
            .iter_days()
            .take_while(|date| *date <= self.last)
            .map(Day::new)
    }
}

impl CalendarNode for Year {
    fn id(&self) -> NodeId {
        NodeId::Year(self.number)
    }

    fn name(&self) -> String {
        self.number.to_string()
    }

    fn date_range(&self) -> RangeInclusive<NaiveDate> {
        self.first..=self.last
    }
}
