use crate::day::Day;
use crate::node::{CalendarNode, NodeId};
use chrono::{Days, NaiveDate};
use std::ops::RangeInclusive;

/// Seven consecutive days starting on the year's first weekday.
///
/// The first and last week of a year may contain days of the neighbouring
/// years; `head_month` and `tail_month` only look at days inside `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    year: i32,
    number: u32,
    days: [Day; 7],
}

impl Week {
    pub(crate) fn starting(year: i32, number: u32, start: NaiveDate) -> Option<Self> {
        let mut days = [Day::new(start); 7];
        for (offset, slot) in days.iter_mut().enumerate().skip(1) {
            *slot = Day::new(start.checked_add_days(Days::new(offset as u64))?);
        }
        Some(Self { year, number, days })
    }

    /// 1-based position of the week within its year.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days(&self) -> &[Day; 7] {
        &self.days
    }

    pub fn first(&self) -> Day {
        self.days[0]
    }

    pub fn last(&self) -> Day {
        self.days[6]
    }

    /// Month of the first day that belongs to the week's year.
    pub fn head_month(&self) -> u32 {
        self.days
            .iter()
            .find(|day| day.year() == self.year)
            .unwrap_or(&self.days[0])
            .month()
    }

    /// Month of the last day that belongs to the week's year.
    pub fn tail_month(&self) -> u32 {
        self.days
            .iter()
            .rev()
            .find(|day| day.year() == self.year)
            .unwrap_or(&self.days[6])
            .month()
    }

    pub fn spans_two_months(&self) -> bool {
        self.head_month() != self.tail_month()
    }
}

impl CalendarNode for Week {
    fn id(&self) -> NodeId {
        NodeId::Week {
            year: self.year,
            week: self.number,
        }
    }

    fn name(&self) -> String {
        format!("Week {}", self.number)
    }

    fn date_range(&self) -> RangeInclusive<NaiveDate> {
        self.first().date()..=self.last().date()
    }
}
