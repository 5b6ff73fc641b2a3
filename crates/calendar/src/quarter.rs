use crate::month::Month;
use crate::node::{CalendarNode, NodeId};
use chrono::NaiveDate;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarter {
    year: i32,
    number: u8,
    months: [Month; 3],
}

impl Quarter {
    pub(crate) fn new(year: i32, number: u8, months: [Month; 3]) -> Self {
        Self {
            year,
            number,
            months,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Quarter number, 1..=4.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn months(&self) -> &[Month; 3] {
        &self.months
    }
}

impl CalendarNode for Quarter {
    fn id(&self) -> NodeId {
        NodeId::Quarter {
            year: self.year,
            quarter: self.number,
        }
    }

    fn name(&self) -> String {
        format!("Q{}", self.number)
    }

    fn date_range(&self) -> RangeInclusive<NaiveDate> {
        let start = *self.months[0].date_range().start();
        let end = *self.months[2].date_range().end();
        start..=end
    }
}
