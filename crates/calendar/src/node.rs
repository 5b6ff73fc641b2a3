use chrono::NaiveDate;
use std::fmt;
use std::ops::RangeInclusive;

/// Identity of a single calendar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    Year(i32),
    Quarter { year: i32, quarter: u8 },
    Month { year: i32, month: u32 },
    Week { year: i32, week: u32 },
    Day(NaiveDate),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Year(year) => write!(f, "year {year}"),
            NodeId::Quarter { year, quarter } => write!(f, "Q{quarter} {year}"),
            NodeId::Month { year, month } => write!(f, "{year}-{month:02}"),
            NodeId::Week { year, week } => write!(f, "week {week} of {year}"),
            NodeId::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Common accessors shared by every level of the calendar tree.
pub trait CalendarNode {
    fn id(&self) -> NodeId;

    /// Human-readable name, e.g. `2024`, `Q1`, `February`, `Week 9`, `Thu Feb 29`.
    fn name(&self) -> String;

    /// Inclusive first and last date covered by the node.
    fn date_range(&self) -> RangeInclusive<NaiveDate>;

    fn contains(&self, date: NaiveDate) -> bool {
        self.date_range().contains(&date)
    }
}
