//! Calendar model for planner generation.
//!
//! A [`Year`] is resolved once and then only read. It owns its quarters, the
//! quarters own their months, and every month carries the week rows of its
//! grid. Weekday alignment and leap years come from `chrono`; nothing here is
//! mutable after construction.
//!
//! ```ignore
//! use chrono::Weekday;
//! use plannergen_calendar::Year;
//!
//! let year = Year::new(2024, Weekday::Mon)?;
//! assert_eq!(year.days().count(), 366);
//! ```

mod day;
mod error;
mod month;
mod node;
mod quarter;
mod week;
mod year;

pub use day::Day;
pub use error::CalendarError;
pub use month::{Month, month_name};
pub use node::{CalendarNode, NodeId};
pub use quarter::Quarter;
pub use week::Week;
pub use year::Year;

pub use chrono::{NaiveDate, Weekday};

/// Days between `first_weekday` and `weekday`, walking forward.
pub(crate) fn weekday_offset(weekday: Weekday, first_weekday: Weekday) -> u64 {
    let day = weekday.num_days_from_monday();
    let first = first_weekday.num_days_from_monday();
    u64::from((day + 7 - first) % 7)
}
