use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Year {0} cannot be represented by the calendar.")]
    YearOutOfRange(i32),
    #[error("Month {0} is not in 1..=12.")]
    InvalidMonth(u32),
}
