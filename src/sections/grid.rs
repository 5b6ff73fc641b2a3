//! Month grids shared by the annual, quarterly and monthly pages.

use crate::anchors::Anchors;
use crate::tex::{self, Cell};
use plannergen_calendar::{CalendarNode, Month, Weekday, Year};
use std::fmt::{self, Write};

fn initial(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "M",
        Weekday::Tue | Weekday::Thu => "T",
        Weekday::Wed => "W",
        Weekday::Fri => "F",
        Weekday::Sat | Weekday::Sun => "S",
    }
}

/// The seven weekdays in display order, starting at `first`.
pub(crate) fn weekdays(first: Weekday) -> [Weekday; 7] {
    std::array::from_fn(|offset| (0..offset).fold(first, |day, _| day.succ()))
}

/// Compact month table: title row, weekday initials, one row per week.
pub(crate) struct MiniGrid<'a> {
    year: &'a Year,
    month: &'a Month,
    anchors: &'a Anchors,
}

impl<'a> MiniGrid<'a> {
    pub(crate) fn new(year: &'a Year, month: &'a Month, anchors: &'a Anchors) -> Self {
        Self { year, month, anchors }
    }

    /// Body lines the grid occupies.
    pub(crate) fn lines(&self) -> usize {
        2 + self.month.weeks().len()
    }

    pub(crate) fn write(&self, tex: &mut String, width: &str) -> fmt::Result {
        writeln!(tex, "\\begin{{tabularx}}{{{width}}}{{@{{}}l|*{{7}}{{X}}@{{}}}}")?;
        let title = tex::maybe_link(self.anchors.month(self.month).as_ref(), &self.month.name());
        writeln!(tex, "\\multicolumn{{8}}{{c}}{{\\textbf{{{title}}}}} \\\\")?;

        let mut head = vec![Cell::new("W")];
        head.extend(weekdays(self.year.first_weekday()).map(|d| Cell::new(initial(d))));
        writeln!(tex, "{} \\\\ \\hline", tex::row(&head))?;

        for week in self.month.weeks() {
            let mut cells = vec![Cell::new(week.number().to_string()).link(self.anchors.week(week))];
            cells.extend(week.days().iter().map(|day| {
                if self.month.contains(day.date()) {
                    Cell::new(day.day().to_string()).link(self.anchors.day(self.year, day))
                } else {
                    Cell::new("")
                }
            }));
            writeln!(tex, "{} \\\\", tex::row(&cells))?;
        }
        writeln!(tex, "\\end{{tabularx}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionKind;

    #[test]
    fn weekdays_start_at_first_weekday() {
        let days = weekdays(Weekday::Sun);
        assert_eq!(days[0], Weekday::Sun);
        assert_eq!(days[1], Weekday::Mon);
        assert_eq!(days[6], Weekday::Sat);
        let initials: String = days.iter().map(|d| initial(*d)).collect();
        assert_eq!(initials, "SMTWTFS");
        assert_eq!(weekdays(Weekday::Wed)[4], Weekday::Sun);
    }

    #[test]
    fn grid_links_days_and_weeks() {
        let year = Year::new(2024, Weekday::Mon).unwrap();
        let anchors = Anchors::new(SectionKind::ALL.iter().copied());
        let february = year.month(2).unwrap();
        let grid = MiniGrid::new(&year, february, &anchors);
        let mut tex = String::new();
        grid.write(&mut tex, "\\linewidth").unwrap();

        assert_eq!(grid.lines(), 2 + 5);
        assert!(tex.contains("\\hyperlink{2024-02}{February}"));
        assert!(tex.contains("\\hyperlink{2024-02-29}{29}"));
        assert!(tex.contains("\\hyperlink{week-5-of-2024}{5}"));
        // Jan 29 shares the first row but is not part of February.
        assert!(!tex.contains("{2024-01-29}"));
    }

    #[test]
    fn disabled_targets_stay_plain_text() {
        let year = Year::new(2024, Weekday::Mon).unwrap();
        let anchors = Anchors::default();
        let mut tex = String::new();
        MiniGrid::new(&year, year.month(1).unwrap(), &anchors)
            .write(&mut tex, "40mm")
            .unwrap();
        assert!(!tex.contains("\\hyperlink"));
        assert!(tex.contains("\\textbf{January}"));
    }
}
