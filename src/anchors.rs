//! Hyperlink targets between sections.
//!
//! Every page declares its own target with [`target`]. Links to other pages go
//! through [`Anchors`], which only hands out a target when the section owning
//! it is enabled, so the document never links to a missing page.

use crate::sections::SectionKind;
use plannergen_calendar::{CalendarNode, Day, Month, Quarter, Week, Year};
use plannergen_types::AnchorId;
use std::collections::BTreeSet;

/// The target of the page rendering `node`.
pub fn target(node: &impl CalendarNode) -> AnchorId {
    AnchorId::new(&node.id().to_string())
}

pub fn todo() -> AnchorId {
    AnchorId::new("todo")
}

pub fn notes_index() -> AnchorId {
    AnchorId::new("notes index")
}

pub fn note_page(number: usize) -> AnchorId {
    AnchorId::from_parts(["note".to_string(), number.to_string()])
}

pub fn daily_notes(day: &Day) -> AnchorId {
    AnchorId::from_parts(["notes".to_string(), day.id().to_string()])
}

#[derive(Debug, Clone, Default)]
pub struct Anchors {
    enabled: BTreeSet<SectionKind>,
}

impl Anchors {
    pub fn new(enabled: impl IntoIterator<Item = SectionKind>) -> Self {
        Self {
            enabled: enabled.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, kind: SectionKind) -> bool {
        self.enabled.contains(&kind)
    }

    fn when(&self, kind: SectionKind, anchor: impl FnOnce() -> AnchorId) -> Option<AnchorId> {
        self.is_enabled(kind).then(anchor)
    }

    pub fn year(&self, year: &Year) -> Option<AnchorId> {
        self.when(SectionKind::Annual, || target(year))
    }

    pub fn quarter(&self, quarter: &Quarter) -> Option<AnchorId> {
        self.when(SectionKind::Quarterlies, || target(quarter))
    }

    pub fn month(&self, month: &Month) -> Option<AnchorId> {
        self.when(SectionKind::Monthlies, || target(month))
    }

    pub fn week(&self, week: &Week) -> Option<AnchorId> {
        self.when(SectionKind::Weeklies, || target(week))
    }

    /// Days outside `year` have no daily page.
    pub fn day(&self, year: &Year, day: &Day) -> Option<AnchorId> {
        if day.year() != year.number() {
            return None;
        }
        self.when(SectionKind::Dailies, || target(day))
    }

    pub fn daily_notes(&self, day: &Day) -> Option<AnchorId> {
        self.when(SectionKind::DailyNotes, || daily_notes(day))
    }

    pub fn todo(&self) -> Option<AnchorId> {
        self.when(SectionKind::Todo, todo)
    }

    pub fn notes(&self) -> Option<AnchorId> {
        self.when(SectionKind::Notes, notes_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn targets_are_unique_per_level() {
        let year = Year::new(2024, Weekday::Mon).unwrap();
        let quarter = &year.quarters()[0];
        let month = year.month(1).unwrap();
        let week = &year.in_weeks()[0];
        let day = year.days().next().unwrap();
        let ids: BTreeSet<String> = [
            target(&year),
            target(quarter),
            target(month),
            target(week),
            target(&day),
            daily_notes(&day),
        ]
        .iter()
        .map(|a| a.to_string())
        .collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(target(month).as_str(), "2024-01");
        assert_eq!(target(&day).as_str(), "2024-01-01");
        assert_eq!(daily_notes(&day).as_str(), "notes-2024-01-01");
    }

    #[test]
    fn links_require_enabled_sections() {
        let year = Year::new(2024, Weekday::Mon).unwrap();
        let anchors = Anchors::new([SectionKind::Monthlies]);
        assert!(anchors.year(&year).is_none());
        assert_eq!(anchors.month(year.month(3).unwrap()), Some(AnchorId::new("2024-03")));
        assert!(anchors.todo().is_none());
    }

    #[test]
    fn days_of_other_years_are_not_linked() {
        let year = Year::new(2025, Weekday::Mon).unwrap();
        let anchors = Anchors::new([SectionKind::Dailies]);
        let spill = Day::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(anchors.day(&year, &spill).is_none());
        let inside = Day::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(anchors.day(&year, &inside).is_some());
    }

    #[test]
    fn note_pages_are_numbered() {
        assert_eq!(note_page(3).as_str(), "note-3");
        assert_eq!(notes_index().as_str(), "notes-index");
    }
}
