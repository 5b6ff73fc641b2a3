//! Section builders.
//!
//! A section is a named run of pages (all dailies, all monthlies, ...). Each
//! builder reads the shared [`SectionContext`] and writes into a
//! [`SectionBuffer`] it owns; the buffer only becomes a [`NamedOutput`] when
//! the builder succeeds.

mod annual;
mod daily;
mod grid;
mod monthly;
mod notes;
mod quarterly;
mod title;
mod weekly;

use crate::anchors::Anchors;
use crate::buffer::{NamedOutput, SectionBuffer};
use crate::config::PlannerParams;
use crate::error::{PlannerError, SectionError};
use crate::page::PageCompositor;
use log::debug;
use plannergen_calendar::Year;
use plannergen_types::Layout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use annual::AnnualContent;
pub use daily::DailyContent;
pub use monthly::MonthlyContent;
pub use notes::{DailyNotesContent, NotesIndexContent, NotesPageContent, TodoContent};
pub use quarterly::QuarterlyContent;
pub use title::TitleContent;
pub use weekly::WeeklyContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Title,
    Annual,
    Quarterlies,
    Monthlies,
    Weeklies,
    Dailies,
    DailyNotes,
    Todo,
    Notes,
}

impl SectionKind {
    pub const ALL: &'static [SectionKind] = &[
        SectionKind::Title,
        SectionKind::Annual,
        SectionKind::Quarterlies,
        SectionKind::Monthlies,
        SectionKind::Weeklies,
        SectionKind::Dailies,
        SectionKind::DailyNotes,
        SectionKind::Todo,
        SectionKind::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Title => "title",
            SectionKind::Annual => "annual",
            SectionKind::Quarterlies => "quarterlies",
            SectionKind::Monthlies => "monthlies",
            SectionKind::Weeklies => "weeklies",
            SectionKind::Dailies => "dailies",
            SectionKind::DailyNotes => "daily_notes",
            SectionKind::Todo => "todo",
            SectionKind::Notes => "notes",
        }
    }
}

impl FromStr for SectionKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PlannerError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only inputs shared by every section builder of a run.
#[derive(Debug)]
pub struct SectionContext {
    pub layout: Layout,
    pub year: Year,
    pub params: PlannerParams,
    pub anchors: Anchors,
}

impl SectionContext {
    pub fn compositor(&self) -> PageCompositor<'_> {
        PageCompositor::new(&self.layout)
    }
}

pub type SectionFn = fn(&SectionContext, &mut SectionBuffer) -> Result<(), SectionError>;

/// The section builders a planner can run.
#[derive(Clone, Default)]
pub struct SectionRegistry {
    producers: BTreeMap<SectionKind, SectionFn>,
}

impl SectionRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every section this crate can build.
    pub fn months_on_sides() -> Self {
        Self::empty()
            .register(SectionKind::Title, title::build)
            .register(SectionKind::Annual, annual::build)
            .register(SectionKind::Quarterlies, quarterly::build)
            .register(SectionKind::Monthlies, monthly::build)
            .register(SectionKind::Weeklies, weekly::build)
            .register(SectionKind::Dailies, daily::build)
            .register(SectionKind::DailyNotes, notes::build_daily_notes)
            .register(SectionKind::Todo, notes::build_todo)
            .register(SectionKind::Notes, notes::build_notes)
    }

    pub fn register(mut self, kind: SectionKind, producer: SectionFn) -> Self {
        self.producers.insert(kind, producer);
        self
    }

    pub fn get(&self, kind: SectionKind) -> Option<SectionFn> {
        self.producers.get(&kind).copied()
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.producers.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.producers.keys().copied()
    }
}

impl fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.producers.keys()).finish()
    }
}

/// Runs one builder. A failing builder's buffer is dropped, never returned.
pub fn run_section(
    kind: SectionKind,
    producer: SectionFn,
    ctx: &SectionContext,
) -> Result<NamedOutput, PlannerError> {
    debug!("Building section '{kind}'.");
    let mut buffer = SectionBuffer::new(kind);
    producer(ctx, &mut buffer).map_err(|source| PlannerError::Section {
        section: kind,
        source,
    })?;
    let output = buffer.freeze();
    debug!("Section '{kind}' finished with {} pages.", output.page_count());
    Ok(output)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::devices::Device;
    use chrono::Weekday;

    pub fn context(year: i32) -> SectionContext {
        SectionContext {
            layout: Device::SupernoteA5X.layout(),
            year: Year::new(year, Weekday::Mon).unwrap(),
            params: PlannerParams {
                year,
                ..PlannerParams::default()
            },
            anchors: Anchors::new(SectionKind::ALL.iter().copied()),
        }
    }

    pub fn build(ctx: &SectionContext, kind: SectionKind) -> Result<NamedOutput, PlannerError> {
        let producer = SectionRegistry::months_on_sides().get(kind).unwrap();
        run_section(kind, producer, ctx)
    }
}
