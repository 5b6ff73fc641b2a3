//! Planner parameters: the single, validated configuration record read by
//! every section builder.

use crate::error::PlannerError;
use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Layout of each daily page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyParams {
    /// First hour in the schedule column.
    pub schedule_from: u32,
    /// Hour after the last schedule row, at most 24.
    pub schedule_to: u32,
    pub priorities: usize,
    pub notes_lines: usize,
}

impl Default for DailyParams {
    fn default() -> Self {
        Self {
            schedule_from: 8,
            schedule_to: 20,
            priorities: 5,
            notes_lines: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesParams {
    /// Number of notes pages after the notes index.
    pub pages: usize,
    /// Ruled lines on each notes page, also used for daily notes.
    pub lines_per_page: usize,
}

impl Default for NotesParams {
    fn default() -> Self {
        Self {
            pages: 20,
            lines_per_page: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoParams {
    pub items: usize,
}

impl Default for TodoParams {
    fn default() -> Self {
        Self { items: 30 }
    }
}

/// Everything the planner needs besides the calendar itself.
///
/// Section names are kept as strings here; they are resolved against the
/// section registry when the planner is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerParams {
    pub device: String,
    pub year: i32,
    pub first_weekday: Weekday,
    /// Sections to render, in output order.
    pub enabled_sections: Vec<String>,
    /// Registered sections that are deliberately left out.
    pub disabled_sections: Vec<String>,
    pub daily: DailyParams,
    pub notes: NotesParams,
    pub todo: TodoParams,
    /// Run section builders on the rayon pool.
    pub parallel: bool,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            device: "supernote_a5x".to_string(),
            year: Local::now().year(),
            first_weekday: Weekday::Mon,
            enabled_sections: [
                "title",
                "annual",
                "quarterlies",
                "monthlies",
                "weeklies",
                "dailies",
                "daily_notes",
                "todo",
                "notes",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            disabled_sections: Vec::new(),
            daily: DailyParams::default(),
            notes: NotesParams::default(),
            todo: TodoParams::default(),
            parallel: false,
        }
    }
}

impl PlannerParams {
    pub fn from_json_str(json: &str) -> Result<Self, PlannerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PlannerError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read parameters from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }

    /// Checks the numeric fields. Section names are checked by the planner.
    pub fn validate(&self) -> Result<(), PlannerError> {
        let daily = &self.daily;
        if daily.schedule_to > 24 {
            return Err(PlannerError::Config(format!(
                "daily.schedule_to must be at most 24, got {}",
                daily.schedule_to
            )));
        }
        if daily.schedule_from >= daily.schedule_to {
            return Err(PlannerError::Config(format!(
                "daily.schedule_from ({}) must be before daily.schedule_to ({})",
                daily.schedule_from, daily.schedule_to
            )));
        }
        if self.notes.pages == 0 {
            return Err(PlannerError::Config("notes.pages must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PlannerParams::default().validate().is_ok());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let params = PlannerParams::from_json_str(
            r#"{ "year": 2024, "first_weekday": "Sun", "enabled_sections": ["title"], "daily": { "priorities": 3 } }"#,
        )
        .unwrap();
        assert_eq!(params.year, 2024);
        assert_eq!(params.first_weekday, Weekday::Sun);
        assert_eq!(params.enabled_sections, ["title"]);
        assert_eq!(params.device, "supernote_a5x");
        assert_eq!(params.daily.priorities, 3);
        assert_eq!(params.daily.schedule_from, 8);
    }

    #[test]
    fn schedule_must_be_ordered() {
        let mut params = PlannerParams::default();
        params.daily.schedule_from = 20;
        params.daily.schedule_to = 8;
        assert!(matches!(params.validate(), Err(PlannerError::Config(_))));
    }

    #[test]
    fn schedule_must_fit_in_a_day() {
        let mut params = PlannerParams::default();
        params.daily.schedule_to = 25;
        assert!(matches!(params.validate(), Err(PlannerError::Config(_))));
    }

    #[test]
    fn notes_need_pages() {
        let mut params = PlannerParams::default();
        params.notes.pages = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            PlannerParams::from_json_str("{ year: }"),
            Err(PlannerError::Json(_))
        ));
    }
}
