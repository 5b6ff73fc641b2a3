use plannergen::{Planner, PlannerBuilder, PlannerParams};

/// Sections reached through the calendar navigation.
pub const CALENDAR_SECTIONS: &[&str] = &["title", "annual", "quarterlies", "monthlies", "weeklies"];

/// A builder for the reference device and year 2024.
pub fn a5x_2024() -> PlannerBuilder {
    Planner::builder().with_device("supernote_a5x").with_year(2024)
}

/// A builder rendering only `sections`, all other sections disabled.
pub fn only(year: i32, sections: &[&str]) -> PlannerBuilder {
    Planner::builder()
        .with_device("supernote_a5x")
        .with_year(year)
        .with_sections(sections.iter().copied())
        .disable_remaining()
}

/// Parameters as a user would write them in a config file.
pub fn params_json(year: i32) -> String {
    format!(
        r#"{{
            "device": "supernote_a5x",
            "year": {year},
            "first_weekday": "Sun",
            "enabled_sections": ["title", "dailies"],
            "disabled_sections": ["annual", "quarterlies", "monthlies", "weeklies", "daily_notes", "todo", "notes"],
            "daily": {{ "schedule_from": 7, "schedule_to": 19 }}
        }}"#
    )
}

pub fn default_params(year: i32) -> PlannerParams {
    PlannerParams {
        year,
        ..PlannerParams::default()
    }
}
