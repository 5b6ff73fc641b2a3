// src/error.rs
//! Error types for planner construction and section rendering.

use crate::sections::SectionKind;
use plannergen_calendar::{CalendarError, NodeId};
use thiserror::Error;

/// Failure while turning one calendar node into a page.
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Page for {node} needs {required:.2}mm which exceeds the page content height of {available:.2}mm.")]
    Overflow {
        node: NodeId,
        required: f32,
        available: f32,
    },
    #[error("Formatting {node} failed: {source}")]
    Format {
        node: NodeId,
        #[source]
        source: std::fmt::Error,
    },
}

impl SectionError {
    pub fn node(&self) -> NodeId {
        match self {
            SectionError::Overflow { node, .. } | SectionError::Format { node, .. } => *node,
        }
    }
}

/// The main error enum for planner configuration and generation.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Unknown device: '{0}'")]
    UnknownDevice(String),
    #[error("Unknown section: '{0}'")]
    UnknownSection(String),
    #[error("Section '{0}' is enabled more than once")]
    DuplicateSection(String),
    #[error("Section '{0}' is registered but neither enabled nor disabled")]
    MissingSection(SectionKind),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),
    #[error("Section '{section}' failed: {source}")]
    Section {
        section: SectionKind,
        #[source]
        source: SectionError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    /// True for errors raised while validating the configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            PlannerError::UnknownDevice(_)
                | PlannerError::UnknownSection(_)
                | PlannerError::DuplicateSection(_)
                | PlannerError::MissingSection(_)
                | PlannerError::Config(_)
        )
    }
}
