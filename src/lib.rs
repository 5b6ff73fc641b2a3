//! LaTeX planner generation.
//!
//! A [`Planner`] turns a device layout, a calendar year and a list of enabled
//! sections into ordered, page-delimited LaTeX fragments ([`NamedOutputs`]),
//! ready to be written next to a root document and compiled.
//!
//! ```no_run
//! use plannergen::{Planner, PlannerError};
//!
//! fn main() -> Result<(), PlannerError> {
//!     let planner = Planner::builder()
//!         .with_device("supernote_a5x")
//!         .with_year(2024)
//!         .build()?;
//!     let outputs = planner.build_data()?;
//!     outputs.write_tex_to("out", planner.layout())?;
//!     Ok(())
//! }
//! ```

pub mod anchors;
pub mod block;
pub mod buffer;
pub mod config;
pub mod devices;
pub mod document;
pub mod error;
pub mod header;
pub mod page;
pub mod planner;
pub mod sections;
pub mod tex;

pub use buffer::{NamedOutput, NamedOutputs, SectionBuffer};
pub use config::{DailyParams, NotesParams, PlannerParams, TodoParams};
pub use devices::Device;
pub use error::{PlannerError, SectionError};
pub use header::{Header, Highlight, Reference, Selection};
pub use planner::{Planner, PlannerBuilder};
pub use sections::{SectionContext, SectionKind, SectionRegistry};

pub use plannergen_calendar as calendar;
pub use plannergen_types::{AnchorId, Layout};
