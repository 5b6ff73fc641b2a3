//! Device registry: maps a device identifier to its page [`Layout`].
//!
//! Adding a device means adding a [`Device`] variant, its id in
//! [`Device::id`] and its geometry in [`Device::layout`]. Nothing else reads
//! device identities.

use crate::error::PlannerError;
use plannergen_types::{DebugFlags, Layout, Margin, Paper, Sizes, Typography};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    SupernoteA5X,
}

impl Device {
    pub const ALL: &'static [Device] = &[Device::SupernoteA5X];

    pub fn id(self) -> &'static str {
        match self {
            Device::SupernoteA5X => "supernote_a5x",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Device::SupernoteA5X => Layout {
                device: self.id().to_string(),
                paper: Paper::new(156.0, 230.0),
                margin: Margin::new(10.0, 5.0, 10.0, 5.0),
                sizes: Sizes {
                    two_columns_separator: 5.0,
                    three_columns_separator: 5.0,
                },
                debug: DebugFlags {
                    show_links: true,
                    show_frames: true,
                },
                typography: Typography {
                    line_height: 5.0,
                    header_array_stretch: 1.8185,
                    margin_notes_array_stretch: 2.042,
                    margin_notes_months_width: 157.0,
                    margin_notes_quarters_width: 50.0,
                    margin_par_width: 4.0,
                    margin_par_sep: 1.0,
                },
            },
        }
    }
}

impl FromStr for Device {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::ALL
            .iter()
            .copied()
            .find(|device| device.id() == s)
            .ok_or_else(|| PlannerError::UnknownDevice(s.to_string()))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Resolves a device identifier to its layout.
pub fn resolve(device_id: &str) -> Result<Layout, PlannerError> {
    device_id.parse::<Device>().map(Device::layout)
}
