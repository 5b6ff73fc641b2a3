//! Page geometry for a target device. All lengths are millimetres.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Paper {
    pub width: f32,
    pub height: f32,
}

impl Paper {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

/// Gaps between columns when the body is split into two or three columns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Sizes {
    pub two_columns_separator: f32,
    pub three_columns_separator: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFlags {
    /// Draw borders around hyperlinks.
    pub show_links: bool,
    /// Draw the page, body and margin frames.
    pub show_frames: bool,
}

/// Device-specific typographic parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    /// Height of one body line.
    pub line_height: f32,
    /// `\arraystretch` applied to the navigation header.
    pub header_array_stretch: f32,
    /// `\arraystretch` applied to the month and quarter lists in the margin.
    pub margin_notes_array_stretch: f32,
    /// Length of the rotated month list in the margin.
    pub margin_notes_months_width: f32,
    /// Length of the rotated quarter list in the margin.
    pub margin_notes_quarters_width: f32,
    pub margin_par_width: f32,
    pub margin_par_sep: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            line_height: 5.0,
            header_array_stretch: 1.5,
            margin_notes_array_stretch: 1.5,
            margin_notes_months_width: 150.0,
            margin_notes_quarters_width: 50.0,
            margin_par_width: 4.0,
            margin_par_sep: 1.0,
        }
    }
}

/// The resolved, immutable description of a device page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Layout {
    pub device: String,
    pub paper: Paper,
    pub margin: Margin,
    pub sizes: Sizes,
    pub debug: DebugFlags,
    pub typography: Typography,
}

impl Layout {
    /// Vertical space available to blocks on one page.
    pub fn content_height(&self) -> f32 {
        (self.paper.height - self.margin.vertical()).max(0.0)
    }

    pub fn content_width(&self) -> f32 {
        (self.paper.width - self.margin.horizontal()).max(0.0)
    }

    /// Height taken by `lines` body lines.
    pub fn lines_height(&self, lines: usize) -> f32 {
        lines as f32 * self.typography.line_height
    }

    /// Number of whole body lines that fit into `height`.
    pub fn lines_in(&self, height: f32) -> usize {
        if self.typography.line_height <= 0.0 {
            return 0;
        }
        (height / self.typography.line_height).floor() as usize
    }
}
