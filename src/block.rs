//! Blocks are the units the page compositor stacks onto a page.

use plannergen_calendar::NodeId;
use plannergen_types::Layout;
use std::fmt;

/// A header or content block for one calendar node.
///
/// The compositor asks for [`Block::height`] first and only renders blocks
/// that fit, so `height` must not depend on rendering.
pub trait Block {
    /// The calendar node this block describes, used to report failures.
    fn node(&self) -> NodeId;

    /// Vertical space in millimetres.
    fn height(&self, layout: &Layout) -> f32;

    fn render(&self, layout: &Layout) -> Result<String, fmt::Error>;
}
