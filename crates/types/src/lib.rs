pub mod geometry;
pub mod ids;

pub use geometry::{DebugFlags, Layout, Margin, Paper, Sizes, Typography};
pub use ids::AnchorId;
