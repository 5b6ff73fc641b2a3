use crate::anchors::{self, Anchors};
use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::error::SectionError;
use crate::header::{Header, Selection};
use crate::page::Sheet;
use crate::sections::SectionContext;
use crate::sections::grid::MiniGrid;
use crate::tex;
use plannergen_calendar::{CalendarNode, NodeId, Quarter, Year};
use plannergen_types::Layout;
use std::fmt;

/// The three month grids of a quarter, stacked.
pub struct QuarterlyContent<'a> {
    year: &'a Year,
    quarter: &'a Quarter,
    anchors: &'a Anchors,
}

impl<'a> QuarterlyContent<'a> {
    pub fn new(ctx: &'a SectionContext, quarter: &'a Quarter) -> Self {
        Self {
            year: &ctx.year,
            quarter,
            anchors: &ctx.anchors,
        }
    }
}

impl Block for QuarterlyContent<'_> {
    fn node(&self) -> NodeId {
        self.quarter.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        let lines: usize = self
            .quarter
            .months()
            .iter()
            .map(|month| MiniGrid::new(self.year, month, self.anchors).lines())
            .sum();
        layout.lines_height(lines)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let mut tex = tex::hypertarget(&anchors::target(self.quarter));
        tex.push('\n');
        for month in self.quarter.months() {
            let grid = MiniGrid::new(self.year, month, self.anchors);
            grid.write(&mut tex, "\\linewidth")?;
            tex.push_str("\\par\n");
        }
        Ok(tex)
    }
}

pub(crate) fn build(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let sheets = ctx.year.quarters().iter().map(|quarter| {
        let header = Header::new(&ctx.year, &ctx.anchors, quarter.name())
            .for_node(quarter)
            .selecting(Selection::quarter(quarter));
        Sheet::new(header, QuarterlyContent::new(ctx, quarter))
    });
    buffer.write_pages(ctx.compositor().compose(sheets)?);
    Ok(())
}
