use crate::anchors::{self, Anchors};
use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::error::SectionError;
use crate::header::{Header, Reference};
use crate::page::Sheet;
use crate::sections::SectionContext;
use crate::sections::grid::MiniGrid;
use crate::tex;
use plannergen_calendar::{CalendarNode, NodeId, Year};
use plannergen_types::Layout;
use std::fmt::{self, Write};

/// The year at a glance: one row of three month grids per quarter.
pub struct AnnualContent<'a> {
    year: &'a Year,
    anchors: &'a Anchors,
}

impl<'a> AnnualContent<'a> {
    pub fn new(ctx: &'a SectionContext) -> Self {
        Self {
            year: &ctx.year,
            anchors: &ctx.anchors,
        }
    }
}

impl AnnualContent<'_> {
    /// Quarter name plus the tallest grid of the row, per quarter.
    fn lines(&self) -> usize {
        self.year
            .quarters()
            .iter()
            .map(|quarter| {
                let tallest = quarter
                    .months()
                    .iter()
                    .map(|month| MiniGrid::new(self.year, month, self.anchors).lines())
                    .max()
                    .unwrap_or(0);
                1 + tallest
            })
            .sum()
    }
}

impl Block for AnnualContent<'_> {
    fn node(&self) -> NodeId {
        self.year.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        layout.lines_height(self.lines())
    }

    fn render(&self, layout: &Layout) -> Result<String, fmt::Error> {
        let separator = layout.sizes.three_columns_separator;
        let width = (layout.content_width() - 2.0 * separator) / 3.0;
        let width = format!("{width:.2}mm");

        let mut tex = tex::hypertarget(&anchors::target(self.year));
        tex.push('\n');
        for quarter in self.year.quarters() {
            let name = tex::maybe_link(self.anchors.quarter(quarter).as_ref(), &quarter.name());
            writeln!(tex, "\\noindent\\textbf{{{name}}}\\par")?;

            let grids: Vec<_> = quarter
                .months()
                .iter()
                .map(|month| MiniGrid::new(self.year, month, self.anchors))
                .collect();
            for (i, grid) in grids.iter().enumerate() {
                if i > 0 {
                    writeln!(tex, "\\hspace{{{separator}mm}}%")?;
                }
                writeln!(tex, "\\begin{{minipage}}[t]{{{width}}}")?;
                grid.write(&mut tex, "\\linewidth")?;
                writeln!(tex, "\\end{{minipage}}%")?;
            }
            writeln!(tex, "\\par")?;
        }
        Ok(tex)
    }
}

pub(crate) fn build(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let header = Header::new(&ctx.year, &ctx.anchors, ctx.year.name())
        .for_node(&ctx.year)
        .self_reference(Reference::Calendar);
    let sheet = Sheet::new(header, AnnualContent::new(ctx));
    buffer.write_pages(ctx.compositor().compose([sheet])?);
    Ok(())
}
