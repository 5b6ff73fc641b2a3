use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::error::SectionError;
use crate::page::Sheet;
use crate::sections::SectionContext;
use plannergen_calendar::{CalendarNode, NodeId, Year};
use plannergen_types::Layout;
use std::fmt::{self, Write};

const TITLE_LINES: usize = 8;

/// The cover page: the year, large, without navigation.
pub struct TitleContent<'a> {
    year: &'a Year,
}

impl<'a> TitleContent<'a> {
    pub fn new(year: &'a Year) -> Self {
        Self { year }
    }
}

impl Block for TitleContent<'_> {
    fn node(&self) -> NodeId {
        self.year.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        layout.lines_height(TITLE_LINES)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let mut tex = String::new();
        writeln!(tex, "\\hspace{{0pt}}\\vfil")?;
        writeln!(tex, "\\hfill\\resizebox{{.7\\linewidth}}{{!}}{{{}}}%", self.year.number())?;
        Ok(tex)
    }
}

pub(crate) fn build(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let sheet = Sheet::bare(TitleContent::new(&ctx.year));
    buffer.write_pages(ctx.compositor().compose([sheet])?);
    Ok(())
}
