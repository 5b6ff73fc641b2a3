use crate::anchors::{self, Anchors};
use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::error::SectionError;
use crate::header::{Header, Selection};
use crate::page::Sheet;
use crate::sections::SectionContext;
use crate::tex;
use plannergen_calendar::{CalendarNode, NodeId, Week, Year};
use plannergen_types::Layout;
use std::fmt;

/// Lines per day: the day label plus four writing lines.
const DAY_LINES: usize = 5;

pub struct WeeklyContent<'a> {
    year: &'a Year,
    week: &'a Week,
    anchors: &'a Anchors,
}

impl<'a> WeeklyContent<'a> {
    pub fn new(ctx: &'a SectionContext, week: &'a Week) -> Self {
        Self {
            year: &ctx.year,
            week,
            anchors: &ctx.anchors,
        }
    }
}

impl Block for WeeklyContent<'_> {
    fn node(&self) -> NodeId {
        self.week.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        layout.lines_height(self.week.days().len() * DAY_LINES)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let mut tex = tex::hypertarget(&anchors::target(self.week));
        tex.push('\n');
        for day in self.week.days() {
            let label = format!("\\textbf{{{}}}", tex::escape(&day.label()));
            let label = tex::maybe_link(self.anchors.day(self.year, day).as_ref(), &label);
            tex.push_str(&tex::labelled_line(&label));
            tex.push_str(&tex::ruled_lines(DAY_LINES - 1));
        }
        Ok(tex)
    }
}

pub(crate) fn build(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let sheets = ctx.year.in_weeks().iter().map(|week| {
        let header = Header::new(&ctx.year, &ctx.anchors, week.name())
            .for_node(week)
            .selecting(Selection::week(week));
        Sheet::new(header, WeeklyContent::new(ctx, week))
    });
    buffer.write_pages(ctx.compositor().compose(sheets)?);
    Ok(())
}
