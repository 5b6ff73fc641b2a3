use crate::anchors::{self, Anchors};
use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::config::DailyParams;
use crate::error::SectionError;
use crate::header::{Header, Selection};
use crate::page::Sheet;
use crate::sections::SectionContext;
use crate::tex;
use plannergen_calendar::{CalendarNode, Day, NodeId};
use plannergen_types::Layout;
use std::fmt::{self, Write};

/// Schedule on the left, priorities and notes on the right.
pub struct DailyContent<'a> {
    day: Day,
    params: &'a DailyParams,
    anchors: &'a Anchors,
}

impl<'a> DailyContent<'a> {
    pub fn new(ctx: &'a SectionContext, day: Day) -> Self {
        Self {
            day,
            params: &ctx.params.daily,
            anchors: &ctx.anchors,
        }
    }

    fn schedule_lines(&self) -> usize {
        1 + self.params.schedule_to.saturating_sub(self.params.schedule_from) as usize
    }

    fn notes_column_lines(&self) -> usize {
        self.params
            .priorities
            .saturating_add(self.params.notes_lines)
            .saturating_add(2)
    }

    fn write_schedule(&self, tex: &mut String) -> fmt::Result {
        writeln!(tex, "\\textbf{{Schedule}}\\par")?;
        for hour in self.params.schedule_from..self.params.schedule_to {
            tex.push_str(&tex::labelled_line(&format!("{hour:02}:00")));
        }
        Ok(())
    }

    fn write_notes_column(&self, tex: &mut String) -> fmt::Result {
        writeln!(tex, "\\textbf{{Top priorities}}\\par")?;
        for _ in 0..self.params.priorities {
            tex.push_str(&tex::labelled_line("$\\square$"));
        }
        let notes = tex::maybe_link(self.anchors.daily_notes(&self.day).as_ref(), "Notes");
        writeln!(tex, "\\textbf{{{notes}}}\\par")?;
        tex.push_str(&tex::ruled_lines(self.params.notes_lines));
        Ok(())
    }
}

impl Block for DailyContent<'_> {
    fn node(&self) -> NodeId {
        self.day.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        layout.lines_height(self.schedule_lines().max(self.notes_column_lines()))
    }

    fn render(&self, layout: &Layout) -> Result<String, fmt::Error> {
        let separator = layout.sizes.two_columns_separator;
        let width = (layout.content_width() - separator) / 2.0;

        let mut tex = tex::hypertarget(&anchors::target(&self.day));
        tex.push('\n');
        writeln!(tex, "\\begin{{minipage}}[t]{{{width:.2}mm}}")?;
        self.write_schedule(&mut tex)?;
        writeln!(tex, "\\end{{minipage}}%")?;
        writeln!(tex, "\\hspace{{{separator}mm}}%")?;
        writeln!(tex, "\\begin{{minipage}}[t]{{{width:.2}mm}}")?;
        self.write_notes_column(&mut tex)?;
        writeln!(tex, "\\end{{minipage}}")?;
        Ok(tex)
    }
}

pub(crate) fn build(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let sheets = ctx.year.days().map(|day| {
        let header = Header::new(&ctx.year, &ctx.anchors, day.label())
            .for_node(&day)
            .selecting(Selection::day(&day));
        Sheet::new(header, DailyContent::new(ctx, day))
    });
    buffer.write_pages(ctx.compositor().compose(sheets)?);
    Ok(())
}
