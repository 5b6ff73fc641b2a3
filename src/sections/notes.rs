//! Writing pages: the to-do list, the numbered notes and one notes page per
//! day.

use crate::anchors::{self, Anchors};
use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::error::SectionError;
use crate::header::{Header, Reference, Selection};
use crate::page::Sheet;
use crate::sections::SectionContext;
use crate::tex;
use plannergen_calendar::{CalendarNode, Day, NodeId, Year};
use plannergen_types::{AnchorId, Layout};
use std::fmt::{self, Write};

/// Heading line followed by `lines` ruled lines, under a page target.
fn ruled_page(target: &AnchorId, heading: &str, lines: usize) -> Result<String, fmt::Error> {
    let mut tex = tex::hypertarget(target);
    tex.push('\n');
    writeln!(tex, "\\textbf{{{heading}}}\\par")?;
    tex.push_str(&tex::ruled_lines(lines));
    Ok(tex)
}

/// A heading line above `lines` writing lines.
fn headed_height(layout: &Layout, lines: usize) -> f32 {
    layout.lines_height(lines.saturating_add(1))
}

pub struct TodoContent<'a> {
    year: &'a Year,
    items: usize,
}

impl<'a> TodoContent<'a> {
    pub fn new(ctx: &'a SectionContext) -> Self {
        Self {
            year: &ctx.year,
            items: ctx.params.todo.items,
        }
    }
}

impl Block for TodoContent<'_> {
    fn node(&self) -> NodeId {
        self.year.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        headed_height(layout, self.items)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let mut tex = tex::hypertarget(&anchors::todo());
        tex.push('\n');
        writeln!(tex, "\\textbf{{To Do}}\\par")?;
        for _ in 0..self.items {
            tex.push_str(&tex::labelled_line("$\\square$"));
        }
        Ok(tex)
    }
}

/// Table of contents of the numbered notes pages.
pub struct NotesIndexContent<'a> {
    year: &'a Year,
    pages: usize,
}

impl<'a> NotesIndexContent<'a> {
    pub fn new(ctx: &'a SectionContext) -> Self {
        Self {
            year: &ctx.year,
            pages: ctx.params.notes.pages,
        }
    }
}

impl Block for NotesIndexContent<'_> {
    fn node(&self) -> NodeId {
        self.year.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        headed_height(layout, self.pages)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let mut tex = tex::hypertarget(&anchors::notes_index());
        tex.push('\n');
        writeln!(tex, "\\textbf{{Notes}}\\par")?;
        for number in 1..=self.pages {
            let link = tex::hyperlink(&anchors::note_page(number), &format!("Note {number}"));
            tex.push_str(&tex::labelled_line(&link));
        }
        Ok(tex)
    }
}

pub struct NotesPageContent<'a> {
    year: &'a Year,
    number: usize,
    lines: usize,
}

impl<'a> NotesPageContent<'a> {
    pub fn new(ctx: &'a SectionContext, number: usize) -> Self {
        Self {
            year: &ctx.year,
            number,
            lines: ctx.params.notes.lines_per_page,
        }
    }
}

impl Block for NotesPageContent<'_> {
    fn node(&self) -> NodeId {
        self.year.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        headed_height(layout, self.lines)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let heading = tex::hyperlink(&anchors::notes_index(), &format!("Note {}", self.number));
        ruled_page(&anchors::note_page(self.number), &heading, self.lines)
    }
}

pub struct DailyNotesContent<'a> {
    year: &'a Year,
    day: Day,
    anchors: &'a Anchors,
    lines: usize,
}

impl<'a> DailyNotesContent<'a> {
    pub fn new(ctx: &'a SectionContext, day: Day) -> Self {
        Self {
            year: &ctx.year,
            day,
            anchors: &ctx.anchors,
            lines: ctx.params.notes.lines_per_page,
        }
    }
}

impl Block for DailyNotesContent<'_> {
    fn node(&self) -> NodeId {
        self.day.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        headed_height(layout, self.lines)
    }

    fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
        let label = format!("Notes for {}", tex::escape(&self.day.label()));
        let heading = tex::maybe_link(self.anchors.day(self.year, &self.day).as_ref(), &label);
        ruled_page(&anchors::daily_notes(&self.day), &heading, self.lines)
    }
}

pub(crate) fn build_todo(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let header = Header::new(&ctx.year, &ctx.anchors, "To Do").self_reference(Reference::ToDo);
    let sheet = Sheet::new(header, TodoContent::new(ctx));
    buffer.write_pages(ctx.compositor().compose([sheet])?);
    Ok(())
}

pub(crate) fn build_notes(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let header = |label: String| {
        Header::new(&ctx.year, &ctx.anchors, label).self_reference(Reference::Notes)
    };
    let index = Sheet::new(header("Notes".to_string()), NotesIndexContent::new(ctx));
    let pages = (1..=ctx.params.notes.pages)
        .map(|number| Sheet::new(header(format!("Note {number}")), NotesPageContent::new(ctx, number)));
    buffer.write_pages(ctx.compositor().compose(std::iter::once(index).chain(pages))?);
    Ok(())
}

pub(crate) fn build_daily_notes(
    ctx: &SectionContext,
    buffer: &mut SectionBuffer,
) -> Result<(), SectionError> {
    let sheets = ctx.year.days().map(|day| {
        let header = Header::new(&ctx.year, &ctx.anchors, format!("Notes {}", day.label()))
            .for_node(&day)
            .selecting(Selection::day(&day));
        Sheet::new(header, DailyNotesContent::new(ctx, day))
    });
    buffer.write_pages(ctx.compositor().compose(sheets)?);
    Ok(())
}
