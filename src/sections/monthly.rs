use crate::anchors::{self, Anchors};
use crate::block::Block;
use crate::buffer::SectionBuffer;
use crate::error::SectionError;
use crate::header::{Header, Selection};
use crate::page::Sheet;
use crate::sections::SectionContext;
use crate::sections::grid::weekdays;
use crate::tex::{self, Cell};
use plannergen_calendar::{CalendarNode, Month, NodeId, Year};
use plannergen_types::Layout;
use std::fmt::{self, Write};

/// Body lines per week row of the month grid.
const ROW_LINES: usize = 5;

/// Full-page month grid with a writing area per day.
pub struct MonthlyContent<'a> {
    year: &'a Year,
    month: &'a Month,
    anchors: &'a Anchors,
}

impl<'a> MonthlyContent<'a> {
    pub fn new(ctx: &'a SectionContext, month: &'a Month) -> Self {
        Self {
            year: &ctx.year,
            month,
            anchors: &ctx.anchors,
        }
    }
}

impl Block for MonthlyContent<'_> {
    fn node(&self) -> NodeId {
        self.month.id()
    }

    fn height(&self, layout: &Layout) -> f32 {
        layout.lines_height(1 + self.month.weeks().len() * ROW_LINES)
    }

    fn render(&self, layout: &Layout) -> Result<String, fmt::Error> {
        let row_height = layout.lines_height(ROW_LINES);
        let mut tex = tex::hypertarget(&anchors::target(self.month));
        tex.push('\n');
        writeln!(tex, "\\begin{{tabularx}}{{\\linewidth}}{{|c|*{{7}}{{X|}}}}\\hline")?;

        let mut head = vec![Cell::new("")];
        head.extend(weekdays(self.year.first_weekday()).map(|d| Cell::new(d.to_string())));
        writeln!(tex, "{} \\\\ \\hline", tex::row(&head))?;

        for week in self.month.weeks() {
            let number = tex::maybe_link(self.anchors.week(week).as_ref(), &week.number().to_string());
            let mut cells = vec![format!("\\rule{{0pt}}{{{row_height}mm}}{number}")];
            cells.extend(week.days().iter().map(|day| {
                if self.month.contains(day.date()) {
                    Cell::new(day.day().to_string())
                        .link(self.anchors.day(self.year, day))
                        .render()
                } else {
                    String::new()
                }
            }));
            writeln!(tex, "{} \\\\ \\hline", cells.join(" & "))?;
        }
        writeln!(tex, "\\end{{tabularx}}")?;
        Ok(tex)
    }
}

pub(crate) fn build(ctx: &SectionContext, buffer: &mut SectionBuffer) -> Result<(), SectionError> {
    let sheets = ctx.year.months().map(|month| {
        let header = Header::new(&ctx.year, &ctx.anchors, month.name())
            .for_node(month)
            .selecting(Selection::month(month));
        Sheet::new(header, MonthlyContent::new(ctx, month))
    });
    buffer.write_pages(ctx.compositor().compose(sheets)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::sections::SectionKind;
    use crate::sections::test_support::{build, context};

    #[test]
    fn twelve_months_with_day_links() {
        let ctx = context(2024);
        let output = build(&ctx, SectionKind::Monthlies).unwrap();
        let tex = output.as_str().unwrap();
        assert_eq!(output.page_count(), 12);
        assert!(tex.contains("\\hypertarget{2024-02}{}"));
        assert!(tex.contains("\\hyperlink{2024-02-29}{29}"));
        assert!(tex.contains("\\textbf{December}"));
    }

    #[test]
    fn weekday_row_follows_first_weekday() {
        let mut ctx = context(2024);
        ctx.year = plannergen_calendar::Year::new(2024, chrono::Weekday::Sun).unwrap();
        let output = build(&ctx, SectionKind::Monthlies).unwrap();
        assert!(output.as_str().unwrap().contains(" & Sun & Mon & Tue"));
    }
}
