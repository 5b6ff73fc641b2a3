//! Navigation header shown at the top of every calendar page.
//!
//! The header is a one-row table (year, selected label, reference cells) plus
//! a rotated margin note listing the quarters and months of the year with the
//! current selection highlighted.

use crate::anchors::Anchors;
use crate::block::Block;
use crate::tex::{self, Cell};
use plannergen_calendar::{CalendarNode, Day, Month, NodeId, Quarter, Week, Year};
use plannergen_types::Layout;
use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// A sibling highlighted in the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Highlight {
    Quarter(u8),
    Month(u32),
}

/// The set of quarters and months marked as current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<Highlight>);

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn quarter(quarter: &Quarter) -> Self {
        Self::none().with(Highlight::Quarter(quarter.number()))
    }

    pub fn month(month: &Month) -> Self {
        Self::none().with(Highlight::Month(month.number()))
    }

    /// Both months a week touches, or just one when it stays inside a month.
    pub fn week(week: &Week) -> Self {
        Self::none()
            .with(Highlight::Month(week.head_month()))
            .with(Highlight::Month(week.tail_month()))
    }

    pub fn day(day: &Day) -> Self {
        Self::none().with(Highlight::Month(day.month()))
    }

    pub fn with(mut self, highlight: Highlight) -> Self {
        self.0.insert(highlight);
        self
    }

    pub fn contains(&self, highlight: Highlight) -> bool {
        self.0.contains(&highlight)
    }

    pub fn months(&self) -> Vec<u32> {
        self.0
            .iter()
            .filter_map(|highlight| match highlight {
                Highlight::Month(month) => Some(*month),
                Highlight::Quarter(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Right-hand cells of the header, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Calendar,
    ToDo,
    Notes,
}

impl Reference {
    pub const ALL: [Reference; 3] = [Reference::Calendar, Reference::ToDo, Reference::Notes];

    pub fn label(self) -> &'static str {
        match self {
            Reference::Calendar => "Calendar",
            Reference::ToDo => "To Do",
            Reference::Notes => "Notes",
        }
    }
}

pub struct Header<'a> {
    year: &'a Year,
    anchors: &'a Anchors,
    node: NodeId,
    label: String,
    selection: Selection,
    self_reference: Option<Reference>,
}

impl<'a> Header<'a> {
    pub fn new(year: &'a Year, anchors: &'a Anchors, label: impl Into<String>) -> Self {
        Self {
            year,
            anchors,
            node: year.id(),
            label: label.into(),
            selection: Selection::none(),
            self_reference: None,
        }
    }

    /// The node whose page this header sits on.
    pub fn for_node(mut self, node: &impl CalendarNode) -> Self {
        self.node = node.id();
        self
    }

    pub fn selecting(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Marks the reference cell pointing at the page this header is on.
    pub fn self_reference(mut self, reference: Reference) -> Self {
        self.self_reference = Some(reference);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_reference(&self) -> Option<Reference> {
        self.self_reference
    }

    fn reference_cells(&self) -> Vec<Cell> {
        Reference::ALL
            .iter()
            .map(|&reference| {
                let link = match reference {
                    Reference::Calendar => self.anchors.year(self.year),
                    Reference::ToDo => self.anchors.todo(),
                    Reference::Notes => self.anchors.notes(),
                };
                Cell::new(reference.label())
                    .link(link)
                    .selected(self.self_reference == Some(reference))
            })
            .collect()
    }

    fn quarter_cells(&self) -> Vec<Cell> {
        self.year
            .quarters()
            .iter()
            .map(|quarter| {
                Cell::new(quarter.name())
                    .link(self.anchors.quarter(quarter))
                    .selected(self.selection.contains(Highlight::Quarter(quarter.number())))
            })
            .collect()
    }

    fn month_cells(&self) -> Vec<Cell> {
        self.year
            .months()
            .map(|month| {
                Cell::new(month.short_name())
                    .link(self.anchors.month(month))
                    .selected(self.selection.contains(Highlight::Month(month.number())))
            })
            .collect()
    }

    fn write_margin_note(&self, tex: &mut String, layout: &Layout) -> fmt::Result {
        let typography = &layout.typography;
        writeln!(tex, "\\marginnote{{\\rotatebox[origin=tr]{{90}}{{%")?;
        writeln!(
            tex,
            "\\renewcommand{{\\arraystretch}}{{{}}}%",
            typography.margin_notes_array_stretch
        )?;
        writeln!(
            tex,
            "\\begin{{tabularx}}{{{}mm}}{{|*{{4}}{{X|}}}}\\hline",
            typography.margin_notes_quarters_width
        )?;
        writeln!(tex, "{} \\\\ \\hline", tex::row(&self.quarter_cells()))?;
        writeln!(tex, "\\end{{tabularx}}\\quad%")?;
        writeln!(
            tex,
            "\\begin{{tabularx}}{{{}mm}}{{|*{{12}}{{X|}}}}\\hline",
            typography.margin_notes_months_width
        )?;
        writeln!(tex, "{} \\\\ \\hline", tex::row(&self.month_cells()))?;
        writeln!(tex, "\\end{{tabularx}}}}}}%")
    }
}

impl Block for Header<'_> {
    fn node(&self) -> NodeId {
        self.node
    }

    fn height(&self, layout: &Layout) -> f32 {
        layout.lines_height(1) * layout.typography.header_array_stretch
    }

    fn render(&self, layout: &Layout) -> Result<String, fmt::Error> {
        let mut tex = String::new();
        writeln!(
            tex,
            "{{\\renewcommand{{\\arraystretch}}{{{}}}%",
            layout.typography.header_array_stretch
        )?;
        writeln!(tex, "\\begin{{tabularx}}{{\\linewidth}}{{@{{}}l|l|X|r|r|r@{{}}}}")?;

        let year_label = format!("\\textbf{{{}}}", self.year.number());
        let year_cell = tex::maybe_link(self.anchors.year(self.year).as_ref(), &year_label);
        let label = format!("\\textbf{{{}}}", tex::escape(&self.label));
        writeln!(
            tex,
            "{year_cell} & {label} & & {} \\\\ \\hline",
            tex::row(&self.reference_cells())
        )?;
        writeln!(tex, "\\end{{tabularx}}}}%")?;
        self.write_margin_note(&mut tex, layout)?;
        Ok(tex)
    }
}
