//! Small LaTeX building helpers shared by headers and section contents.

use itertools::Itertools;
use plannergen_types::AnchorId;

/// Marker between pages, understood by the downstream TeX compiler.
pub const PAGE_BREAK: &str = "\\pagebreak{}";

/// Escapes characters with a special meaning in LaTeX text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}

pub fn hypertarget(anchor: &AnchorId) -> String {
    format!("\\hypertarget{{{anchor}}}{{}}")
}

/// `text` must already be escaped.
pub fn hyperlink(anchor: &AnchorId, text: &str) -> String {
    format!("\\hyperlink{{{anchor}}}{{{text}}}")
}

/// Links when a target exists, plain text otherwise.
pub fn maybe_link(anchor: Option<&AnchorId>, text: &str) -> String {
    match anchor {
        Some(anchor) => hyperlink(anchor, text),
        None => text.to_string(),
    }
}

/// `n` ruled writing lines, one body line each.
pub fn ruled_lines(n: usize) -> String {
    "\\plannerline\n".repeat(n)
}

/// One ruled line with `label` (already escaped) written on it.
pub fn labelled_line(label: &str) -> String {
    format!("\\plannerlabelline{{{label}}}\n")
}

/// One table cell of a navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    link: Option<AnchorId>,
    selected: bool,
}

impl Cell {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: escape(text.as_ref()),
            link: None,
            selected: false,
        }
    }

    pub fn link(mut self, anchor: Option<AnchorId>) -> Self {
        self.link = anchor;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn render(&self) -> String {
        let text = maybe_link(self.link.as_ref(), &self.text);
        if self.selected {
            format!("\\cellcolor{{black}}\\textcolor{{white}}{{{text}}}")
        } else {
            text
        }
    }
}

/// Renders cells as one tabular row without the trailing `\\`.
pub fn row(cells: &[Cell]) -> String {
    cells.iter().map(Cell::render).join(" & ")
}
