//! Page compositor: one (header, content) pair per physical page.
//!
//! Content is never reflowed. A pair that does not fit the device page is an
//! [`SectionError::Overflow`] rather than a truncated page.

use crate::block::Block;
use crate::error::SectionError;
use crate::header::Header;
use crate::tex::PAGE_BREAK;
use log::trace;
use plannergen_types::Layout;

/// Tolerance for floating point sums of block heights.
const HEIGHT_EPSILON: f32 = 0.01;

/// One rendered page, terminated by the page-break marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page(String);

impl Page {
    fn new(body: &str) -> Self {
        Self(format!("{body}\n\n{PAGE_BREAK}\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// The blocks that make up one page.
pub struct Sheet<'a> {
    header: Option<Header<'a>>,
    content: Box<dyn Block + 'a>,
}

impl<'a> Sheet<'a> {
    pub fn new(header: Header<'a>, content: impl Block + 'a) -> Self {
        Self {
            header: Some(header),
            content: Box::new(content),
        }
    }

    /// A page without navigation header.
    pub fn bare(content: impl Block + 'a) -> Self {
        Self {
            header: None,
            content: Box::new(content),
        }
    }
}

pub struct PageCompositor<'l> {
    layout: &'l Layout,
}

impl<'l> PageCompositor<'l> {
    pub fn new(layout: &'l Layout) -> Self {
        Self { layout }
    }

    /// Renders every sheet into exactly one page, preserving order.
    pub fn compose<'a, I>(&self, sheets: I) -> Result<Vec<Page>, SectionError>
    where
        I: IntoIterator<Item = Sheet<'a>>,
    {
        sheets
            .into_iter()
            .map(|sheet| self.compose_sheet(&sheet))
            .collect()
    }

    fn compose_sheet(&self, sheet: &Sheet<'_>) -> Result<Page, SectionError> {
        let node = sheet.content.node();
        let format_error = |source: std::fmt::Error| SectionError::Format { node, source };

        let header_height = sheet
            .header
            .as_ref()
            .map_or(0.0, |header| header.height(self.layout));
        let required = header_height + sheet.content.height(self.layout);

        let available = self.layout.content_height();
        trace!("{node}: {required:.2}mm of {available:.2}mm");
        if required > available + HEIGHT_EPSILON {
            return Err(SectionError::Overflow {
                node,
                required,
                available,
            });
        }

        let mut body = String::new();
        if let Some(header) = &sheet.header {
            body.push_str(&header.render(self.layout).map_err(format_error)?);
            body.push('\n');
        }
        body.push_str(&sheet.content.render(self.layout).map_err(format_error)?);

        Ok(Page::new(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::Anchors;
    use crate::devices::Device;
    use plannergen_calendar::{NodeId, Weekday, Year};
    use std::fmt;

    struct Lines {
        node: NodeId,
        text: &'static str,
        lines: usize,
    }

    impl Block for Lines {
        fn node(&self) -> NodeId {
            self.node
        }

        fn height(&self, layout: &Layout) -> f32 {
            layout.lines_height(self.lines)
        }

        fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
            Ok(self.text.to_string())
        }
    }

    fn lines(text: &'static str, lines: usize) -> Lines {
        Lines {
            node: NodeId::Year(2024),
            text,
            lines,
        }
    }

    #[test]
    fn one_page_per_sheet_in_order() {
        let layout = Device::SupernoteA5X.layout();
        let pages = PageCompositor::new(&layout)
            .compose([Sheet::bare(lines("first", 1)), Sheet::bare(lines("second", 1))])
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].as_str(), "first\n\n\\pagebreak{}\n");
        assert!(pages[1].as_str().starts_with("second"));
    }

    #[test]
    fn header_precedes_content() {
        let layout = Device::SupernoteA5X.layout();
        let year = Year::new(2024, Weekday::Mon).unwrap();
        let anchors = Anchors::default();
        let header = Header::new(&year, &anchors, "Q1");
        let pages = PageCompositor::new(&layout)
            .compose([Sheet::new(header, lines("body", 1))])
            .unwrap();
        let page = pages[0].as_str();
        assert!(page.find("tabularx").unwrap() < page.find("body").unwrap());
    }

    #[test]
    fn content_filling_the_page_exactly_fits() {
        let layout = Device::SupernoteA5X.layout();
        let fitting = layout.lines_in(layout.content_height());
        assert!(PageCompositor::new(&layout)
            .compose([Sheet::bare(lines("full", fitting))])
            .is_ok());
    }

    #[test]
    fn oversized_content_is_an_error() {
        let layout = Device::SupernoteA5X.layout();
        let too_many = layout.lines_in(layout.content_height()) + 1;
        let err = PageCompositor::new(&layout)
            .compose([Sheet::bare(lines("long", too_many))])
            .unwrap_err();
        match err {
            SectionError::Overflow {
                node,
                required,
                available,
            } => {
                assert_eq!(node, NodeId::Year(2024));
                assert!(required > available);
                assert_eq!(available, 210.0);
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    /// Claims more height than any page has and fails if asked for TeX.
    struct Unrenderable;

    impl Block for Unrenderable {
        fn node(&self) -> NodeId {
            NodeId::Year(2024)
        }

        fn height(&self, layout: &Layout) -> f32 {
            layout.lines_height(usize::MAX)
        }

        fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
            Err(fmt::Error)
        }
    }

    #[test]
    fn overflow_is_reported_before_rendering() {
        let layout = Device::SupernoteA5X.layout();
        let err = PageCompositor::new(&layout)
            .compose([Sheet::bare(Unrenderable)])
            .unwrap_err();
        assert!(matches!(err, SectionError::Overflow { .. }), "got {err:?}");
    }

    #[test]
    fn empty_input_gives_no_pages() {
        let layout = Device::SupernoteA5X.layout();
        let pages = PageCompositor::new(&layout).compose(Vec::<Sheet>::new()).unwrap();
        assert!(pages.is_empty());
    }
}
