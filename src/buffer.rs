//! Per-section byte buffers and the ordered output handed to the TeX compiler.

use crate::document;
use crate::error::PlannerError;
use crate::page::Page;
use crate::sections::SectionKind;
use log::info;
use plannergen_types::Layout;
use std::fs;
use std::path::{Path, PathBuf};

/// Append-only buffer owned by one running section builder.
#[derive(Debug)]
pub struct SectionBuffer {
    section: SectionKind,
    data: Vec<u8>,
    pages: usize,
}

impl SectionBuffer {
    pub fn new(section: SectionKind) -> Self {
        Self {
            section,
            data: Vec::new(),
            pages: 0,
        }
    }

    pub fn write_page(&mut self, page: Page) {
        self.data.extend_from_slice(page.as_str().as_bytes());
        self.pages += 1;
    }

    pub fn write_pages(&mut self, pages: impl IntoIterator<Item = Page>) {
        for page in pages {
            self.write_page(page);
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Ends construction. The result cannot be modified.
    pub fn freeze(self) -> NamedOutput {
        NamedOutput {
            name: self.section,
            data: self.data,
            pages: self.pages,
        }
    }
}

/// A finished section: its name and the TeX bytes of its pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedOutput {
    name: SectionKind,
    data: Vec<u8>,
    pages: usize,
}

impl NamedOutput {
    pub fn name(&self) -> SectionKind {
        self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The buffer as text. Pages are built from Rust strings, so this only
    /// fails if the invariant is broken.
    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.data)
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn file_name(&self) -> String {
        format!("{}.tex", self.name)
    }
}

/// Section outputs in the configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedOutputs(Vec<NamedOutput>);

impl NamedOutputs {
    pub fn new(outputs: Vec<NamedOutput>) -> Self {
        Self(outputs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedOutput> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<SectionKind> {
        self.0.iter().map(NamedOutput::name).collect()
    }

    pub fn get(&self, name: SectionKind) -> Option<&NamedOutput> {
        self.0.iter().find(|output| output.name == name)
    }

    pub fn page_count(&self) -> usize {
        self.0.iter().map(NamedOutput::page_count).sum()
    }

    /// All sections joined in order, as the compiler would read them.
    pub fn concat(&self) -> Vec<u8> {
        self.0.iter().flat_map(|output| output.data.iter().copied()).collect()
    }

    /// Writes one `<section>.tex` per output plus a root `document.tex` that
    /// includes them in order. Returns the path of the root document.
    pub fn write_tex_to<P: AsRef<Path>>(&self, dir: P, layout: &Layout) -> Result<PathBuf, PlannerError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        for output in &self.0 {
            fs::write(dir.join(output.file_name()), &output.data)?;
        }

        let root = dir.join(document::ROOT_FILE);
        fs::write(&root, document::root_document(layout, &self.names()))?;
        info!("Wrote {} sections to {}", self.0.len(), dir.display());
        Ok(root)
    }
}

impl IntoIterator for NamedOutputs {
    type Item = NamedOutput;
    type IntoIter = std::vec::IntoIter<NamedOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::devices::Device;
    use crate::page::{PageCompositor, Sheet};
    use plannergen_calendar::NodeId;
    use std::fmt;

    struct Text(&'static str);

    impl Block for Text {
        fn node(&self) -> NodeId {
            NodeId::Year(2024)
        }

        fn height(&self, _layout: &Layout) -> f32 {
            1.0
        }

        fn render(&self, _layout: &Layout) -> Result<String, fmt::Error> {
            Ok(self.0.to_string())
        }
    }

    fn pages(texts: &[&'static str]) -> Vec<Page> {
        let layout = Device::SupernoteA5X.layout();
        PageCompositor::new(&layout)
            .compose(texts.iter().map(|t| Sheet::bare(Text(*t))))
            .unwrap()
    }

    #[test]
    fn buffer_appends_pages_in_order() {
        let mut buffer = SectionBuffer::new(SectionKind::Notes);
        buffer.write_pages(pages(&["one", "two"]));
        let output = buffer.freeze();
        assert_eq!(output.name(), SectionKind::Notes);
        assert_eq!(output.page_count(), 2);
        assert_eq!(
            output.as_str().unwrap(),
            "one\n\n\\pagebreak{}\ntwo\n\n\\pagebreak{}\n"
        );
    }

    #[test]
    fn outputs_keep_their_order() {
        let mut first = SectionBuffer::new(SectionKind::Todo);
        first.write_pages(pages(&["TODO-PAGE"]));
        let mut second = SectionBuffer::new(SectionKind::Title);
        second.write_pages(pages(&["TITLE-PAGE"]));
        let outputs = NamedOutputs::new(vec![first.freeze(), second.freeze()]);

        assert_eq!(outputs.names(), vec![SectionKind::Todo, SectionKind::Title]);
        assert_eq!(outputs.page_count(), 2);
        assert!(outputs.get(SectionKind::Title).is_some());
        assert!(outputs.get(SectionKind::Dailies).is_none());
        let joined = String::from_utf8(outputs.concat()).unwrap();
        assert!(joined.find("TODO-PAGE").unwrap() < joined.find("TITLE-PAGE").unwrap());
    }

    #[test]
    fn empty_buffer_freezes_to_empty_output() {
        let output = SectionBuffer::new(SectionKind::Annual).freeze();
        assert!(output.data().is_empty());
        assert_eq!(output.file_name(), "annual.tex");
    }
}
