pub mod fixtures;

use plannergen::{NamedOutput, NamedOutputs, SectionKind};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Splits a section's TeX into its pages, dropping the trailing empty piece.
pub fn pages(output: &NamedOutput) -> Result<Vec<&str>, std::str::Utf8Error> {
    let tex = output.as_str()?;
    Ok(tex
        .split("\\pagebreak{}\n")
        .filter(|page| !page.is_empty())
        .collect())
}

/// Looks up a section that the test expects to be present.
pub fn section(outputs: &NamedOutputs, kind: SectionKind) -> Result<&NamedOutput, String> {
    outputs
        .get(kind)
        .ok_or_else(|| format!("section '{kind}' missing from output"))
}

// ============================================================================
// Assertion Macros
// ============================================================================

/// Assert the number of pages in a section output
#[macro_export]
macro_rules! assert_page_count {
    ($output:expr, $count:expr) => {
        assert_eq!(
            $output.page_count(),
            $count,
            "Expected {} pages in '{}', got {}",
            $count,
            $output.name(),
            $output.page_count()
        );
    };
}

/// Assert that a section output contains specific TeX
#[macro_export]
macro_rules! assert_tex_contains {
    ($output:expr, $text:expr) => {
        let tex = $output.as_str()?;
        assert!(
            tex.contains($text),
            "'{}' should contain '{}'",
            $output.name(),
            $text
        );
    };
}

/// Assert that a section output does NOT contain specific TeX
#[macro_export]
macro_rules! assert_tex_not_contains {
    ($output:expr, $text:expr) => {
        let tex = $output.as_str()?;
        assert!(
            !tex.contains($text),
            "'{}' should NOT contain '{}'",
            $output.name(),
            $text
        );
    };
}
