//! Root TeX document that stitches the section files together.

use crate::sections::SectionKind;
use plannergen_types::Layout;

pub const ROOT_FILE: &str = "document.tex";

/// Preamble derived from the layout: page geometry, debug aids and the
/// macros the section bodies rely on.
pub fn preamble(layout: &Layout) -> String {
    let paper = &layout.paper;
    let margin = &layout.margin;
    let typography = &layout.typography;

    let mut tex = String::new();
    tex.push_str("\\documentclass[9pt]{extarticle}\n");
    tex.push_str(&format!(
        "\\usepackage[paperwidth={}mm, paperheight={}mm, top={}mm, right={}mm, bottom={}mm, left={}mm, marginparwidth={}mm, marginparsep={}mm]{{geometry}}\n",
        paper.width,
        paper.height,
        margin.top,
        margin.right,
        margin.bottom,
        margin.left,
        typography.margin_par_width,
        typography.margin_par_sep,
    ));
    for package in ["[table]{xcolor}", "{tabularx}", "{graphicx}", "{marginnote}", "{hyperref}"] {
        tex.push_str(&format!("\\usepackage{package}\n"));
    }
    if layout.debug.show_frames {
        tex.push_str("\\usepackage{showframe}\n");
    }
    if layout.debug.show_links {
        tex.push_str("\\hypersetup{pdfborder={0 0 1}}\n");
    } else {
        tex.push_str("\\hypersetup{hidelinks}\n");
    }
    tex.push_str("\\setlength{\\parindent}{0pt}\n");
    tex.push_str(&format!(
        "\\setlength{{\\columnsep}}{{{}mm}}\n",
        layout.sizes.two_columns_separator
    ));
    tex.push_str(&format!(
        "\\newcommand{{\\plannerlabelline}}[1]{{\\par\\noindent\\parbox[b][{}mm][b]{{\\linewidth}}{{#1\\hrule}}}}\n",
        typography.line_height
    ));
    tex.push_str("\\newcommand{\\plannerline}{\\plannerlabelline{}}\n");
    tex
}

/// The full root document, including sections in the given order.
pub fn root_document(layout: &Layout, sections: &[SectionKind]) -> String {
    let mut tex = preamble(layout);
    tex.push_str("\\begin{document}\n");
    for section in sections {
        tex.push_str(&format!("\\input{{{section}}}\n"));
    }
    tex.push_str("\\end{document}\n");
    tex
}
