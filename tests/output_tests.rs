mod common;

use common::TestResult;
use common::fixtures::*;
use std::fs;

#[test]
fn test_write_tex_to_directory() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let planner = only(2024, CALENDAR_SECTIONS).build()?;
    let outputs = planner.build_data()?;
    let dir = tempfile::tempdir()?;
    let root = outputs.write_tex_to(dir.path(), planner.layout())?;

    assert_eq!(root, dir.path().join("document.tex"));
    for name in CALENDAR_SECTIONS {
        let path = dir.path().join(format!("{name}.tex"));
        assert!(path.exists(), "{} was not written", path.display());
    }
    let annual = fs::read_to_string(dir.path().join("annual.tex"))?;
    assert!(annual.ends_with("\\pagebreak{}\n"));

    let document = fs::read_to_string(&root)?;
    assert!(document.contains("paperwidth=156mm, paperheight=230mm"));
    assert!(document.contains("\\usepackage{showframe}"));
    let inputs: Vec<&str> = document
        .lines()
        .filter_map(|line| line.strip_prefix("\\input{"))
        .filter_map(|rest| rest.strip_suffix('}'))
        .collect();
    assert_eq!(inputs, CALENDAR_SECTIONS);
    Ok(())
}

#[test]
fn test_write_tex_creates_missing_directories() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let planner = only(2024, &["title"]).build()?;
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("build").join("tex");
    planner.build_data()?.write_tex_to(&nested, planner.layout())?;

    let title = fs::read_to_string(nested.join("title.tex"))?;
    assert!(title.contains("\\resizebox"));
    Ok(())
}
