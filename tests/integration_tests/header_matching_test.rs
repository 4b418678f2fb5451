// tests/integration_tests/header_matching_test.rs
use anyhow::Result;
use verify_boilerplate::{LineMap, has_valid_header};

fn refs(entries: &[(&str, &[&str])]) -> LineMap {
    entries
        .iter()
        .map(|(key, lines)| {
            (
                (*key).to_owned(),
                lines.iter().map(|l| (*l).to_owned()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_exact_leading_lines_pass() -> Result<()> {
    let references = refs(&[("py", &["# Copyright 2020", "# Licensed..."])]);
    let preambles = LineMap::new();

    assert!(has_valid_header(
        "# Copyright 2020\n# Licensed...\n",
        "py",
        &references,
        &preambles
    )?);
    assert!(has_valid_header(
        "# Copyright 2020\n# Licensed...\nimport sys\n",
        "py",
        &references,
        &preambles
    )?);
    Ok(())
}

#[test]
fn test_whitespace_difference_fails() -> Result<()> {
    let references = refs(&[("py", &["# Copyright 2020", "# Licensed..."])]);
    let preambles = LineMap::new();

    assert!(!has_valid_header(
        "# Copyright 2020\n# Licensed... \n",
        "py",
        &references,
        &preambles
    )?);
    assert!(!has_valid_header(
        " # Copyright 2020\n# Licensed...\n",
        "py",
        &references,
        &preambles
    )?);
    Ok(())
}

#[test]
fn test_preamble_then_blank_line_then_header() -> Result<()> {
    let references = refs(&[("sh", &["# Copyright 2020"])]);
    let preambles = refs(&[("sh", &["#!/usr/bin/env bash"])]);

    assert!(has_valid_header(
        "#!/usr/bin/env bash\n\n# Copyright 2020\n",
        "sh",
        &references,
        &preambles
    )?);
    Ok(())
}

#[test]
fn test_file_shorter_than_reference_fails() -> Result<()> {
    let references = refs(&[("py", &["# Copyright 2020", "# Licensed..."])]);
    let preambles = LineMap::new();

    assert!(!has_valid_header("# Copyright 2020", "py", &references, &preambles)?);
    Ok(())
}

#[test]
fn test_any_differing_reference_line_fails() -> Result<()> {
    let reference: &[&str] = &["# Copyright 2020", "#", "# Licensed..."];
    let references = refs(&[("py", reference)]);
    let preambles = LineMap::new();

    for idx in 0..reference.len() {
        let mut lines: Vec<String> = reference.iter().map(|l| (*l).to_owned()).collect();
        if let Some(line) = lines.get_mut(idx) {
            line.push('x');
        }
        let contents = format!("{}\n", lines.join("\n"));
        assert!(
            !has_valid_header(&contents, "py", &references, &preambles)?,
            "Changing line {idx} should fail"
        );
    }
    Ok(())
}

#[test]
fn test_preamble_after_first_line_is_not_stripped() -> Result<()> {
    let references = refs(&[("sh", &["# Copyright 2020"])]);
    let preambles = refs(&[("sh", &["#!/usr/bin/env bash"])]);

    assert!(!has_valid_header(
        "\n#!/usr/bin/env bash\n# Copyright 2020\n",
        "sh",
        &references,
        &preambles
    )?);
    Ok(())
}

#[test]
fn test_crlf_files_compare_without_line_endings() -> Result<()> {
    let references = refs(&[("py", &["# Copyright 2020", "# Licensed..."])]);
    let preambles = LineMap::new();

    assert!(has_valid_header(
        "# Copyright 2020\r\n# Licensed...\r\n",
        "py",
        &references,
        &preambles
    )?);
    Ok(())
}
