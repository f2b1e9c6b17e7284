//! End-to-end runs of the filter loop against the real KaTeX renderer.

use std::io::Cursor;

use rigo::{config::RenderSettings, filter, render::KatexRenderer};

fn run_filter(settings: &RenderSettings, input: &str) -> Vec<String> {
    let renderer = KatexRenderer::new(settings);
    let mut output = Vec::new();
    filter::run(Cursor::new(input), &mut output, &renderer).expect("filter run");
    String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn renders_and_tags_a_mixed_stream() {
    let records = run_filter(&RenderSettings::default(), "x^2\n\\badcmd{}\n");

    assert_eq!(records.len(), 2);
    assert!(records[0].starts_with('1'));
    assert!(records[0].contains("katex"));
    assert_eq!(records[1], "0\\badcmd{}");
}

#[test]
fn malformed_expression_falls_back_to_the_source_text() {
    let records = run_filter(&RenderSettings::default(), "\\frac{1}{0}}\n");
    assert_eq!(records, vec!["0\\frac{1}{0}}"]);
}

#[test]
fn records_stay_on_one_physical_line() {
    let records = run_filter(
        &RenderSettings::default(),
        "\\begin{aligned}a&=b\\\\c&=d\\end{aligned}\nx^2\n",
    );

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(!record.contains('\n'));
        assert!(!record.contains('\r'));
    }
}

#[test]
fn display_mode_is_passed_through_to_katex() {
    let settings = RenderSettings {
        display_mode: true,
        ..Default::default()
    };
    let records = run_filter(&settings, "x^2\n");

    assert!(records[0].starts_with('1'));
    assert!(records[0].contains("katex-display"));
}

#[test]
fn empty_line_still_produces_a_record() {
    let records = run_filter(&RenderSettings::default(), "\n");

    assert_eq!(records.len(), 1);
    assert!(records[0].starts_with('1'));
}
