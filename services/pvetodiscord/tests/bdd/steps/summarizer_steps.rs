//! BDD step definitions for the summarizer feature

use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use pvetodiscord::summarizer::{format_row, summarize};

use crate::world::RelayWorld;

fn summary(world: &RelayWorld) -> &str {
    world.summary.as_deref().expect("report not summarized")
}

fn data_rows(summary: &str) -> Vec<&str> {
    summary
        .split('\n')
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[given("a backup report:")]
fn backup_report(world: &mut RelayWorld, step: &Step) {
    world.report = step.docstring.clone().expect("report docstring missing");
}

#[given("an empty backup report")]
fn empty_backup_report(world: &mut RelayWorld) {
    world.report = String::new();
}

#[when("the report is summarized")]
fn summarize_report(world: &mut RelayWorld) {
    world.summary = Some(summarize(&world.report));
}

#[then(expr = "summary row {int} should be {string}, {string}, {string}, {string}")]
fn summary_row_is(
    world: &mut RelayWorld,
    index: usize,
    vmid: String,
    name: String,
    status: String,
    time: String,
) {
    let rows = data_rows(summary(world));
    let expected = format_row(&vmid, &name, &status, &time);
    assert_eq!(rows.get(index - 1), Some(&expected.as_str()), "{rows:?}");
}

#[then(expr = "the summary should have {int} data row(s)")]
fn summary_row_count(world: &mut RelayWorld, count: usize) {
    assert_eq!(data_rows(summary(world)).len(), count);
}

#[then(expr = "the summary should not contain {string}")]
fn summary_lacks(world: &mut RelayWorld, text: String) {
    let summary = summary(world);
    assert!(
        !summary.contains(&text),
        "Expected summary not to contain '{}':\n{}",
        text,
        summary
    );
}

#[then(expr = "the summary should end with {string}")]
fn summary_ends_with(world: &mut RelayWorld, expected: String) {
    let expected = expected.replace("\\n", "\n");
    let summary = summary(world);
    assert!(
        summary.ends_with(&expected),
        "Expected summary to end with {:?}:\n{:?}",
        expected,
        summary
    );
}

#[then("the summary should end with exactly one blank line")]
fn summary_ends_with_blank_line(world: &mut RelayWorld) {
    let summary = summary(world);
    assert!(summary.ends_with('\n'), "{summary:?}");
    assert!(!summary.ends_with("\n\n"), "{summary:?}");
}

#[then("summarizing it again should give the same text")]
fn summary_is_repeatable(world: &mut RelayWorld) {
    assert_eq!(summarize(&world.report), summary(world));
}
