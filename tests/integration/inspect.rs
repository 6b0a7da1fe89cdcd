use codex2json::test_utils::{EntryFixture, TestEnvironment};
use predicates::prelude::*;

use crate::common::codex2json_command;

/// Inspect prints the extracted entry as JSON
#[test]
fn test_inspect_entry() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_entry("aster", &EntryFixture::aster()).unwrap();

    let assert = codex2json_command(env.root()).arg("inspect").arg(&path).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["Metadata"]["tags"], "flower, perennial");
    assert_eq!(value["Content"], "Asters bloom late in the season. They attract pollinators.");
}

/// Documents without metadata get a note on stderr
#[test]
fn test_inspect_without_metadata() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_entry("loose", &EntryFixture::without_metadata()).unwrap();

    codex2json_command(env.root())
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("left out of the codex"));
}

/// Files with another name can be inspected but are flagged
#[test]
fn test_inspect_other_file_name() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_file("notes.md", &EntryFixture::simple("N", "body").text).unwrap();

    codex2json_command(env.root())
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("not picked up by generate"));
}

/// A missing file is a read failure
#[test]
fn test_inspect_missing_file() {
    let env = TestEnvironment::new().unwrap();

    codex2json_command(env.root())
        .arg("inspect")
        .arg(env.source_dir().join("missing/entry.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
