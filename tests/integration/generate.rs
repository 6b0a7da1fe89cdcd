use codex2json::codex::CodexGenerator;
use codex2json::test_utils::{EntryFixture, TestEnvironment};
use predicates::prelude::*;
use serde_json::json;

use crate::common::codex2json_command;

/// Two entries, one empty: only the one with metadata is written
#[test]
fn test_generate_skips_empty_entry() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("aster", &EntryFixture::aster()).unwrap();
    env.write_entry("blank", &EntryFixture::empty()).unwrap();

    codex2json_command(env.root())
        .arg("generate")
        .arg(env.source_dir())
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "JSON generated at: {}\n",
            env.output_path().display()
        )));

    let output = env.read_output().unwrap();
    assert_eq!(
        output,
        json!([{
            "Metadata": {
                "title": "Aster",
                "family": "Asteraceae",
                "tags": "flower, perennial",
                "aliases": "Michaelmas daisy"
            },
            "Content": "Asters bloom late in the season. They attract pollinators."
        }])
    );
    assert!(!env.source_dir().join("codex.json").exists());
}

/// Field order in the output follows the document
#[test]
fn test_generate_preserves_field_order() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("aster", &EntryFixture::aster()).unwrap();

    CodexGenerator::new().process(env.source_dir()).unwrap();

    let raw = std::fs::read_to_string(env.output_path()).unwrap();
    let title = raw.find("\"title\"").unwrap();
    let family = raw.find("\"family\"").unwrap();
    let tags = raw.find("\"tags\"").unwrap();
    let aliases = raw.find("\"aliases\"").unwrap();
    assert!(title < family && family < tags && tags < aliases);
}

/// Running twice on an unchanged tree produces identical bytes
#[test]
fn test_generate_twice_is_byte_identical() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("c", &EntryFixture::simple("C", "third")).unwrap();
    env.write_entry("a", &EntryFixture::simple("A", "first")).unwrap();
    env.write_entry("b/nested", &EntryFixture::simple("B", "second")).unwrap();

    codex2json_command(env.root()).arg("generate").arg(env.source_dir()).assert().success();
    let first = std::fs::read(env.output_path()).unwrap();

    codex2json_command(env.root()).arg("generate").arg(env.source_dir()).assert().success();
    let second = std::fs::read(env.output_path()).unwrap();

    assert_eq!(first, second);

    let output = env.read_output().unwrap();
    let titles: Vec<_> =
        output.as_array().unwrap().iter().map(|e| e["Metadata"]["title"].clone()).collect();
    assert_eq!(titles, vec![json!("A"), json!("B"), json!("C")]);
}

/// Only files named exactly entry.md are collected
#[test]
fn test_generate_ignores_other_files() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("a", &EntryFixture::simple("A", "kept")).unwrap();
    env.write_file("b/Entry.md", &EntryFixture::simple("B", "wrong case").text).unwrap();
    env.write_file("c/notes.md", &EntryFixture::simple("C", "other name").text).unwrap();

    CodexGenerator::new().process(env.source_dir()).unwrap();

    let output = env.read_output().unwrap();
    assert_eq!(output.as_array().unwrap().len(), 1);
    assert_eq!(output[0]["Metadata"]["title"], "A");
}

/// --stdout prints the JSON and leaves the filesystem alone
#[test]
fn test_generate_stdout() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("a", &EntryFixture::simple("A", "body")).unwrap();

    codex2json_command(env.root())
        .args(["generate", "--stdout"])
        .arg(env.source_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"[{"Metadata":{"title":"A"},"Content":"body"}]"#));

    assert!(!env.output_path().exists());
}

/// --pretty indents the output
#[test]
fn test_generate_pretty() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("a", &EntryFixture::simple("A", "body")).unwrap();

    codex2json_command(env.root())
        .args(["generate", "--pretty"])
        .arg(env.source_dir())
        .assert()
        .success();

    let raw = std::fs::read_to_string(env.output_path()).unwrap();
    assert!(raw.contains("\n  {"));
    assert_eq!(env.read_output().unwrap()[0]["Content"], "body");
}

/// A missing source directory fails before anything is written
#[test]
fn test_generate_missing_directory() {
    let env = TestEnvironment::new().unwrap();

    codex2json_command(env.root())
        .arg("generate")
        .arg(env.root().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Source directory not provided or does not exist."));

    assert!(!env.output_path().exists());
}

/// An empty path is rejected as an invalid argument
#[test]
fn test_generate_empty_path() {
    let env = TestEnvironment::new().unwrap();

    codex2json_command(env.root())
        .args(["generate", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source directory not provided or does not exist."));
}

/// One unreadable document aborts the whole run
#[test]
fn test_generate_unreadable_entry_aborts() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("a", &EntryFixture::simple("A", "fine")).unwrap();
    let bad = env.source_dir().join("b").join("entry.md");
    std::fs::create_dir_all(bad.parent().unwrap()).unwrap();
    std::fs::write(&bad, [0xc3, 0x28, 0xff]).unwrap();

    codex2json_command(env.root())
        .arg("generate")
        .arg(env.source_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("entry.md"));

    assert!(!env.output_path().exists());
}

/// Library callers get the same behavior and the absolute output path
#[test]
fn test_process_returns_absolute_output_path() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("a", &EntryFixture::without_metadata()).unwrap();

    let output = CodexGenerator::new().process(env.source_dir()).unwrap();
    assert!(output.is_absolute());
    assert_eq!(output, env.output_path());
    assert_eq!(env.read_output().unwrap(), json!([]));
}
