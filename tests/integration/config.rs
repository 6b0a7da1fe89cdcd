use codex2json::test_utils::{EntryFixture, TestEnvironment};
use predicates::prelude::*;

use crate::common::codex2json_command;

/// A config file changes the entry and output file names
#[test]
fn test_config_file_names() {
    let env = TestEnvironment::new().unwrap();
    env.write_file("a/index.md", &EntryFixture::simple("A", "body").text).unwrap();
    env.write_entry("b", &EntryFixture::simple("B", "body")).unwrap();

    let config_path = env.root().join("config.toml");
    std::fs::write(&config_path, "entry_file_name = \"index.md\"\noutput_file_name = \"out.json\"\n")
        .unwrap();

    codex2json_command(env.root())
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .arg(env.source_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("out.json"));

    let raw = std::fs::read_to_string(env.root().join("out.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["Metadata"]["title"], "A");
    assert!(!env.output_path().exists());
}

/// An invalid config file is reported and nothing is generated
#[test]
fn test_invalid_config_fails() {
    let env = TestEnvironment::new().unwrap();
    env.write_entry("a", &EntryFixture::simple("A", "body")).unwrap();
    std::fs::write(env.root().join("config.toml"), "pretty = \"yes\"\n").unwrap();

    codex2json_command(env.root())
        .arg("generate")
        .arg(env.source_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));

    assert!(!env.output_path().exists());
}

/// `config init` writes the defaults, `config show` reads them back
#[test]
fn test_config_init_and_show() {
    let env = TestEnvironment::new().unwrap();
    let config_path = env.root().join("config.toml");

    codex2json_command(env.root())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at:"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("entry_file_name = \"entry.md\""));
    assert!(written.contains("output_file_name = \"codex.json\""));

    codex2json_command(env.root())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    codex2json_command(env.root())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted_walk = true"));
}

/// `config path` honors the environment override
#[test]
fn test_config_path() {
    let env = TestEnvironment::new().unwrap();

    codex2json_command(env.root())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env.root().join("config.toml").display().to_string()));
}
