//! End-to-end tests of the `schemafit` binary.
//!
//! Each test lays a scaffolded project out in a temporary directory, runs
//! the real binary against it, and asserts on exit codes, streams, and what
//! ended up on disk. Install is always skipped so the tests never spawn a
//! package manager.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SPRING_PHYSICAL: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringPhysicalNamingStrategy";
const SPRING_IMPLICIT: &str =
    "org.springframework.boot.orm.jpa.hibernate.SpringImplicitNamingStrategy";
const HIBERNATE_PHYSICAL: &str =
    "org.hibernate.boot.model.naming.PhysicalNamingStrategyStandardImpl";
const HIBERNATE_IMPLICIT: &str =
    "org.hibernate.boot.model.naming.ImplicitNamingStrategyJpaCompliantImpl";

const HOOKS_FILE: &str = ".jhipster/modules/jhi-hooks.json";

fn yo_rc(build_tool: &str) -> String {
    format!(
        r#"{{
    "generator-jhipster": {{
        "jhipsterVersion": "4.0.8",
        "baseName": "sampleShop",
        "packageName": "com.mycompany.myapp",
        "buildTool": "{build_tool}",
        "clientFramework": "angular1",
        "clientPackageManager": "yarn"
    }}
}}"#
    )
}

fn pom_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <artifactId>sample-shop</artifactId>
    <properties>
        <referencePhysicalNamingStrategy>{SPRING_PHYSICAL}</referencePhysicalNamingStrategy>
        <referenceImplicitNamingStrategy>{SPRING_IMPLICIT}</referenceImplicitNamingStrategy>
    </properties>
</project>
"#
    )
}

fn application_yml() -> String {
    format!(
        "spring:\n    jpa:\n        hibernate:\n            naming:\n                physical-strategy: {SPRING_PHYSICAL}\n                implicit-strategy: {SPRING_IMPLICIT}\n"
    )
}

/// Lay out a scaffolded Maven project in `dir`.
fn seed_maven_project(dir: &Path) {
    fs::write(dir.join(".yo-rc.json"), yo_rc("maven")).unwrap();
    fs::write(dir.join("pom.xml"), pom_xml()).unwrap();
    fs::create_dir_all(dir.join("src/main/resources/config")).unwrap();
    fs::write(
        dir.join("src/main/resources/config/application.yml"),
        application_yml(),
    )
    .unwrap();
    fs::create_dir_all(dir.join("src/test/resources/config")).unwrap();
    fs::write(
        dir.join("src/test/resources/config/application.yml"),
        application_yml(),
    )
    .unwrap();
}

fn schemafit() -> Command {
    Command::cargo_bin("schemafit").unwrap()
}

/// Workspace root, where the shipped `fixtures/` catalog lives.
fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .unwrap()
        .to_path_buf()
}

// ── apply ─────────────────────────────────────────────────────────────────────

#[test]
fn apply_rewrites_the_naming_strategies() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("replacement"));

    let pom = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert!(pom.contains(HIBERNATE_PHYSICAL));
    assert!(pom.contains(HIBERNATE_IMPLICIT));
    assert!(!pom.contains(SPRING_PHYSICAL));
    assert!(!pom.contains(SPRING_IMPLICIT));

    let yml = fs::read_to_string(dir.path().join("src/main/resources/config/application.yml"))
        .unwrap();
    assert!(yml.contains(HIBERNATE_PHYSICAL));
    assert!(!yml.contains(SPRING_PHYSICAL));
}

#[test]
fn apply_registers_the_generator_hooks() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let hooks = fs::read_to_string(dir.path().join(HOOKS_FILE)).unwrap();
    assert!(hooks.contains("schemafit:apply"));
    assert!(hooks.contains("schemafit:entity"));
}

#[test]
fn apply_dry_run_leaves_the_tree_untouched() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());
    let before = fs::read_to_string(dir.path().join("pom.xml")).unwrap();

    schemafit()
        .args(["apply", "--dry-run", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    let after = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert_eq!(before, after);
    assert!(!dir.path().join(HOOKS_FILE).exists());
}

#[test]
fn apply_is_idempotent() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success();
    let first = fs::read_to_string(dir.path().join("pom.xml")).unwrap();

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already aligned"));
    let second = fs::read_to_string(dir.path().join("pom.xml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn apply_emits_a_json_report_on_request() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    let assert = schemafit()
        .args([
            "apply",
            "--skip-install",
            "--output-format",
            "json",
            "--project-dir",
        ])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["install"]["status"], "skipped");
    assert_eq!(report["context"]["base_name"], "sampleShop");
    assert!(report["patches"]["outcomes"].as_array().is_some());
}

#[test]
fn quiet_apply_keeps_stdout_empty() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["apply", "--skip-install", "--quiet", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── failure modes ─────────────────────────────────────────────────────────────

#[test]
fn missing_configuration_is_a_not_found_error() {
    let dir = TempDir::new().unwrap();

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn unknown_test_case_never_falls_back_to_the_live_config() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());
    let before = fs::read_to_string(dir.path().join("pom.xml")).unwrap();

    schemafit()
        .args([
            "apply",
            "--skip-install",
            "--test-case",
            "ghost",
            "--project-dir",
        ])
        .arg(dir.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown test case 'ghost'"));

    // The live configuration was never consulted, nothing was written.
    let after = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn missing_project_dir_fails_with_a_suggestion() {
    schemafit()
        .args([
            "apply",
            "--skip-install",
            "--project-dir",
            "/definitely/not/here",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Project directory not found"))
        .stderr(predicate::str::contains("--project-dir"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    schemafit()
        .args(["apply", "--explode"])
        .assert()
        .failure()
        .code(2);
}

// ── fixtures ──────────────────────────────────────────────────────────────────

#[test]
fn fixture_test_case_resolves_from_the_shipped_catalog() {
    let dir = TempDir::new().unwrap();
    // A project tree without a live .yo-rc.json: the fixture supplies the
    // context, the tree supplies the patch targets.
    fs::write(dir.path().join("pom.xml"), pom_xml()).unwrap();

    schemafit()
        .current_dir(workspace_root())
        .args([
            "apply",
            "--skip-install",
            "--test-case",
            "maven-app",
            "--project-dir",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fixture 'maven-app'"));

    let pom = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert!(pom.contains(HIBERNATE_PHYSICAL));
}

// ── entity ────────────────────────────────────────────────────────────────────

#[test]
fn entity_rerun_after_apply_changes_nothing() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success();
    let after_apply = fs::read_to_string(dir.path().join("pom.xml")).unwrap();

    schemafit()
        .args(["entity", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already aligned"));

    let after_entity = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert_eq!(after_apply, after_entity);
}

#[test]
fn entity_re_aligns_a_regenerated_file() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["apply", "--skip-install", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success();

    // The host generator rewrote the dev config during an entity pass.
    fs::write(
        dir.path().join("src/main/resources/config/application.yml"),
        application_yml(),
    )
    .unwrap();

    schemafit()
        .args(["entity", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("replacement"));

    let yml = fs::read_to_string(dir.path().join("src/main/resources/config/application.yml"))
        .unwrap();
    assert!(yml.contains(HIBERNATE_PHYSICAL));
    assert!(!yml.contains(SPRING_PHYSICAL));
}

// ── hooks ─────────────────────────────────────────────────────────────────────

#[test]
fn hooks_command_writes_the_registry_document() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["hooks", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("registered"));

    let hooks: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(HOOKS_FILE)).unwrap()).unwrap();
    let entries = hooks.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(
        entries
            .iter()
            .all(|e| e["npmPackageName"] == "schemafit" && e["hookType"] == "post")
    );
}

// ── context ───────────────────────────────────────────────────────────────────

#[test]
fn context_table_shows_the_resolved_fields() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    schemafit()
        .args(["context", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sampleShop"))
        .stdout(predicate::str::contains("maven"))
        .stdout(predicate::str::contains("live configuration"));
}

#[test]
fn context_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    seed_maven_project(dir.path());

    let assert = schemafit()
        .args(["context", "--format", "json", "--project-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let context: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(context["base_name"], "sampleShop");
    assert_eq!(context["build_tool"], "maven");
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn help_shows_examples() {
    schemafit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES"))
        .stdout(predicate::str::contains("apply"));
}

#[test]
fn version_prints_the_package_version() {
    schemafit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_emit_a_bash_script() {
    schemafit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("schemafit"));
}

#[test]
fn config_list_prints_toml() {
    schemafit()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"));
}
