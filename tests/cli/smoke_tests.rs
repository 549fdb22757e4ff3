use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::CatalogWorkspace;

fn muembed(ws: &CatalogWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_muembed"));
    cmd.current_dir(ws.root()).env_remove("MUEMBED_LOG");
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_muembed"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("muembed"));
}

#[test]
fn assemble_writes_every_target() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws).arg("assemble").assert().success();

    let clean = ws.read("out/clean.h");
    assert!(clean.starts_with("/* clean */\n"));
    assert_eq!(clean.matches("#ifndef MUX_H").count(), 1);
    assert!(clean.contains("/* muembed: MUY_H 2.1.0 header */"));
    assert!(ws.path("out/diverging.h").exists());
}

#[test]
fn mismatch_warns_but_succeeds() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["assemble", "--target", "diverging"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: [diverging] version mismatch for MUX_H: embedded 1.0.0, requested 1.1.0 (by MUZ_H)",
        ));

    let text = ws.read("out/diverging.h");
    assert!(text.contains("/* 1.0.0 */"));
    assert!(!text.contains("/* 1.1.0 */"));
}

#[test]
fn no_version_check_silences_warnings() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["assemble", "--target", "diverging", "--no-version-check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("version mismatch").not());
}

#[test]
fn pragma_diagnostics() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["check", "--diagnostics", "pragma"])
        .assert()
        .success()
        .stderr(predicate::str::contains("diverging: #pragma message(\"version mismatch for MUX_H"))
        .stdout(predicate::str::contains("checked 2 target(s), 1 version mismatch(es)"));

    assert!(!ws.path("out").exists());
}

#[test]
fn stdout_output_skips_files() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["--stdout", "-t", "clean", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/* clean */"));

    assert!(!ws.path("out/clean.h").exists());
}

#[test]
fn stdout_summary_names_stdout() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["--stdout", "-t", "clean"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[muembed] clean -> <stdout>"))
        .stderr(predicate::str::contains("out/clean.h").not());
}

#[test]
fn shared_output_path_is_an_error() {
    let ws = CatalogWorkspace::new();
    let catalog = ws.write(
        "shared.json",
        r#"{
            "modules": [ { "guard": "MUA_H", "version": "1.0.0", "header_text": "a" } ],
            "targets": [
                { "name": "one", "output": "same.h", "embeds": ["MUA_H"] },
                { "name": "two", "output": "same.h", "embeds": ["MUA_H"] }
            ]
        }"#,
    );

    muembed(&ws)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Targets 'one' and 'two' both write 'same.h'"));
}

#[test]
fn plan_as_json() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    let output = muembed(&ws).args(["plan", "--format", "json", "-t", "diverging"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let target = &value["targets"][0];
    assert_eq!(target["name"], "diverging");
    assert_eq!(target["written"], false);
    assert_eq!(target["skipped"][0]["reason"], "version-mismatch");
}

#[test]
fn plan_as_table() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["plan", "-t", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TARGET").and(predicate::str::contains("MUY_H")));
}

#[test]
fn cycle_is_an_error() {
    let ws = CatalogWorkspace::new();
    let catalog = ws.cyclic();

    muembed(&ws)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("MUA_H -> MUB_H -> MUA_H"));
}

#[test]
fn unknown_target_is_an_error() {
    let ws = CatalogWorkspace::new();
    ws.diverging();

    muembed(&ws)
        .args(["-t", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown target 'nope'"));
}

#[test]
fn missing_catalog_is_an_error() {
    let ws = CatalogWorkspace::new();

    muembed(&ws).assert().failure().stderr(predicate::str::contains("muembed.yaml"));
}
