use std::error::Error;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn nansi() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("nansi")?;
    cmd.env("NO_COLOR", "1").env("CLICOLOR", "0").env_remove("NANSI_LOG");
    Ok(cmd)
}

#[test]
fn file_doesnt_exist() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.args(["run", "test/file/doesnt/exist"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load command file"))
        .stderr(predicate::str::contains("test/file/doesnt/exist"));

    Ok(())
}

#[test]
fn help_lists_subcommands() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("schema"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn failures_do_not_stop_independent_commands() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("run").arg(testdata("nansifile_linux.json"));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[OK] [1][ls] ls\n"))
        .stdout(predicate::str::contains("[FAIL] [2][l2] ls -12345"))
        .stdout(predicate::str::contains("[FAIL] [3][missing] aaa (exit -1)"))
        .stdout(predicate::str::contains(
            "[OK] [4][echo] /bin/sh -c echo hello from nansi\nhello from nansi\n",
        ))
        .stdout(predicate::str::contains("2 succeeded, 2 failed, 0 skipped"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn failed_dependency_skips_dependents() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("run").arg(testdata("nansifile_linux_depends.json"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("[OK] [2][after-ok]"))
        .stdout(predicate::str::contains("[FAIL] [3][broken] /bin/sh -c exit 2 (exit 2)"))
        .stdout(predicate::str::contains("[SKIP] [4][after-broken]"))
        .stdout(predicate::str::contains(
            "Skipped 'after-broken': dependency 'broken' did not succeed",
        ))
        .stdout(predicate::str::contains("[SKIP] [5][after-skipped]"))
        .stdout(predicate::str::contains("[OK] [6][#6]"))
        .stdout(predicate::str::contains("3 succeeded, 1 failed, 2 skipped"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn hidden_status_lines_still_counted() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("run").arg(testdata("nansifile_hidden_status.json"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("[OK] [1][visible]"))
        .stdout(predicate::str::contains("[hidden-ok]").not())
        .stdout(predicate::str::contains("[hidden-fail]").not())
        .stdout(predicate::str::contains("[hidden-skip]").not())
        .stdout(predicate::str::contains("[SKIP]").not())
        .stdout(predicate::str::contains(
            "Skipped 'hidden-skip': dependency 'hidden-fail' did not succeed",
        ))
        .stdout(predicate::str::contains("2 succeeded, 1 failed, 1 skipped"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn snake_case_command_file_runs() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("run").arg(testdata("nansifile_snake_case.json"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("[OK] [1][ls] ls\n"))
        .stdout(predicate::str::contains("[FAIL] [3][l2] ls -12345"))
        .stdout(predicate::str::contains("[SKIP] [4][bash]"))
        .stdout(predicate::str::contains("[OK] [5][#5] ls\n"))
        .stdout(predicate::str::contains("3 succeeded, 1 failed, 1 skipped"));

    Ok(())
}

#[test]
fn multiple_prerequisites_rejected() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("plan")
        .arg(testdata("nansifile_multiple_prerequisites.json"));
    cmd.assert().failure().stderr(predicate::str::contains(
        "command 'deploy' declares more than one dependency (build, test); only one is supported",
    ));

    Ok(())
}

#[cfg(unix)]
#[test]
fn json_report() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("run")
        .arg(testdata("nansifile_linux_depends.json"))
        .arg("--json");
    let output = cmd.output()?;
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["outcome"], "failed");
    assert_eq!(report["results"][2]["name"], "broken");
    assert_eq!(report["results"][2]["exitCode"], 2);
    assert_eq!(report["results"][3]["status"], "skipped");
    assert_eq!(report["results"].as_array().map(Vec::len), Some(6));

    Ok(())
}

#[cfg(unix)]
#[test]
fn forward_dependency_runs_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = nansi()?;

    cmd.arg("run")
        .arg(testdata("nansifile_forward.json"))
        .arg("-C")
        .arg(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "command 'touch' depends on 'mkdir', which is declared after it",
        ))
        .stdout(predicate::str::contains("[OK]").not());

    assert!(!dir.path().join("forward-marker").exists());

    Ok(())
}

#[test]
fn duplicate_names_rejected_by_plan() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("plan").arg(testdata("nansifile_duplicate_names.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "command name 'ls' is declared more than once",
        ));

    Ok(())
}

#[cfg(unix)]
#[test]
fn yaml_mkdir_then_touch_in_directory() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;

    let mut first = nansi()?;
    first
        .arg("run")
        .arg(testdata("nansifile_mkdir.yaml"))
        .arg("--directory")
        .arg(dir.path());
    first
        .assert()
        .success()
        .stdout(predicate::str::contains("2 succeeded, 0 failed, 0 skipped"));
    assert!(dir.path().join("x").join("f").exists());

    // x already exists now, so mkdir fails and touch is skipped
    let mut second = nansi()?;
    second
        .arg("run")
        .arg(testdata("nansifile_mkdir.yaml"))
        .arg("--directory")
        .arg(dir.path());
    second
        .assert()
        .failure()
        .stdout(predicate::str::contains("[FAIL] [1][mkdir]"))
        .stdout(predicate::str::contains("[SKIP] [2][touch]"));

    Ok(())
}

#[test]
fn plan_shows_order_and_dependencies() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("plan").arg(testdata("nansifile_linux_depends.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. ok /bin/sh -c exit 0"))
        .stdout(predicate::str::contains(
            "4. after-broken /bin/sh -c exit 0 (after broken)",
        ));

    Ok(())
}

#[test]
fn schema_describes_command_file() -> Result<(), Box<dyn Error>> {
    let mut cmd = nansi()?;

    cmd.arg("schema");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("execList"))
        .stdout(predicate::str::contains("dependsOn"));

    Ok(())
}
