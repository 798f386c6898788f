use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("parktrack");
    cmd.env("HOME", home.path())
        .current_dir(home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // read-only commands
    run_help(&home, &["view"]);
    run_help(&home, &["table"]);
    run_help(&home, &["gaps"]);
    run_help(&home, &["summary"]);
    run_help(&home, &["check"]);

    // store mutations
    run_help(&home, &["visited"]);
    run_help(&home, &["select"]);
    run_help(&home, &["mark"]);
    run_help(&home, &["unmark"]);
}

#[test]
fn mark_requires_at_least_one_id() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cargo_bin_cmd!("parktrack");
    cmd.env("HOME", home.path())
        .current_dir(home.path())
        .arg("mark")
        .assert()
        .failure();
}
