use assert_cmd::Command;

fn run_help(args: &[&str]) {
    let mut cmd = Command::cargo_bin("archgate").expect("binary under test");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    // fetch sources
    run_help(&["fetch"]);
    run_help(&["fetch", "api"]);
    run_help(&["fetch", "overview"]);
    run_help(&["fetch", "report"]);
    run_help(&["fetch", "pdf"]);

    // gate + inspection
    run_help(&["check"]);
    run_help(&["show"]);
}

#[test]
fn missing_required_flags_fail_fast() {
    Command::cargo_bin("archgate")
        .expect("binary under test")
        .args(["fetch", "api"])
        .assert()
        .failure();

    Command::cargo_bin("archgate")
        .expect("binary under test")
        .arg("check")
        .assert()
        .failure();
}
