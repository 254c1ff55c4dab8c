#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub artifacts: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let artifacts = tmp.path().join("artifacts");
        fs::create_dir_all(&artifacts).expect("create artifacts dir");
        fs::write(
            artifacts.join("applications.cache"),
            serde_json::to_string_pretty(&serde_json::json!([
                {"Key": "app-101", "Name": "Acme-Suite"},
                {"Key": "app-102", "Name": "Billing"}
            ]))
            .expect("serialize directory"),
        )
        .expect("write application directory");
        let out = tmp.path().join("out");

        Self {
            _tmp: tmp,
            artifacts,
            out,
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.out.join("metrics.json")
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("archgate").expect("binary under test")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Run expecting a non-zero exit; returns whatever JSON landed on
    /// stdout (a failed gate keeps `ok: true`, a fatal error does not).
    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("json output on failure")
    }

    pub fn write_record(&self, record: Value) -> PathBuf {
        let path = self.artifact_path();
        fs::create_dir_all(path.parent().expect("artifact parent")).expect("create out dir");
        fs::write(
            &path,
            serde_json::to_string_pretty(&record).expect("serialize record"),
        )
        .expect("write record");
        path
    }
}
