mod common;

use common::TestEnv;
use httpmock::prelude::*;
use jsonschema::JSONSchema;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/architecture-dashboardapi/applications/app-101/metrics");
        then.status(200)
            .json_body(json!({"ArchitectureRating": "B", "TotalViolations": 3}));
    });

    let out = env.artifact_path();
    let fetched = env.run_json(&[
        "fetch",
        "api",
        "--app",
        "acmesuite",
        "--artifacts",
        env.artifacts.to_str().unwrap(),
        "--host",
        &server.base_url(),
        "--token",
        "sekret",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert_eq!(fetched["ok"], true);
    validate("metrics-record.schema.json", &fetched["data"]);

    let saved: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    validate("metrics-record.schema.json", &saved);

    let verdict = env.run_json(&["check", "--artifact", out.to_str().unwrap()]);
    assert_eq!(verdict["ok"], true);
    validate("gate-verdict.schema.json", &verdict["data"]);
}
