//! End-to-end sanitization of a plan export.

use std::path::PathBuf;

use plan_sanitize::document::{DocumentHasher, DocumentLoader, Plan};
use plan_sanitize::sanitize::{DEFAULT_SENSITIVE_VALUE, sanitize_plan, sanitize_plan_with_value};
use serde_json::{Value, json};

const SECRETS: [&str; 9] = [
    "s3cret",
    "hunter2",
    "PRIVATE",
    "q83vEjRW",
    "d41d8cd9",
    "k-123",
    "k-default",
    "p4ss",
    "\"xyz\"",
];

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/plan.json")
}

fn load_fixture() -> Plan {
    DocumentLoader::new()
        .load(fixture_path())
        .expect("fixture should load")
}

#[test]
fn test_fixture_report() {
    let mut plan = load_fixture();
    let report = sanitize_plan(Some(&mut plan)).unwrap();

    assert_eq!(report.resource_changes, 5);
    assert_eq!(report.resource_drift, 0);
    assert_eq!(report.planned_values, 6);
    assert_eq!(report.prior_state, 1);
    assert_eq!(report.output_changes, 1);
    assert_eq!(report.provider_configs, 1);
    assert_eq!(report.configuration, 5);
    assert_eq!(report.variables, 2);
    assert_eq!(report.total(), 21);
}

#[test]
fn test_no_secret_survives() {
    let mut plan = load_fixture();
    sanitize_plan(Some(&mut plan)).unwrap();

    let encoded = DocumentLoader::new().to_json(&plan).unwrap();
    for secret in SECRETS {
        assert!(!encoded.contains(secret), "{secret} leaked into output");
    }
}

#[test]
fn test_public_values_survive() {
    let mut plan = load_fixture();
    sanitize_plan(Some(&mut plan)).unwrap();
    let redacted = json!(DEFAULT_SENSITIVE_VALUE);

    let change = plan.resource_changes[1].change.as_ref().unwrap();
    assert_eq!(change.after["content"], redacted);
    assert_eq!(change.after["content_base64sha256"], redacted);
    assert_eq!(change.after["content_md5"], redacted);
    assert_eq!(change.after["filename"], "key.pem");
    assert_eq!(change.before, Value::Null);
    assert_eq!(change.after_unknown, json!({"id": true}));

    let planned = plan.planned_values.as_ref().unwrap();
    assert_eq!(planned.outputs["db_endpoint"].value, "db.example.com");
    assert_eq!(planned.outputs["db_password"].value, redacted);

    let root = planned.root_module.as_ref().unwrap();
    assert_eq!(root.resources[0].values["username"], "admin");
    assert_eq!(root.child_modules[0].resources[0].values["length"], 16);
    assert_eq!(root.child_modules[0].resources[0].values["result"], redacted);

    assert_eq!(plan.variables["region"].value, "us-east-1");
    assert_eq!(plan.variables["db_password"].value, redacted);
}

#[test]
fn test_configuration_tree() {
    let mut plan = load_fixture();
    sanitize_plan(Some(&mut plan)).unwrap();
    let redacted = json!(DEFAULT_SENSITIVE_VALUE);

    let config = plan.configuration.as_ref().unwrap();
    let aws = &config.provider_config["aws"];
    assert_eq!(aws.expressions["region"].constant_value, Some(redacted.clone()));
    assert!(aws.expressions["access_key"].is_unknown());

    let root = config.root_module.as_ref().unwrap();
    let app = &root.module_calls["app"];
    assert_eq!(app.expressions["admin_secret"].constant_value, Some(redacted.clone()));
    assert_eq!(app.expressions["token_length"].constant_value, Some(json!(16)));

    // No resolved callee, so every argument goes.
    let legacy = &root.module_calls["legacy"];
    assert_eq!(legacy.expressions["password"].constant_value, Some(redacted.clone()));

    let variables = root.variables.as_ref().unwrap();
    assert_eq!(variables["api_key"].default, Some(redacted));
    assert_eq!(variables["db_password"].default, None);
    assert_eq!(variables["region"].default, Some(json!("us-east-1")));
    assert_eq!(
        root.outputs["db_endpoint"].expression.as_ref().unwrap().constant_value,
        Some(json!("db.example.com"))
    );
}

#[test]
fn test_unknown_fields_round_trip() {
    let mut plan = load_fixture();
    sanitize_plan(Some(&mut plan)).unwrap();

    let encoded = DocumentLoader::new().to_json(&plan).unwrap();
    let document: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(
        document["configuration"]["provider_config"]["aws"]["full_name"],
        "registry.terraform.io/hashicorp/aws"
    );
    assert_eq!(
        document["planned_values"]["root_module"]["resources"][0]["provider_name"],
        "registry.terraform.io/hashicorp/aws"
    );
    assert_eq!(
        document["resource_changes"][0]["change"]["before_sensitive"],
        json!({"password": true})
    );
}

#[test]
fn test_write_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sanitized.json");
    let loader = DocumentLoader::new();

    let mut plan = load_fixture();
    let first = sanitize_plan_with_value(Some(&mut plan), &json!("***")).unwrap();
    let encoded = loader.to_json(&plan).unwrap();
    loader.write(&out, &encoded).unwrap();

    let mut reloaded = loader.load(&out).unwrap();
    assert_eq!(reloaded, plan);

    // Redacted values are still marked, so a second pass makes the same
    // substitutions and leaves the document unchanged.
    let second = sanitize_plan_with_value(Some(&mut reloaded), &json!("***")).unwrap();
    assert_eq!(second.total(), first.total());

    let hasher = DocumentHasher::new();
    let again = loader.to_json(&reloaded).unwrap();
    assert!(DocumentHasher::digests_match(
        &hasher.digest(encoded.as_bytes()),
        &hasher.digest(again.as_bytes())
    ));
}
