//! Integration tests for the CLI parser and rendered output.

use ml_dispatch_cli::{build_cli, render};

fn run(args: &[&str]) -> anyhow::Result<String> {
    let matches = build_cli().try_get_matches_from(args)?;
    render(&matches)
}

#[test]
fn models_plain_output() {
    let output = run(&["ml-dispatch", "models"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "classification: random_forest, support_vector_machine, xgboost, tempcnn, mlp, lstm, resnet",
            "regression: random_forest, support_vector_machine, knn",
        ]
    );
}

#[test]
fn models_json_output() {
    let output = run(&["ml-dispatch", "models", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["regression"][2], "knn");
    assert_eq!(value["classification"].as_array().unwrap().len(), 7);
}

#[test]
fn blueprint_defaults_to_classification() {
    let output = run(&["ml-dispatch", "blueprint", "random_forest"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, serde_json::json!({"n_estimators": 100, "random_state": null}));
}

#[test]
fn blueprint_with_task_and_descriptions() {
    let output = run(&["ml-dispatch", "blueprint", "knn", "--task", "regression", "--describe"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["name"], "n_neighbors");
    assert_eq!(value[0]["default"], 5);
}

#[test]
fn blueprint_errors_are_surfaced() {
    let err = run(&["ml-dispatch", "blueprint", "knn", "-t", "clustering"]).unwrap_err();
    assert!(err.to_string().contains("clustering"));

    let err = run(&["ml-dispatch", "blueprint", "knn"]).unwrap_err();
    assert!(err.to_string().contains("not recognized"));
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["ml-dispatch"]).is_err());
}
