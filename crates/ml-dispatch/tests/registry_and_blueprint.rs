//! Integration tests for the model registry and parameter blueprints.

use ml_dispatch::{
    dispatchable_models, list_models, param_blueprint, param_descriptions, DispatchError,
    ModelKind, TaskType,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// list_models
// ---------------------------------------------------------------------------

#[test]
fn registry_lists_are_fixed_and_ordered() {
    let registry = list_models();
    assert_eq!(
        registry.classification,
        vec![
            "random_forest",
            "support_vector_machine",
            "xgboost",
            "tempcnn",
            "mlp",
            "lstm",
            "resnet"
        ]
    );
    assert_eq!(
        registry.regression,
        vec!["random_forest", "support_vector_machine", "knn"]
    );
    assert_eq!(list_models(), registry);
}

#[test]
fn registry_serializes_to_two_keys() {
    let value = serde_json::to_value(list_models()).unwrap();
    let object = value.as_object().unwrap();
    let keys: Vec<&String> = object.keys().collect();
    assert_eq!(keys, vec!["classification", "regression"]);
    assert_eq!(value["regression"], json!(["random_forest", "support_vector_machine", "knn"]));
}

#[test]
fn dispatchable_subset_exposes_the_gap() {
    assert_eq!(
        dispatchable_models(TaskType::Classification),
        vec![ModelKind::RandomForest, ModelKind::SupportVectorMachine]
    );
    assert_eq!(
        dispatchable_models(TaskType::Regression),
        vec![
            ModelKind::RandomForest,
            ModelKind::SupportVectorMachine,
            ModelKind::Knn
        ]
    );
}

// ---------------------------------------------------------------------------
// param_blueprint
// ---------------------------------------------------------------------------

#[test]
fn every_registered_pair_with_defaults_is_non_empty() {
    let registry = list_models();
    for task in TaskType::ALL {
        for model in registry.for_task(task) {
            match param_blueprint(model, task.as_str()) {
                Ok(params) => assert!(!params.is_empty(), "{} / {}", model, task),
                Err(err) => assert!(
                    matches!(err, DispatchError::UnknownModel { .. }),
                    "{} / {}: {}",
                    model,
                    task,
                    err
                ),
            }
        }
    }
}

#[test]
fn blueprint_values_match_library_defaults() {
    let knn = param_blueprint("knn", "regression").unwrap();
    assert_eq!(serde_json::Value::Object(knn), json!({"n_neighbors": 5}));

    let svm = param_blueprint("support_vector_machine", "classification").unwrap();
    assert_eq!(
        serde_json::Value::Object(svm),
        json!({"C": 1.0, "random_state": null})
    );
}

#[test]
fn blueprint_is_a_copy() {
    let mut params = param_blueprint("random_forest", "regression").unwrap();
    params.insert("n_estimators".into(), json!(3));
    params.remove("random_state");

    let fresh = param_blueprint("random_forest", "regression").unwrap();
    assert_eq!(fresh["n_estimators"], json!(100));
    assert!(fresh.contains_key("random_state"));
}

#[test]
fn invalid_task_type() {
    let err = param_blueprint("random_forest", "clustering").unwrap_err();
    assert_eq!(err, DispatchError::InvalidTaskType("clustering".into()));
    assert_eq!(
        err.to_string(),
        "Task type 'clustering' is not valid. Choose 'classification' or 'regression'."
    );
}

#[test]
fn unknown_model() {
    for model in ["not_a_model", "xgboost", "mlp"] {
        let err = param_blueprint(model, "classification").unwrap_err();
        assert!(matches!(err, DispatchError::UnknownModel { .. }), "{}", model);
    }
}

#[test]
fn described_blueprint_shares_failure_modes() {
    assert!(matches!(
        param_descriptions("random_forest", "ranking").unwrap_err(),
        DispatchError::InvalidTaskType(_)
    ));
    assert!(matches!(
        param_descriptions("knn", "classification").unwrap_err(),
        DispatchError::UnknownModel { .. }
    ));

    let described = param_descriptions("random_forest", "classification").unwrap();
    assert_eq!(described[0].name, "n_estimators");
    assert_eq!(described[0].default, json!(100));
    assert_eq!(described[0].description, "The number of trees in the forest.");
}
