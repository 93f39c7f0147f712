//! Integration tests for the classification/regression heuristic.

use ml_dispatch::{infer_task_type, Labels, TaskType};

#[test]
fn few_integer_classes_are_classification() {
    // 100 samples of {0, 1, 2}: 3 < sqrt(100)
    let labels = Labels::Integer((0..100).map(|i| i % 3).collect());
    assert_eq!(infer_task_type(&labels), TaskType::Classification);
}

#[test]
fn many_integer_values_are_regression() {
    // 100 samples, 10 distinct values: 10 < 10 does not hold
    let labels = Labels::Integer((0..100).map(|i| i % 10).collect());
    assert_eq!(infer_task_type(&labels), TaskType::Regression);

    let labels = Labels::Integer((0..100).collect());
    assert_eq!(infer_task_type(&labels), TaskType::Regression);
}

#[test]
fn distinct_floats_are_regression() {
    let labels = Labels::Float((0..100).map(|i| i as f64 * 0.37).collect());
    assert_eq!(infer_task_type(&labels), TaskType::Regression);
}

#[test]
fn non_numeric_labels_are_always_classification() {
    let many_strings: Vec<String> = (0..100).map(|i| format!("class-{}", i)).collect();
    assert_eq!(
        infer_task_type(&Labels::Text(many_strings.clone())),
        TaskType::Classification
    );
    assert_eq!(
        infer_task_type(&Labels::Categorical(many_strings)),
        TaskType::Classification
    );
    assert_eq!(
        infer_task_type(&Labels::Boolean(vec![true, false, true])),
        TaskType::Classification
    );
}

#[test]
fn categorical_of_numbers_is_classification() {
    let labels = Labels::categorical((0..100).map(|i| i.to_string()));
    assert!(!labels.is_numeric());
    assert_eq!(infer_task_type(&labels), TaskType::Classification);
}

#[test]
fn identical_integer_labels() {
    // one distinct value: classification from two samples on
    assert_eq!(infer_task_type(&Labels::Integer(vec![4])), TaskType::Regression);
    assert_eq!(
        infer_task_type(&Labels::Integer(vec![4, 4])),
        TaskType::Classification
    );
}
