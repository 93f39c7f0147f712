//! Model identifiers and the static per-task registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::task::TaskType;

/// Every model identifier the registry knows about.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    RandomForest,
    SupportVectorMachine,
    #[serde(rename = "xgboost")]
    XGBoost,
    #[serde(rename = "tempcnn")]
    TempCnn,
    Mlp,
    Lstm,
    Resnet,
    Knn,
}

const CLASSIFICATION_MODELS: [ModelKind; 7] = [
    ModelKind::RandomForest,
    ModelKind::SupportVectorMachine,
    ModelKind::XGBoost,
    ModelKind::TempCnn,
    ModelKind::Mlp,
    ModelKind::Lstm,
    ModelKind::Resnet,
];

const REGRESSION_MODELS: [ModelKind; 3] = [
    ModelKind::RandomForest,
    ModelKind::SupportVectorMachine,
    ModelKind::Knn,
];

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::RandomForest => "random_forest",
            ModelKind::SupportVectorMachine => "support_vector_machine",
            ModelKind::XGBoost => "xgboost",
            ModelKind::TempCnn => "tempcnn",
            ModelKind::Mlp => "mlp",
            ModelKind::Lstm => "lstm",
            ModelKind::Resnet => "resnet",
            ModelKind::Knn => "knn",
        }
    }

    /// Whether `fit` can build this model for `task`.
    ///
    /// Several identifiers are listed by the registry without a backend; they
    /// answer `false` here for every task.
    pub fn is_dispatchable(&self, task: TaskType) -> bool {
        match (self, task) {
            (ModelKind::RandomForest, _) | (ModelKind::SupportVectorMachine, _) => true,
            (ModelKind::Knn, TaskType::Regression) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random_forest" => Ok(ModelKind::RandomForest),
            "support_vector_machine" => Ok(ModelKind::SupportVectorMachine),
            "xgboost" => Ok(ModelKind::XGBoost),
            "tempcnn" => Ok(ModelKind::TempCnn),
            "mlp" => Ok(ModelKind::Mlp),
            "lstm" => Ok(ModelKind::Lstm),
            "resnet" => Ok(ModelKind::Resnet),
            "knn" => Ok(ModelKind::Knn),
            _ => Err(format!("Unknown model identifier: {}", s)),
        }
    }
}

/// Model identifiers available per task type, in registry order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelRegistry {
    pub classification: Vec<&'static str>,
    pub regression: Vec<&'static str>,
}

impl ModelRegistry {
    pub fn for_task(&self, task: TaskType) -> &[&'static str] {
        match task {
            TaskType::Classification => &self.classification,
            TaskType::Regression => &self.regression,
        }
    }
}

/// List the registered model identifiers for both task types.
pub fn list_models() -> ModelRegistry {
    ModelRegistry {
        classification: CLASSIFICATION_MODELS.iter().map(ModelKind::as_str).collect(),
        regression: REGRESSION_MODELS.iter().map(ModelKind::as_str).collect(),
    }
}

/// Registered models that `fit` can actually construct for `task`.
pub fn dispatchable_models(task: TaskType) -> Vec<ModelKind> {
    registered(task)
        .iter()
        .copied()
        .filter(|kind| kind.is_dispatchable(task))
        .collect()
}

pub(crate) fn registered(task: TaskType) -> &'static [ModelKind] {
    match task {
        TaskType::Classification => &CLASSIFICATION_MODELS,
        TaskType::Regression => &REGRESSION_MODELS,
    }
}
