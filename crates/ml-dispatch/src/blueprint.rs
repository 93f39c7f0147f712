//! Default hyperparameters ("blueprints") per model and task type.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DispatchError;
use crate::registry::ModelKind;
use crate::task::TaskType;

/// Hyperparameter name to value, in insertion order.
pub type Params = Map<String, Value>;

#[derive(Debug, Clone, Copy)]
enum DefaultValue {
    Int(i64),
    Float(f64),
    Null,
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            DefaultValue::Int(v) => Value::from(v),
            DefaultValue::Float(v) => Value::from(v),
            DefaultValue::Null => Value::Null,
        }
    }
}

struct ParamSpec {
    name: &'static str,
    default: DefaultValue,
    description: &'static str,
}

const N_ESTIMATORS: ParamSpec = ParamSpec {
    name: "n_estimators",
    default: DefaultValue::Int(100),
    description: "The number of trees in the forest.",
};

const FOREST_RANDOM_STATE: ParamSpec = ParamSpec {
    name: "random_state",
    default: DefaultValue::Null,
    description: "Seed controlling the bootstrapping of the samples used when building trees \
                  and the sampling of the features considered at each split. \
                  Null draws a fresh seed on every fit.",
};

const SVM_C: ParamSpec = ParamSpec {
    name: "C",
    default: DefaultValue::Float(1.0),
    description: "Regularization parameter. The strength of the regularization is inversely \
                  proportional to C. Must be strictly positive.",
};

const SVM_RANDOM_STATE: ParamSpec = ParamSpec {
    name: "random_state",
    default: DefaultValue::Null,
    description: "Accepted for interface compatibility; the solver is deterministic.",
};

const N_NEIGHBORS: ParamSpec = ParamSpec {
    name: "n_neighbors",
    default: DefaultValue::Int(5),
    description: "Number of neighbors used to average the prediction.",
};

const RANDOM_FOREST: &[ParamSpec] = &[N_ESTIMATORS, FOREST_RANDOM_STATE];
const SUPPORT_VECTOR_MACHINE: &[ParamSpec] = &[SVM_C, SVM_RANDOM_STATE];
const KNN: &[ParamSpec] = &[N_NEIGHBORS];

fn specs(kind: ModelKind, task: TaskType) -> Option<&'static [ParamSpec]> {
    match (kind, task) {
        (ModelKind::RandomForest, _) => Some(RANDOM_FOREST),
        (ModelKind::SupportVectorMachine, _) => Some(SUPPORT_VECTOR_MACHINE),
        (ModelKind::Knn, TaskType::Regression) => Some(KNN),
        _ => None,
    }
}

fn lookup(model_id: &str, task_type: &str) -> Result<&'static [ParamSpec], DispatchError> {
    let task: TaskType = task_type.parse()?;
    model_id
        .parse::<ModelKind>()
        .ok()
        .and_then(|kind| specs(kind, task))
        .ok_or_else(|| DispatchError::UnknownModel {
            model: model_id.to_string(),
            task: task.to_string(),
        })
}

/// Default parameters for `model_id` under `task_type`.
///
/// The returned map is built on every call; editing it has no effect on
/// later lookups.
pub fn param_blueprint(model_id: &str, task_type: &str) -> Result<Params, DispatchError> {
    let specs = lookup(model_id, task_type)?;
    Ok(specs
        .iter()
        .map(|spec| (spec.name.to_string(), spec.default.to_value()))
        .collect())
}

/// A default parameter together with a human-readable explanation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParamDescription {
    pub name: String,
    pub default: Value,
    pub description: String,
}

/// Same lookup as [`param_blueprint`], annotated with a description per entry.
pub fn param_descriptions(
    model_id: &str,
    task_type: &str,
) -> Result<Vec<ParamDescription>, DispatchError> {
    let specs = lookup(model_id, task_type)?;
    Ok(specs
        .iter()
        .map(|spec| ParamDescription {
            name: spec.name.to_string(),
            default: spec.default.to_value(),
            description: spec.description.to_string(),
        })
        .collect())
}
