use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::blueprint::Params;
use crate::error::DispatchError;
use crate::registry::ModelKind;
use crate::task::TaskType;

/// Typed hyper-parameters for a dispatchable model.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelConfig {
    RandomForest(RandomForestConfig),
    SupportVectorMachine(SvmConfig),
    Knn(KnnConfig),
}

impl ModelConfig {
    /// Deserialize a loose parameter map into the config for `kind`.
    ///
    /// Missing keys fall back to library defaults. Unknown keys and values of
    /// the wrong type are rejected.
    pub fn from_params(
        kind: ModelKind,
        task: TaskType,
        params: &Params,
    ) -> Result<Self, DispatchError> {
        let config = match kind {
            ModelKind::RandomForest => ModelConfig::RandomForest(parse(kind, params)?),
            ModelKind::SupportVectorMachine => {
                ModelConfig::SupportVectorMachine(parse(kind, params)?)
            }
            ModelKind::Knn => ModelConfig::Knn(parse(kind, params)?),
            _ => {
                return Err(DispatchError::UnsupportedMethod {
                    method: kind.to_string(),
                    task: task.to_string(),
                })
            }
        };
        config.validate(task)?;
        Ok(config)
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            ModelConfig::RandomForest(_) => ModelKind::RandomForest,
            ModelConfig::SupportVectorMachine(_) => ModelKind::SupportVectorMachine,
            ModelConfig::Knn(_) => ModelKind::Knn,
        }
    }

    fn validate(&self, task: TaskType) -> Result<(), DispatchError> {
        let invalid = |message: String| DispatchError::InvalidParameter {
            model: self.kind().to_string(),
            message,
        };
        match self {
            ModelConfig::RandomForest(c) => {
                if c.n_estimators == 0 || c.n_estimators > u16::MAX as usize {
                    return Err(invalid(format!(
                        "n_estimators must be in 1..={}, got {}",
                        u16::MAX,
                        c.n_estimators
                    )));
                }
                if c.min_samples_split < 2 {
                    return Err(invalid("min_samples_split must be at least 2".into()));
                }
                if c.min_samples_leaf == 0 {
                    return Err(invalid("min_samples_leaf must be at least 1".into()));
                }
                if c.max_features == Some(0) {
                    return Err(invalid("max_features must be at least 1".into()));
                }
                match (task, c.criterion) {
                    (_, None)
                    | (TaskType::Classification, Some(Criterion::Gini))
                    | (TaskType::Classification, Some(Criterion::Entropy))
                    | (TaskType::Regression, Some(Criterion::SquaredError)) => {}
                    (task, Some(criterion)) => {
                        return Err(invalid(format!(
                            "criterion '{:?}' is not available for {}",
                            criterion, task
                        )))
                    }
                }
            }
            ModelConfig::SupportVectorMachine(c) => {
                if !(c.c > 0.0) {
                    return Err(invalid(format!("C must be strictly positive, got {}", c.c)));
                }
                if !(c.tol > 0.0) {
                    return Err(invalid(format!("tol must be strictly positive, got {}", c.tol)));
                }
                if !(c.epsilon >= 0.0) {
                    return Err(invalid(format!("epsilon must be non-negative, got {}", c.epsilon)));
                }
                if c.degree == 0 {
                    return Err(invalid("degree must be at least 1".into()));
                }
                if let Gamma::Value(gamma) = c.gamma {
                    if !(gamma > 0.0) {
                        return Err(invalid(format!(
                            "gamma must be strictly positive, got {}",
                            gamma
                        )));
                    }
                }
            }
            ModelConfig::Knn(c) => {
                if c.n_neighbors == 0 {
                    return Err(invalid("n_neighbors must be at least 1".into()));
                }
            }
        }
        Ok(())
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    kind: ModelKind,
    params: &Params,
) -> Result<T, DispatchError> {
    serde_json::from_value(Value::Object(params.clone())).map_err(|e| {
        DispatchError::InvalidParameter {
            model: kind.to_string(),
            message: e.to_string(),
        }
    })
}

/// Split quality measure for forest trees.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Gini,
    Entropy,
    SquaredError,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RandomForestConfig {
    pub n_estimators: usize,
    /// `None` draws a fresh seed per fit.
    pub random_state: Option<u64>,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Features considered per split; `None` keeps the backend rule.
    pub max_features: Option<usize>,
    pub criterion: Option<Criterion>,
}

impl Default for RandomForestConfig {
    fn default() -> Self {
        RandomForestConfig {
            n_estimators: 100,
            random_state: None,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            criterion: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    Linear,
    Rbf,
    Poly,
}

/// RBF kernel coefficient, either a number or one of the named rules.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Gamma {
    Value(f64),
    Rule(GammaRule),
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GammaRule {
    /// `1 / (n_features * var(X))`
    Scale,
    /// `1 / n_features`
    Auto,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SvmConfig {
    #[serde(rename = "C")]
    pub c: f64,
    pub kernel: Kernel,
    pub gamma: Gamma,
    pub degree: u32,
    pub coef0: f64,
    /// Width of the insensitive tube; regression only.
    pub epsilon: f64,
    pub tol: f64,
    pub random_state: Option<u64>,
}

impl Default for SvmConfig {
    fn default() -> Self {
        SvmConfig {
            c: 1.0,
            kernel: Kernel::Rbf,
            gamma: Gamma::Rule(GammaRule::Scale),
            degree: 3,
            coef0: 0.0,
            epsilon: 0.1,
            tol: 1e-3,
            random_state: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weights {
    Uniform,
    Distance,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KnnConfig {
    pub n_neighbors: usize,
    pub weights: Weights,
}

impl Default for KnnConfig {
    fn default() -> Self {
        KnnConfig {
            n_neighbors: 5,
            weights: Weights::Uniform,
        }
    }
}
