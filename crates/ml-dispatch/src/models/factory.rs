use ndarray::Array2;

use crate::config::ModelConfig;
use crate::error::DispatchError;
use crate::labels::{LabelEncoder, Labels};
use crate::models::estimator_trait::{Classifier, Regressor};
use crate::models::fitted::{Estimator, FittedModel};
use crate::models::knn::KnnRegressor;
use crate::models::random_forest::{ForestClassifier, ForestRegressor};
use crate::models::svm::{SvmClassifier, SvmRegressor};
use crate::models::utils::ensure_finite;
use crate::task::TaskType;

/// Build the backend model described by `config`, fit it and wrap it.
///
/// Inputs are validated here so every backend sees a non-empty, finite
/// matrix with one label per row.
pub fn build_model(
    config: &ModelConfig,
    task: TaskType,
    x: &Array2<f64>,
    labels: &Labels,
) -> Result<FittedModel, DispatchError> {
    let kind = config.kind();
    if x.nrows() != labels.len() {
        return Err(DispatchError::ShapeMismatch {
            rows: x.nrows(),
            labels: labels.len(),
        });
    }
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(DispatchError::fit(
            kind,
            format!(
                "Found array with shape ({}, {}); at least one sample and one feature are required",
                x.nrows(),
                x.ncols()
            ),
        ));
    }
    ensure_finite(x).map_err(|message| DispatchError::fit(kind, message))?;

    let unsupported = || DispatchError::UnsupportedMethod {
        method: kind.to_string(),
        task: task.to_string(),
    };

    let estimator = match task {
        TaskType::Classification => {
            let (encoder, y) = LabelEncoder::fit(labels)?;
            let model: Box<dyn Classifier> = match config {
                ModelConfig::RandomForest(c) => Box::new(ForestClassifier::fit(x, &y, c)?),
                ModelConfig::SupportVectorMachine(c) => {
                    Box::new(SvmClassifier::fit(x, &y, encoder.n_classes(), c)?)
                }
                ModelConfig::Knn(_) => return Err(unsupported()),
            };
            Estimator::Classifier { model, encoder }
        }
        TaskType::Regression => {
            let y = labels.to_f64().ok_or_else(|| {
                DispatchError::fit(
                    kind,
                    format!("regression needs numeric labels, got {}", labels.kind()),
                )
            })?;
            if let Some(bad) = y.iter().find(|v| !v.is_finite()) {
                return Err(DispatchError::fit(
                    kind,
                    format!("regression targets must be finite, found {}", bad),
                ));
            }
            let model: Box<dyn Regressor> = match config {
                ModelConfig::RandomForest(c) => Box::new(ForestRegressor::fit(x, &y, c)?),
                ModelConfig::SupportVectorMachine(c) => Box::new(SvmRegressor::fit(x, &y, c)?),
                ModelConfig::Knn(c) => Box::new(KnnRegressor::fit(x, &y, c)?),
            };
            Estimator::Regressor(model)
        }
    };

    Ok(FittedModel::new(kind, task, x.ncols(), estimator))
}
