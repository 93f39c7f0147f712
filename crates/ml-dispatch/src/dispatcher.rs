//! Fit and predict entry points.

use ndarray::Array2;

use crate::blueprint::Params;
use crate::config::ModelConfig;
use crate::error::DispatchError;
use crate::labels::Labels;
use crate::models::factory::build_model;
use crate::models::fitted::FittedModel;
use crate::registry::ModelKind;
use crate::task::{infer_task_type, TaskType};

/// Resolve `model_id` against the dispatch table for `task`.
pub fn resolve_method(model_id: &str, task: TaskType) -> Result<ModelKind, DispatchError> {
    model_id
        .parse::<ModelKind>()
        .ok()
        .filter(|kind| kind.is_dispatchable(task))
        .ok_or_else(|| DispatchError::UnsupportedMethod {
            method: model_id.to_string(),
            task: task.to_string(),
        })
}

/// Fit the model named `model_id` on `features` and `labels`.
///
/// The task type is guessed from the labels with [`infer_task_type`] before
/// the model is looked up, so the same identifier can produce a classifier or
/// a regressor. `params` of `None` means library defaults.
pub fn fit(
    features: &Array2<f64>,
    labels: &Labels,
    model_id: &str,
    params: Option<&Params>,
) -> Result<FittedModel, DispatchError> {
    let task = infer_task_type(labels);
    let kind = resolve_method(model_id, task)?;

    let empty = Params::new();
    let config = ModelConfig::from_params(kind, task, params.unwrap_or(&empty))?;

    log::info!(
        "Fitting {} for {} on {} samples with {} features",
        kind,
        task,
        features.nrows(),
        features.ncols()
    );
    let model = build_model(&config, task, features, labels)?;
    log::info!("Finished fitting {}", model.estimator_name());
    Ok(model)
}

/// Run inference with a fitted model.
///
/// Failures come back as [`DispatchError::Prediction`], whose message starts
/// with `An error occurred while making predictions:`.
pub fn predict(model: &FittedModel, data: &Array2<f64>) -> Result<Labels, DispatchError> {
    log::info!(
        "Predicting {} rows with {}",
        data.nrows(),
        model.estimator_name()
    );
    model.predict(data).map_err(|e| match e {
        DispatchError::Prediction { .. } => e,
        other => DispatchError::prediction(other),
    })
}
