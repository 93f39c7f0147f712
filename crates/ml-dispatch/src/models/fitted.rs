use std::fmt;

use ndarray::Array2;

use crate::error::DispatchError;
use crate::labels::{LabelEncoder, Labels};
use crate::models::estimator_trait::{Classifier, Regressor};
use crate::models::utils::ensure_finite;
use crate::registry::ModelKind;
use crate::task::TaskType;

pub(crate) enum Estimator {
    Classifier {
        model: Box<dyn Classifier>,
        encoder: LabelEncoder,
    },
    Regressor(Box<dyn Regressor>),
}

/// A trained model returned by [`crate::fit`].
///
/// Owns the fitted backend estimator together with what is needed to
/// validate inputs and translate its outputs back into the caller's labels.
pub struct FittedModel {
    kind: ModelKind,
    task: TaskType,
    n_features: usize,
    estimator: Estimator,
}

impl FittedModel {
    pub(crate) fn new(
        kind: ModelKind,
        task: TaskType,
        n_features: usize,
        estimator: Estimator,
    ) -> Self {
        FittedModel {
            kind,
            task,
            n_features,
            estimator,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Task type inferred from the training labels.
    pub fn task(&self) -> TaskType {
        self.task
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Classes seen during fit, in encoding order. `None` for regression.
    pub fn classes(&self) -> Option<&Labels> {
        match &self.estimator {
            Estimator::Classifier { encoder, .. } => Some(encoder.classes()),
            Estimator::Regressor(_) => None,
        }
    }

    pub fn estimator_name(&self) -> &str {
        match &self.estimator {
            Estimator::Classifier { model, .. } => model.name(),
            Estimator::Regressor(model) => model.name(),
        }
    }

    /// Predict one label per row of `x`.
    ///
    /// Classification returns labels of the same kind as the training labels;
    /// regression returns `Labels::Float`.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Labels, DispatchError> {
        if x.ncols() != self.n_features {
            return Err(DispatchError::prediction(format!(
                "X has {} features, but {} is expecting {} features as input",
                x.ncols(),
                self.estimator_name(),
                self.n_features
            )));
        }
        if x.nrows() == 0 {
            return Err(DispatchError::prediction(
                "Found array with 0 sample(s) while a minimum of 1 is required",
            ));
        }
        ensure_finite(x).map_err(DispatchError::prediction)?;

        match &self.estimator {
            Estimator::Classifier { model, encoder } => {
                let indices = model.predict_classes(x)?;
                encoder.decode(&indices)
            }
            Estimator::Regressor(model) => Ok(Labels::Float(model.predict_values(x)?)),
        }
    }
}

impl fmt::Debug for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FittedModel")
            .field("kind", &self.kind)
            .field("task", &self.task)
            .field("n_features", &self.n_features)
            .field("estimator", &self.estimator_name())
            .field("classes", &self.classes())
            .finish()
    }
}
