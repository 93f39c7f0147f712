use ndarray::Array2;

use crate::error::DispatchError;

/// A fitted model that predicts dense class indices (`0..n_classes`).
///
/// Mapping indices back to the caller's label values is done by the
/// `LabelEncoder` held next to the model, so implementations never see the
/// original labels.
pub trait Classifier {
    fn predict_classes(&self, x: &Array2<f64>) -> Result<Vec<usize>, DispatchError>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

/// A fitted model that predicts one continuous value per row.
pub trait Regressor {
    fn predict_values(&self, x: &Array2<f64>) -> Result<Vec<f64>, DispatchError>;

    fn name(&self) -> &str {
        "regressor"
    }
}
