use std::error::Error;
use std::fmt;

/// Errors raised by registry lookups, model dispatch and prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// Task type string is neither `classification` nor `regression`.
    InvalidTaskType(String),
    /// No default parameters are registered for this model/task pair.
    UnknownModel { model: String, task: String },
    /// No constructor is registered for this model under the inferred task.
    UnsupportedMethod { method: String, task: String },
    /// A hyperparameter was unknown, mistyped or out of range.
    InvalidParameter { model: String, message: String },
    /// Feature rows and labels disagree in length.
    ShapeMismatch { rows: usize, labels: usize },
    /// The underlying library refused to fit.
    Fit { model: String, message: String },
    /// Inference failed; carries the reason.
    Prediction { message: String },
}

impl DispatchError {
    pub(crate) fn fit(model: impl fmt::Display, message: impl fmt::Display) -> Self {
        DispatchError::Fit {
            model: model.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn prediction(message: impl fmt::Display) -> Self {
        DispatchError::Prediction {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DispatchError::InvalidTaskType(task) => write!(
                f,
                "Task type '{}' is not valid. Choose 'classification' or 'regression'.",
                task
            ),
            DispatchError::UnknownModel { model, task } => write!(
                f,
                "Model '{}' is not recognized for task type '{}'.",
                model, task
            ),
            DispatchError::UnsupportedMethod { method, task } => {
                write!(f, "ML method '{}' is not supported for {}.", method, task)
            }
            DispatchError::InvalidParameter { model, message } => {
                write!(f, "Invalid parameters for '{}': {}", model, message)
            }
            DispatchError::ShapeMismatch { rows, labels } => write!(
                f,
                "Found {} feature rows but {} labels; both must be equal",
                rows, labels
            ),
            DispatchError::Fit { model, message } => {
                write!(f, "Failed to fit '{}': {}", model, message)
            }
            DispatchError::Prediction { message } => write!(
                f,
                "An error occurred while making predictions: {}",
                message
            ),
        }
    }
}

impl Error for DispatchError {}
