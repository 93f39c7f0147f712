//! ml-dispatch: a small front door to tabular machine-learning models.
//!
//! The crate lists the model identifiers it knows per task type, hands out
//! default hyperparameter blueprints, and fits a model chosen by name. Whether
//! a fit is a classification or a regression is guessed from the labels (see
//! [`infer_task_type`]). Random forests and k-nearest neighbours come from
//! `smartcore`, support vector machines from `linfa-svm`.
pub mod blueprint;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod labels;
pub mod models;
pub mod registry;
pub mod task;

pub use blueprint::{param_blueprint, param_descriptions, ParamDescription, Params};
pub use config::ModelConfig;
pub use dispatcher::{fit, predict};
pub use error::DispatchError;
pub use labels::{LabelEncoder, Labels};
pub use models::fitted::FittedModel;
pub use registry::{dispatchable_models, list_models, ModelKind, ModelRegistry};
pub use task::{infer_task_type, TaskType};
