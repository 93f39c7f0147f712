use ndarray::Array2;
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::SplitCriterion;

use crate::config::{Criterion, RandomForestConfig};
use crate::error::DispatchError;
use crate::models::estimator_trait::{Classifier, Regressor};
use crate::models::utils::{resolve_seed, to_dense_matrix};
use crate::registry::ModelKind;

/// Random forest classifier backed by smartcore.
pub struct ForestClassifier {
    forest: RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>,
}

impl ForestClassifier {
    /// Fit on dense class indices `y`.
    pub fn fit(
        x: &Array2<f64>,
        y: &[usize],
        config: &RandomForestConfig,
    ) -> Result<Self, DispatchError> {
        let mut parameters = RandomForestClassifierParameters::default();
        parameters.n_trees = config.n_estimators as _;
        parameters.max_depth = config.max_depth;
        parameters.min_samples_split = config.min_samples_split;
        parameters.min_samples_leaf = config.min_samples_leaf;
        parameters.m = config.max_features.map(|m| m.min(x.ncols()));
        parameters.seed = resolve_seed(config.random_state);
        // `ModelConfig::validate` has already paired the criterion with the task.
        parameters.criterion = match config.criterion {
            Some(Criterion::Entropy) => SplitCriterion::Entropy,
            _ => SplitCriterion::Gini,
        };

        let y = y
            .iter()
            .map(|&class| i32::try_from(class))
            .collect::<Result<Vec<i32>, _>>()
            .map_err(|e| DispatchError::fit(ModelKind::RandomForest, e))?;

        let forest = RandomForestClassifier::fit(&to_dense_matrix(x), &y, parameters)
            .map_err(|e| DispatchError::fit(ModelKind::RandomForest, e))?;
        Ok(ForestClassifier { forest })
    }
}

impl Classifier for ForestClassifier {
    fn predict_classes(&self, x: &Array2<f64>) -> Result<Vec<usize>, DispatchError> {
        let predictions = self
            .forest
            .predict(&to_dense_matrix(x))
            .map_err(DispatchError::prediction)?;
        predictions
            .into_iter()
            .map(|class| usize::try_from(class).map_err(DispatchError::prediction))
            .collect()
    }

    fn name(&self) -> &str {
        "random_forest_classifier"
    }
}

/// Random forest regressor backed by smartcore.
pub struct ForestRegressor {
    forest: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl ForestRegressor {
    pub fn fit(
        x: &Array2<f64>,
        y: &[f64],
        config: &RandomForestConfig,
    ) -> Result<Self, DispatchError> {
        let mut parameters = RandomForestRegressorParameters::default();
        parameters.n_trees = config.n_estimators as _;
        parameters.max_depth = config.max_depth;
        parameters.min_samples_split = config.min_samples_split;
        parameters.min_samples_leaf = config.min_samples_leaf;
        parameters.m = config.max_features.map(|m| m.min(x.ncols()));
        parameters.seed = resolve_seed(config.random_state);

        let forest = RandomForestRegressor::fit(&to_dense_matrix(x), &y.to_vec(), parameters)
            .map_err(|e| DispatchError::fit(ModelKind::RandomForest, e))?;
        Ok(ForestRegressor { forest })
    }
}

impl Regressor for ForestRegressor {
    fn predict_values(&self, x: &Array2<f64>) -> Result<Vec<f64>, DispatchError> {
        self.forest
            .predict(&to_dense_matrix(x))
            .map_err(DispatchError::prediction)
    }

    fn name(&self) -> &str {
        "random_forest_regressor"
    }
}
