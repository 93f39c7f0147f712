use ndarray::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_regressor::{KNNRegressor, KNNRegressorParameters};
use smartcore::neighbors::KNNWeightFunction;

use crate::config::{KnnConfig, Weights};
use crate::error::DispatchError;
use crate::models::estimator_trait::Regressor;
use crate::models::utils::to_dense_matrix;
use crate::registry::ModelKind;

/// k-nearest-neighbours regressor (Euclidean distance) backed by smartcore.
pub struct KnnRegressor {
    model: KNNRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>, Euclidian<f64>>,
}

impl KnnRegressor {
    pub fn fit(x: &Array2<f64>, y: &[f64], config: &KnnConfig) -> Result<Self, DispatchError> {
        if config.n_neighbors > x.nrows() {
            return Err(DispatchError::fit(
                ModelKind::Knn,
                format!(
                    "Expected n_neighbors <= n_samples, but n_samples = {}, n_neighbors = {}",
                    x.nrows(),
                    config.n_neighbors
                ),
            ));
        }

        let weight = match config.weights {
            Weights::Uniform => KNNWeightFunction::Uniform,
            Weights::Distance => KNNWeightFunction::Distance,
        };
        let parameters = KNNRegressorParameters::<f64, Euclidian<f64>>::default()
            .with_k(config.n_neighbors)
            .with_weight(weight);

        let model = KNNRegressor::fit(&to_dense_matrix(x), &y.to_vec(), parameters)
            .map_err(|e| DispatchError::fit(ModelKind::Knn, e))?;
        Ok(KnnRegressor { model })
    }
}

impl Regressor for KnnRegressor {
    fn predict_values(&self, x: &Array2<f64>) -> Result<Vec<f64>, DispatchError> {
        self.model
            .predict(&to_dense_matrix(x))
            .map_err(DispatchError::prediction)
    }

    fn name(&self) -> &str {
        "knn_regressor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn single_neighbour_recovers_training_targets() {
        let x = array![[0.0], [1.0], [2.0], [3.0]];
        let y = vec![10.0, 20.0, 30.0, 40.0];
        let config = KnnConfig {
            n_neighbors: 1,
            ..KnnConfig::default()
        };
        let model = KnnRegressor::fit(&x, &y, &config).unwrap();
        assert_eq!(model.predict_values(&x).unwrap(), y);
    }

    #[test]
    fn uniform_average_of_neighbours() {
        let x = array![[0.0], [1.0], [10.0]];
        let y = vec![2.0, 4.0, 100.0];
        let config = KnnConfig {
            n_neighbors: 2,
            ..KnnConfig::default()
        };
        let model = KnnRegressor::fit(&x, &y, &config).unwrap();
        let predicted = model.predict_values(&array![[0.4]]).unwrap();
        assert!((predicted[0] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn more_neighbours_than_samples_fails() {
        let x = array![[0.0], [1.0]];
        match KnnRegressor::fit(&x, &[1.0, 2.0], &KnnConfig::default()) {
            Err(err) => assert!(matches!(err, DispatchError::Fit { .. })),
            Ok(_) => panic!("five neighbours cannot be drawn from two samples"),
        }
    }
}
