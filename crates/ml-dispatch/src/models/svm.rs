use linfa::dataset::Pr;
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::{Svm, SvmParams};
use ndarray::{Array1, Array2};
use rayon::prelude::*;

use crate::config::{Gamma, GammaRule, Kernel, SvmConfig};
use crate::error::DispatchError;
use crate::models::estimator_trait::{Classifier, Regressor};
use crate::registry::ModelKind;

/// Resolve the RBF coefficient against the training matrix.
fn resolve_gamma(gamma: Gamma, x: &Array2<f64>) -> f64 {
    let n_features = x.ncols().max(1) as f64;
    match gamma {
        Gamma::Value(value) => value,
        Gamma::Rule(GammaRule::Auto) => 1.0 / n_features,
        Gamma::Rule(GammaRule::Scale) => {
            let variance = x.var(0.0);
            if variance > 0.0 {
                1.0 / (n_features * variance)
            } else {
                1.0
            }
        }
    }
}

/// Apply solver tolerance and kernel choice shared by classification and regression.
fn configure<T>(params: SvmParams<f64, T>, config: &SvmConfig, x: &Array2<f64>) -> SvmParams<f64, T> {
    let params = params.eps(config.tol);
    match config.kernel {
        Kernel::Linear => params.linear_kernel(),
        // linfa's gaussian kernel is exp(-|x - y|^2 / eps), so eps = 1 / gamma
        Kernel::Rbf => params.gaussian_kernel(1.0 / resolve_gamma(config.gamma, x)),
        Kernel::Poly => params.polynomial_kernel(config.coef0, config.degree as f64),
    }
}

fn warn_unused_seed(config: &SvmConfig) {
    if config.random_state.is_some() {
        log::warn!("support_vector_machine ignores random_state; the solver is deterministic");
    }
}

/// Support vector classifier with Platt-calibrated outputs.
///
/// Two classes use a single machine. More classes train one machine per class
/// (one-vs-rest) in parallel and predict the class whose machine is most
/// confident.
pub struct SvmClassifier {
    machines: Vec<Svm<f64, Pr>>,
    n_classes: usize,
}

impl SvmClassifier {
    pub fn fit(
        x: &Array2<f64>,
        y: &[usize],
        n_classes: usize,
        config: &SvmConfig,
    ) -> Result<Self, DispatchError> {
        if n_classes < 2 {
            return Err(DispatchError::fit(
                ModelKind::SupportVectorMachine,
                format!(
                    "The number of classes has to be greater than one; got {} class",
                    n_classes
                ),
            ));
        }
        warn_unused_seed(config);

        let params = configure(
            Svm::<f64, Pr>::params().pos_neg_weights(config.c, config.c),
            config,
            x,
        );

        // With two classes the machine for class 1 decides both.
        let positives: Vec<usize> = if n_classes == 2 {
            vec![1]
        } else {
            (0..n_classes).collect()
        };
        log::debug!("Training {} support vector machine(s)", positives.len());

        let machines = positives
            .into_par_iter()
            .map(|positive| {
                let targets: Array1<bool> = y.iter().map(|&class| class == positive).collect();
                let dataset = Dataset::new(x.to_owned(), targets);
                <SvmParams<f64, Pr> as Fit<_, _, _>>::fit(&params, &dataset)
                    .map_err(|e| DispatchError::fit(ModelKind::SupportVectorMachine, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SvmClassifier {
            machines,
            n_classes,
        })
    }
}

impl Classifier for SvmClassifier {
    fn predict_classes(&self, x: &Array2<f64>) -> Result<Vec<usize>, DispatchError> {
        let probabilities: Vec<Array1<Pr>> = self
            .machines
            .iter()
            .map(|machine| -> Array1<Pr> { machine.predict(x) })
            .collect();

        if self.n_classes == 2 {
            return Ok(probabilities[0]
                .iter()
                .map(|p| if **p >= 0.5 { 1 } else { 0 })
                .collect());
        }

        let predictions = (0..x.nrows())
            .map(|row| {
                let mut best = 0;
                for class in 1..self.n_classes {
                    if *probabilities[class][row] > *probabilities[best][row] {
                        best = class;
                    }
                }
                best
            })
            .collect();
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "support_vector_classifier"
    }
}

/// Epsilon support vector regression.
pub struct SvmRegressor {
    machine: Svm<f64, f64>,
}

impl SvmRegressor {
    pub fn fit(x: &Array2<f64>, y: &[f64], config: &SvmConfig) -> Result<Self, DispatchError> {
        warn_unused_seed(config);

        let params = configure(
            Svm::<f64, f64>::params().c_svr(config.c, Some(config.epsilon)),
            config,
            x,
        );
        let dataset = Dataset::new(x.to_owned(), Array1::from(y.to_vec()));
        let machine = <SvmParams<f64, f64> as Fit<_, _, _>>::fit(&params, &dataset)
            .map_err(|e| DispatchError::fit(ModelKind::SupportVectorMachine, e))?;
        Ok(SvmRegressor { machine })
    }
}

impl Regressor for SvmRegressor {
    fn predict_values(&self, x: &Array2<f64>) -> Result<Vec<f64>, DispatchError> {
        let predictions: Array1<f64> = self.machine.predict(x);
        Ok(predictions.to_vec())
    }

    fn name(&self) -> &str {
        "support_vector_regressor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn separable(n_classes: usize) -> (Array2<f64>, Vec<usize>) {
        let centers = [(0.0, 0.0), (5.0, 5.0), (0.0, 5.0)];
        let mut rows = Vec::new();
        let mut y = Vec::new();
        for i in 0..30 {
            let class = i % n_classes;
            let (cx, cy) = centers[class];
            let offset = (i / n_classes) as f64 * 0.05;
            rows.extend_from_slice(&[cx + offset, cy - offset]);
            y.push(class);
        }
        (Array2::from_shape_vec((30, 2), rows).unwrap(), y)
    }

    #[test]
    fn gamma_scale_uses_feature_variance() {
        let x = Array2::from_shape_vec((2, 2), vec![0.0, 0.0, 2.0, 2.0]).unwrap();
        // var = 1.0 over all four entries
        assert!((resolve_gamma(Gamma::Rule(GammaRule::Scale), &x) - 0.5).abs() < 1e-12);
        assert!((resolve_gamma(Gamma::Rule(GammaRule::Auto), &x) - 0.5).abs() < 1e-12);
        let constant = Array2::from_elem((3, 2), 4.0);
        assert_eq!(resolve_gamma(Gamma::Rule(GammaRule::Scale), &constant), 1.0);
    }

    #[test]
    fn binary_classifier_predicts_every_row() {
        let (x, y) = separable(2);
        let config = SvmConfig {
            kernel: Kernel::Linear,
            ..SvmConfig::default()
        };
        let model = SvmClassifier::fit(&x, &y, 2, &config).unwrap();
        let predicted = model.predict_classes(&x).unwrap();
        assert_eq!(predicted.len(), y.len());
        assert!(predicted.iter().all(|&c| c < 2));
    }

    #[test]
    fn one_vs_rest_handles_three_classes() {
        let (x, y) = separable(3);
        let model = SvmClassifier::fit(&x, &y, 3, &SvmConfig::default()).unwrap();
        assert_eq!(model.machines.len(), 3);
        let predicted = model.predict_classes(&x).unwrap();
        assert_eq!(predicted.len(), 30);
        assert!(predicted.iter().all(|&c| c < 3));
    }

    #[test]
    fn single_class_is_rejected() {
        let (x, _) = separable(2);
        let y = vec![0; 30];
        match SvmClassifier::fit(&x, &y, 1, &SvmConfig::default()) {
            Err(err) => assert!(matches!(err, DispatchError::Fit { .. })),
            Ok(_) => panic!("a single class must not train"),
        }
    }

    #[test]
    fn regressor_predicts_every_row() {
        let (x, _) = separable(2);
        let y: Vec<f64> = x.rows().into_iter().map(|r| r[0] + r[1]).collect();
        let model = SvmRegressor::fit(&x, &y, &SvmConfig::default()).unwrap();
        assert_eq!(model.predict_values(&x).unwrap().len(), 30);
    }
}
