pub mod estimator_trait;
pub mod factory;
pub mod fitted;
pub mod knn;
pub mod random_forest;
pub mod svm;
pub mod utils;
