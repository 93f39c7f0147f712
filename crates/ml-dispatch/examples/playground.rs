use ml_dispatch::{fit, list_models, param_blueprint, predict, Labels};
use ndarray::Array2;

fn main() {
    env_logger::init();

    let models = list_models();
    println!("{:?}", models.classification);

    let rf_params = param_blueprint("random_forest", "classification")
        .expect("random_forest has classification defaults");
    println!("\nRandom forest Classification model default parameters:");
    println!("{}", serde_json::Value::Object(rf_params.clone()));

    // Tiny synthetic dataset: 12 samples, 2 features, labels alternate 0/1
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for i in 0..12 {
        let shift = i as f64 * 0.1;
        if i % 2 == 0 {
            rows.extend_from_slice(&[1.0 + shift, 0.0]);
            labels.push(1i64);
        } else {
            rows.extend_from_slice(&[0.0, 1.0 + shift]);
            labels.push(0i64);
        }
    }
    let x = Array2::from_shape_vec((12, 2), rows).expect("failed to create feature matrix");
    let y = Labels::Integer(labels);

    let model = fit(&x, &y, "random_forest", Some(&rf_params)).expect("fit failed");
    println!("\nInferred task: {}", model.task());

    match predict(&model, &x) {
        Ok(predictions) => println!("Predictions: {:?}", predictions),
        Err(e) => println!("{}", e),
    }
}
