//! Task types and the classification/regression guess made from label data.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::labels::Labels;

/// Whether a model predicts discrete classes or continuous values.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Classification,
    Regression,
}

impl TaskType {
    pub const ALL: [TaskType; 2] = [TaskType::Classification, TaskType::Regression];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Classification => "classification",
            TaskType::Regression => "regression",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classification" => Ok(TaskType::Classification),
            "regression" => Ok(TaskType::Regression),
            _ => Err(DispatchError::InvalidTaskType(s.to_string())),
        }
    }
}

/// Guess the task type from the labels alone.
///
/// Integer labels are treated as classes when there are fewer distinct values
/// than the square root of the sample count; any other numeric labels are
/// regression targets. Booleans, categoricals and text are always classes.
///
/// This is a heuristic. A float column holding whole numbers is still
/// regression because only the element type is inspected, and an empty
/// integer column is regression since `0 < sqrt(0)` does not hold.
pub fn infer_task_type(labels: &Labels) -> TaskType {
    match labels {
        Labels::Integer(values) => {
            let distinct = values.iter().collect::<HashSet<_>>().len();
            let threshold = (values.len() as f64).sqrt();
            log::debug!(
                "Integer labels: {} distinct values over {} samples (threshold {:.3})",
                distinct,
                values.len(),
                threshold
            );
            if (distinct as f64) < threshold {
                TaskType::Classification
            } else {
                TaskType::Regression
            }
        }
        Labels::Float(_) => TaskType::Regression,
        Labels::Boolean(_) | Labels::Categorical(_) | Labels::Text(_) => {
            TaskType::Classification
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Classification".parse::<TaskType>().unwrap(),
            TaskType::Classification
        );
        assert_eq!(" regression ".parse::<TaskType>().unwrap(), TaskType::Regression);
    }

    #[test]
    fn rejects_other_tasks() {
        let err = "clustering".parse::<TaskType>().unwrap_err();
        assert_eq!(err, DispatchError::InvalidTaskType("clustering".into()));
    }

    #[test]
    fn distinct_count_must_be_strictly_below_sqrt() {
        // 9 samples, 3 distinct values: 3 < 3 is false
        let labels = Labels::Integer(vec![0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(infer_task_type(&labels), TaskType::Regression);

        // 10 samples, 3 distinct values: 3 < 3.16
        let labels = Labels::Integer(vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(infer_task_type(&labels), TaskType::Classification);
    }

    #[test]
    fn whole_number_floats_are_regression() {
        let labels = Labels::Float(vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        assert_eq!(infer_task_type(&labels), TaskType::Regression);
    }

    #[test]
    fn empty_labels() {
        assert_eq!(infer_task_type(&Labels::Integer(vec![])), TaskType::Regression);
        assert_eq!(infer_task_type(&Labels::Text(vec![])), TaskType::Classification);
    }
}
