//! Typed label vectors and the encoder mapping class labels to dense indices.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// A 1-D label vector tagged with its element type.
///
/// The element type drives task inference, so a column of whole numbers
/// stored as `Float` behaves differently from the same values as `Integer`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum Labels {
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Boolean(Vec<bool>),
    /// Values of a categorical column; never treated as numeric.
    Categorical(Vec<String>),
    Text(Vec<String>),
}

impl Labels {
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Labels::Categorical(values.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Labels::Integer(v) => v.len(),
            Labels::Float(v) => v.len(),
            Labels::Boolean(v) => v.len(),
            Labels::Categorical(v) | Labels::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Labels::Integer(_) | Labels::Float(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Labels::Integer(_) => "integer",
            Labels::Float(_) => "float",
            Labels::Boolean(_) => "boolean",
            Labels::Categorical(_) => "categorical",
            Labels::Text(_) => "text",
        }
    }

    /// Gather the entries at `indices` into a new vector of the same kind.
    pub fn select(&self, indices: &[usize]) -> Labels {
        fn pick<T: Clone>(values: &[T], indices: &[usize]) -> Vec<T> {
            indices.iter().map(|&i| values[i].clone()).collect()
        }
        match self {
            Labels::Integer(v) => Labels::Integer(pick(v, indices)),
            Labels::Float(v) => Labels::Float(pick(v, indices)),
            Labels::Boolean(v) => Labels::Boolean(pick(v, indices)),
            Labels::Categorical(v) => Labels::Categorical(pick(v, indices)),
            Labels::Text(v) => Labels::Text(pick(v, indices)),
        }
    }

    /// Numeric labels as regression targets.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Labels::Integer(v) => Some(v.iter().map(|&x| x as f64).collect()),
            Labels::Float(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl From<Vec<i64>> for Labels {
    fn from(value: Vec<i64>) -> Self {
        Labels::Integer(value)
    }
}

impl From<Vec<i32>> for Labels {
    fn from(value: Vec<i32>) -> Self {
        Labels::Integer(value.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for Labels {
    fn from(value: Vec<f64>) -> Self {
        Labels::Float(value)
    }
}

impl From<Vec<bool>> for Labels {
    fn from(value: Vec<bool>) -> Self {
        Labels::Boolean(value)
    }
}

impl From<Vec<String>> for Labels {
    fn from(value: Vec<String>) -> Self {
        Labels::Text(value)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(value: Vec<&str>) -> Self {
        Labels::Text(value.into_iter().map(str::to_string).collect())
    }
}

/// Maps class labels to `0..n_classes` and back.
///
/// Classes are the sorted distinct label values, so index order is stable
/// for a given set of labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    classes: Labels,
}

impl LabelEncoder {
    /// Learn the classes in `labels` and return the encoded index of every entry.
    pub fn fit(labels: &Labels) -> Result<(Self, Vec<usize>), DispatchError> {
        let (classes, indices) = match labels {
            Labels::Integer(v) => {
                let (classes, idx) = encode(v, |a, b| a.cmp(b));
                (Labels::Integer(classes), idx)
            }
            Labels::Float(v) => {
                if v.iter().any(|x| x.is_nan()) {
                    return Err(DispatchError::fit(
                        "labels",
                        "class labels must not contain NaN",
                    ));
                }
                let (classes, idx) = encode(v, |a, b| a.total_cmp(b));
                (Labels::Float(classes), idx)
            }
            Labels::Boolean(v) => {
                let (classes, idx) = encode(v, |a, b| a.cmp(b));
                (Labels::Boolean(classes), idx)
            }
            Labels::Categorical(v) => {
                let (classes, idx) = encode(v, |a, b| a.cmp(b));
                (Labels::Categorical(classes), idx)
            }
            Labels::Text(v) => {
                let (classes, idx) = encode(v, |a, b| a.cmp(b));
                (Labels::Text(classes), idx)
            }
        };
        Ok((LabelEncoder { classes }, indices))
    }

    pub fn classes(&self) -> &Labels {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn decode(&self, indices: &[usize]) -> Result<Labels, DispatchError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_classes()) {
            return Err(DispatchError::prediction(format!(
                "model produced class index {} but only {} classes were seen during fit",
                bad,
                self.n_classes()
            )));
        }
        Ok(self.classes.select(indices))
    }
}

fn encode<T, F>(values: &[T], cmp: F) -> (Vec<T>, Vec<usize>)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut classes = values.to_vec();
    classes.sort_by(&cmp);
    classes.dedup_by(|a, b| cmp(&*a, &*b) == Ordering::Equal);

    let indices = values
        .iter()
        .map(|v| {
            classes
                .binary_search_by(|c| cmp(c, v))
                .unwrap_or_else(|insert_at| insert_at)
        })
        .collect();
    (classes, indices)
}
