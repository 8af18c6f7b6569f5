//! Id and label lists
//!
//! Bulk endpoints (delete, run, stop, enable, disable) always receive a JSON
//! array. [`IdList`] is the single parameter type for those calls; the `From`
//! impls let callers pass one id or many without a separate method.

use serde::{Deserialize, Serialize};

/// One or many server-assigned ids, always sent as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdList(Vec<i64>);

impl IdList {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl From<i64> for IdList {
    fn from(id: i64) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<i64>> for IdList {
    fn from(ids: Vec<i64>) -> Self {
        Self(ids)
    }
}

impl From<&[i64]> for IdList {
    fn from(ids: &[i64]) -> Self {
        Self(ids.to_vec())
    }
}

impl From<&Vec<i64>> for IdList {
    fn from(ids: &Vec<i64>) -> Self {
        Self(ids.clone())
    }
}

impl<const N: usize> From<[i64; N]> for IdList {
    fn from(ids: [i64; N]) -> Self {
        Self(ids.to_vec())
    }
}

impl FromIterator<i64> for IdList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One or many job labels, always sent as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelList(Vec<String>);

impl LabelList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LabelList {
    fn from(label: &str) -> Self {
        Self(vec![label.to_string()])
    }
}

impl From<String> for LabelList {
    fn from(label: String) -> Self {
        Self(vec![label])
    }
}

impl From<Vec<String>> for LabelList {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl From<Vec<&str>> for LabelList {
    fn from(labels: Vec<&str>) -> Self {
        Self(labels.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for LabelList {
    fn from(labels: &[&str]) -> Self {
        Self(labels.iter().map(|l| (*l).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LabelList {
    fn from(labels: [&str; N]) -> Self {
        Self(labels.iter().map(|l| (*l).to_string()).collect())
    }
}

/// Body of `POST`/`DELETE /open/crons/labels`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelChange {
    pub ids: IdList,
    pub labels: LabelList,
}

/// Update payload: the create payload plus the target id
///
/// Serializes as `{"id": .., <fields of T>}`.
#[derive(Debug, Clone, Serialize)]
pub struct WithId<'a, T: Serialize> {
    pub id: i64,
    #[serde(flatten)]
    pub inner: &'a T,
}

impl<'a, T: Serialize> WithId<'a, T> {
    pub fn new(id: i64, inner: &'a T) -> Self {
        Self { id, inner }
    }
}
