//! Scalar-or-list input normalization.
//!
//! Most Seokit option fields accept either a single value or a list of
//! values. [`OneOrMany`] models that shape and [`normalize`] flattens an
//! optional field into an ordered slice for the generators to walk.

use serde::{Deserialize, Serialize};

/// A field value that is either a single item or an ordered list.
///
/// Deserializes untagged, so both `"*"` and `["googlebot", "*"]` are
/// accepted wherever a `OneOrMany<String>` field appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// An ordered list of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the contained values as an ordered slice.
    ///
    /// A `One` becomes a one-element slice; a `Many` keeps its order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Number of contained values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether no values are contained (an empty `Many`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Normalize an optional scalar-or-list field into an ordered slice.
///
/// An absent field normalizes to the empty slice. Order is preserved
/// and nothing is deduplicated.
#[must_use]
pub fn normalize<T>(field: Option<&OneOrMany<T>>) -> &[T] {
    field.map_or(&[], OneOrMany::as_slice)
}
