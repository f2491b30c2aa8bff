use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference from a route or shortcut to another layer of the network.
///
/// Darknet encodes both forms as one integer: negative values count back
/// from the referencing layer, non-negative values are absolute indices from
/// the first layer after `[net]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRef {
    /// `n` layers before the referencing layer; rendered as `-n`.
    ///
    /// `n` must be at least 1. `Back(0)` renders `-0`, which darknet reads
    /// as absolute index 0 rather than the referencing layer itself.
    Back(usize),
    /// Zero-based index from the start of the layer sequence.
    Absolute(usize),
}

impl LayerRef {
    /// Absolute index this reference points at when held by the layer at
    /// `position`. `None` if it would point before the first layer.
    pub fn resolve(self, position: usize) -> Option<usize> {
        match self {
            LayerRef::Back(n) => position.checked_sub(n),
            LayerRef::Absolute(index) => Some(index),
        }
    }
}

impl From<i64> for LayerRef {
    fn from(offset: i64) -> Self {
        if offset < 0 {
            LayerRef::Back(offset.unsigned_abs() as usize)
        } else {
            LayerRef::Absolute(offset as usize)
        }
    }
}

impl fmt::Display for LayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerRef::Back(n) => write!(f, "-{n}"),
            LayerRef::Absolute(index) => write!(f, "{index}"),
        }
    }
}
