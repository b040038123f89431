use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a rendered point, derived from its record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub usize);

/// Identifier of a hover label, derived from the same record index as its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelId(pub usize);

impl LabelId {
    #[must_use]
    pub fn for_point(point: PointId) -> Self {
        Self(point.0)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point-{}", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "labels-{}", self.0)
    }
}

/// Parallel mapping from point index to the label it reveals on hover.
///
/// Rebuilt together with the points so a stale mapping can never outlive
/// the subtree it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverIndex {
    labels: Vec<LabelId>,
}

impl HoverIndex {
    /// Index for `count` points, each paired with the label of the same index.
    #[must_use]
    pub fn for_points(count: usize) -> Self {
        Self {
            labels: (0..count).map(|i| LabelId::for_point(PointId(i))).collect(),
        }
    }

    #[must_use]
    pub fn label_for(&self, point: PointId) -> Option<LabelId> {
        self.labels.get(point.0).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
