use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid axis {0}: expected 0 (column) or 1 (row)")]
pub struct InvalidAxis(pub i64);

/// Direction of the L1 normalization.
///
/// Serialized as the integer selector used by config files and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Axis {
    /// Selector `0`: each column is divided by its own absolute sum.
    Column,
    /// Selector `1`: each row is divided by its own absolute sum.
    #[default]
    Row,
}

impl Axis {
    pub fn index(self) -> i64 {
        match self {
            Axis::Column => 0,
            Axis::Row => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row => "row",
        }
    }
}

impl TryFrom<i64> for Axis {
    type Error = InvalidAxis;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::Column),
            1 => Ok(Axis::Row),
            other => Err(InvalidAxis(other)),
        }
    }
}

impl From<Axis> for i64 {
    fn from(value: Axis) -> Self {
        value.index()
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}
