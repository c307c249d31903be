//! Path metric returned by the search strategies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A path metric that may be infinite.
///
/// Every finite value orders below [`Distance::Infinite`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(usize),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// The finite value, if any.
    pub fn value(&self) -> Option<usize> {
        match self {
            Distance::Finite(n) => Some(*n),
            Distance::Infinite => None,
        }
    }

    /// One more step; infinity absorbs.
    pub fn step(&self) -> Distance {
        match self {
            Distance::Finite(n) => Distance::Finite(n + 1),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<usize> for Distance {
    fn from(value: usize) -> Self {
        Distance::Finite(value)
    }
}

impl From<Option<usize>> for Distance {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(n) => write!(f, "{n}"),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
