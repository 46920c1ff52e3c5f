use serde::{Deserialize, Serialize};

/// Direction the tick track runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Pick the component along the track from a `(x, y)` pair
    #[inline]
    pub fn main<T>(&self, x: T, y: T) -> T {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// Pick the component across the track from a `(x, y)` pair
    #[inline]
    pub fn cross<T>(&self, x: T, y: T) -> T {
        match self {
            Axis::Horizontal => y,
            Axis::Vertical => x,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
