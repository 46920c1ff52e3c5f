//! Conversion between a value in a closed range and a tick index
//!
//! A slider is described by a [`ValueRange`] and a [`StepSpec`]. Validation
//! happens once in [`SliderModel::new`]; afterwards every conversion is total
//! and never panics, even for values outside the range.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tolerance used when a ratio lands within floating-point noise of an integer
const LATTICE_EPSILON: f64 = 1e-9;

/// Ticks at multiples of this index are drawn as major ticks
pub const MAJOR_TICK_INTERVAL: usize = 5;

/// Largest accepted number of intervals
pub const MAX_STEP_COUNT: usize = (u32::MAX - 1) as usize;

/// Closed numeric interval `lower..=upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub lower: f64,
    pub upper: f64,
}

impl ValueRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Distance between the two bounds
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `value` lies inside the range (bounds included)
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Clamp `value` into the range
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.upper)
    }
}

/// Granularity of the range, given either as an increment or as an interval count
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSpec {
    /// Distance between two neighbouring ticks
    Step(f64),
    /// Number of intervals between the lower and upper bound
    Count(usize),
}

/// How a value that falls between two ticks is mapped to an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexRounding {
    /// Truncate toward zero (a value between ticks maps to the lower tick)
    #[default]
    Truncate,
    /// Round to the nearest tick
    Nearest,
}

/// Validated description of a stepped range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderModel {
    range: ValueRange,
    step: f64,
    step_count: usize,
    rounding: IndexRounding,
}

impl SliderModel {
    /// Build a model from a range and a step specification
    ///
    /// Rejects non-finite inputs, inverted or empty ranges, non-positive steps
    /// and specifications that would produce zero intervals or more than
    /// [`MAX_STEP_COUNT`].
    pub fn new(range: ValueRange, spec: StepSpec) -> Result<Self> {
        if !range.lower.is_finite() || !range.upper.is_finite() {
            return Err(Error::NonFinite);
        }
        if range.lower > range.upper {
            return Err(Error::InvalidRange {
                lower: range.lower,
                upper: range.upper,
            });
        }
        if range.lower == range.upper {
            return Err(Error::EmptyRange(range.lower));
        }

        let width = range.width();
        let (step, step_count) = match spec {
            StepSpec::Step(step) => {
                if !step.is_finite() {
                    return Err(Error::NonFinite);
                }
                if step <= 0.0 {
                    return Err(Error::InvalidStep(step));
                }
                let count = (width / step + LATTICE_EPSILON).floor();
                if count < 1.0 {
                    return Err(Error::StepExceedsRange { step, width });
                }
                if count > MAX_STEP_COUNT as f64 {
                    return Err(Error::TooManySteps(count));
                }
                (step, count as usize)
            }
            StepSpec::Count(count) => {
                if count == 0 {
                    return Err(Error::InvalidStepCount);
                }
                if count > MAX_STEP_COUNT {
                    return Err(Error::TooManySteps(count as f64));
                }
                (width / count as f64, count)
            }
        };

        Ok(Self {
            range,
            step,
            step_count,
            rounding: IndexRounding::default(),
        })
    }

    /// Use a different rounding mode for [`SliderModel::index_for_value`]
    pub fn with_rounding(mut self, rounding: IndexRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn rounding(&self) -> IndexRounding {
        self.rounding
    }

    /// Number of intervals; the largest valid tick index
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Number of rendered ticks (`step_count + 1`)
    #[inline]
    pub fn tick_count(&self) -> usize {
        self.step_count + 1
    }

    /// Tick index for `value`, unclamped
    ///
    /// Out-of-range values produce indices outside `0..=step_count`; callers
    /// that address ticks should use [`SliderModel::clamped_index_for_value`].
    pub fn index_for_value(&self, value: f64) -> i64 {
        let raw = (value - self.range.lower) / self.step;
        let nearest = raw.round();
        if (raw - nearest).abs() < LATTICE_EPSILON {
            return nearest as i64;
        }
        match self.rounding {
            IndexRounding::Truncate => raw.trunc() as i64,
            IndexRounding::Nearest => nearest as i64,
        }
    }

    /// Tick index for `value`, clamped to `0..=step_count`
    pub fn clamped_index_for_value(&self, value: f64) -> usize {
        self.clamp_index(self.index_for_value(value))
    }

    /// Clamp an arbitrary index to the valid tick range
    #[inline]
    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.step_count as i64) as usize
    }

    /// Value represented by tick `index`
    #[inline]
    pub fn value_for_index(&self, index: usize) -> f64 {
        index as f64 * self.step + self.range.lower
    }

    /// Value after quantizing `value` onto the tick lattice (clamped)
    pub fn snap_value(&self, value: f64) -> f64 {
        self.value_for_index(self.clamped_index_for_value(value))
    }

    /// Whether tick `index` is a major (long, fully opaque) tick
    #[inline]
    pub fn is_major(&self, index: usize) -> bool {
        index % MAJOR_TICK_INTERVAL == 0
    }

    /// Every tick with the value it represents
    pub fn lattice(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..=self.step_count).map(move |index| (index, self.value_for_index(index)))
    }
}
