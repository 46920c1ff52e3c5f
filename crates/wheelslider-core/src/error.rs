use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Range bounds and step must be finite numbers")]
    NonFinite,

    #[error("Invalid range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("Empty range: lower and upper bound are both {0}")]
    EmptyRange(f64),

    #[error("Invalid step: {0} (must be greater than zero)")]
    InvalidStep(f64),

    #[error("Step {step} is larger than the range width {width}")]
    StepExceedsRange { step: f64, width: f64 },

    #[error("Invalid step count: must be at least 1")]
    InvalidStepCount,

    #[error("Too many steps: {0} intervals (at most {max})", max = crate::mapping::MAX_STEP_COUNT)]
    TooManySteps(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
