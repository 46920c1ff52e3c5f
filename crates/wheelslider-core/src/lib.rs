pub mod axis;
pub mod binding;
pub mod config;
pub mod decay;
pub mod error;
pub mod gesture;
pub mod mapping;
pub mod snap;

pub use axis::Axis;
pub use binding::{NoFeedback, ResyncPolicy, ScrollPosition, ScrollPositionBinding, SelectionFeedback};
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use decay::{DecayProfile, RenderStyle, TickAppearance, TickContext};
pub use error::{Error, Result};
pub use mapping::{IndexRounding, SliderModel, StepSpec, ValueRange};
