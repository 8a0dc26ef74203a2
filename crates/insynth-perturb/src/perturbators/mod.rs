//! The perturbator catalog.
//!
//! Six parameterized perturbators draw one value per firing and map it into
//! their effect's domain; three banked perturbators draw a recording instead.

pub mod banked;
pub mod clipping;
pub mod compression;
pub mod echo;
pub mod pitch;
pub mod volume;
pub mod white_noise;

pub use banked::{BackgroundNoisePerturbator, ImpulseResponsePerturbator, ShortNoisePerturbator};
pub use clipping::ClippingPerturbator;
pub use compression::CompressionPerturbator;
pub use echo::{EchoPerturbator, echo};
pub use pitch::PitchPerturbator;
pub use volume::VolumePerturbator;
pub use white_noise::WhiteNoisePerturbator;
