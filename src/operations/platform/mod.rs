mod align;
mod looping;
mod params;
pub mod railing;

pub use align::{AlignSegments, SCALE_OUTWARDS};
pub use looping::BuildLoopingPlatform;
pub use params::PlatformParams;
