pub mod cross_section;
pub mod gradient;
mod pipe;
mod stitch;

pub use cross_section::sample_ring;
pub use gradient::{ease_in_cubic, ease_out_cubic, linear, GradientSegment};
pub use pipe::{BuildPipe, PipeParams};
pub use stitch::stitch_rings;
