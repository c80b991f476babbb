mod path;
mod pipe_segment;
mod segment;

pub use path::{Path, RadiusProfile};
pub use pipe_segment::PipeSegment;
pub use segment::Segment3;
