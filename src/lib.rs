pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod scene;

pub use error::{PipeworksError, Result};
