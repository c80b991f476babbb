use crate::error::{OperationError, Result};
use crate::operations::sweep::cross_section::check_sides;

/// Dimensions of a looping platform and its railings.
#[derive(Debug, Clone, Copy)]
pub struct PlatformParams {
    /// Walkway width, centred on the path.
    pub width: f64,
    /// Radius of railing and post pipes.
    pub railing_radius: f64,
    /// Ring side count for railing and post pipes.
    pub railing_sides: usize,
    /// Height of the top railing above the walkway.
    pub railing_height: f64,
    /// How far below the top railing the second railing runs.
    pub lower_railing_drop: f64,
    /// Height of each support post.
    pub post_height: f64,
    /// Largest allowed distance between neighbouring posts.
    pub max_post_spacing: f64,
}

impl Default for PlatformParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            railing_radius: 0.05,
            railing_sides: 64,
            railing_height: 1.0,
            lower_railing_drop: 0.5,
            post_height: 1.0,
            max_post_spacing: 2.0,
        }
    }
}

impl PlatformParams {
    /// Creates default parameters for a walkway of the given width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        let params = Self {
            width,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns half the walkway width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Checks that every dimension is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the width, railing radius or post spacing is not
    /// positive and finite, or the railing side count is below 3.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("platform width", self.width),
            ("railing radius", self.railing_radius),
            ("post spacing", self.max_post_spacing),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(OperationError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                ))
                .into());
            }
        }
        check_sides(self.railing_sides)
    }
}
