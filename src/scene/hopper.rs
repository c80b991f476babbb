use std::f64::consts::FRAC_PI_4;

use crate::error::{OperationError, Result};
use crate::geometry::{Path, PipeSegment};
use crate::math::{up, Point3, Vector3};
use crate::mesh::Model;
use crate::operations::sweep::{ease_in_cubic, ease_out_cubic, BuildPipe, GradientSegment, PipeParams};

use super::Spout;

/// Diameter of the hose openings at the top and bottom of a hopper.
pub const SPOUT_OPENING: f64 = 0.1;

const LIP_SIZE: f64 = SPOUT_OPENING + 0.1;
const LINKAGE_HEIGHT: f64 = 0.1;
const CAP_HEIGHT: f64 = 0.5;
const LEG_RADIUS: f64 = 0.05;

/// A bin on legs that tapers to a spout at the bottom and narrows to a hose
/// inlet at the top.
#[derive(Debug, Clone, Copy)]
pub struct Hopper {
    /// Height of the cylindrical bin.
    pub bin_height: f64,
    /// Height of the tapered section below the bin.
    pub taper_height: f64,
    /// Bin radius.
    pub radius: f64,
    /// Ground position below the hopper's axis.
    pub position: Point3,
    /// Clearance between the ground and the bottom spout.
    pub height_off_ground: f64,
}

impl Hopper {
    /// Checks that the dimensions leave room for the spout and linkage.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or bin height is not positive, or the
    /// taper is too short to hold the bottom spout.
    pub fn validate(&self) -> Result<()> {
        if !(self.radius > 0.0 && self.bin_height > 0.0) {
            return Err(OperationError::InvalidInput(
                "hopper radius and bin height must be positive".to_owned(),
            )
            .into());
        }
        if self.taper_height - LINKAGE_HEIGHT <= 0.201 {
            return Err(OperationError::InvalidInput(format!(
                "hopper taper height {} leaves no room for the bottom spout",
                self.taper_height
            ))
            .into());
        }
        Ok(())
    }

    /// Returns where hoses attach to the hopper.
    #[must_use]
    pub fn spouts(&self) -> Vec<Spout> {
        vec![Spout {
            opening: SPOUT_OPENING,
            entrance: self.at_height(self.height_off_ground + 0.01),
            out_direction: -up(),
        }]
    }

    /// Builds the hopper body and its four legs.
    ///
    /// The body is one varying-radius pipe: a lipped bottom spout, a taper
    /// easing out into the bin, the bin itself, a cap easing in towards the
    /// top opening, and a lipped top spout.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or a pipe cannot be
    /// built.
    pub fn to_model(&self, params: PipeParams) -> Result<Model> {
        self.validate()?;
        let h = self.height_off_ground;

        let bottom = PipeSegment::from_samples([
            (self.at_height(h), 0.0),
            (self.at_height(h + 0.01), LIP_SIZE),
            (self.at_height(h + 0.1), LIP_SIZE),
            (self.at_height(h + 0.101), LIP_SIZE - SPOUT_OPENING),
            (self.at_height(h + 0.201), LIP_SIZE - SPOUT_OPENING),
            (
                self.at_height(h + self.taper_height - LINKAGE_HEIGHT),
                self.radius * 0.95,
            ),
        ]);

        let bin_bottom = self.at_height(h + self.taper_height);
        let bin_top = self.at_height(h + self.taper_height + self.bin_height);
        let bin = PipeSegment::from_samples([(bin_bottom, self.radius), (bin_top, self.radius)]);

        let (linkage_start, linkage_radius) = endpoint(bottom.last())?;
        let linkage = GradientSegment::new(
            linkage_start,
            bin_bottom,
            linkage_radius,
            self.radius,
            10,
            ease_out_cubic,
        )
        .execute()?;

        let cap_top = bin_top + up() * CAP_HEIGHT;
        let cap = GradientSegment::new(bin_top, cap_top, self.radius, SPOUT_OPENING, 30, ease_in_cubic)
            .execute()?;

        let top_spout = PipeSegment::from_samples([
            (cap_top, SPOUT_OPENING),
            (cap_top + up() * 0.01, LIP_SIZE),
            (cap_top + up() * 0.1, LIP_SIZE),
            (cap_top + up() * 0.101, 0.0),
        ]);

        let body = BuildPipe::from_segment(
            bottom.then(linkage).then(bin).then(cap).then(top_spout),
            params,
        )
        .execute()?;

        let leg = BuildPipe::uniform(
            Path::new(vec![
                Point3::origin(),
                Point3::origin() + up() * (h + self.taper_height + 0.1),
            ]),
            LEG_RADIUS,
            params,
        )
        .execute()?;

        let offset = FRAC_PI_4.sin() * self.radius - LEG_RADIUS;
        let base = self.position.coords;
        Ok(body
            .merge(leg.translate(&(Vector3::new(offset, 0.0, offset) + base)))
            .merge(leg.translate(&(Vector3::new(offset, 0.0, -offset) + base)))
            .merge(leg.translate(&(Vector3::new(-offset, 0.0, -offset) + base)))
            .merge(leg.translate(&(Vector3::new(-offset, 0.0, offset) + base))))
    }

    fn at_height(&self, y: f64) -> Point3 {
        self.position + up() * y
    }
}

fn endpoint(sample: Option<(Point3, f64)>) -> Result<(Point3, f64)> {
    sample.ok_or_else(|| OperationError::InvalidInput("empty pipe segment".to_owned()).into())
}
