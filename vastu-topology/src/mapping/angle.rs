//! Wrapped heading angle.

use std::f32::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Angle stored in degrees, always wrapped into `[0, 360)`.
///
/// In map coordinates 0° points down (+row) and angles grow
/// counter-clockwise, so 90° points right (+col):
///
/// ```text
///        180
///         ▲
///   270 ◄─o─► 90
///         ▼
///         0
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    /// Zero angle (pointing down)
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    /// Create from degrees; any finite value is wrapped into range.
    pub fn from_degrees(degrees: f32) -> Self {
        let mut wrapped = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        Self { degrees: wrapped }
    }

    /// Create from radians; any finite value is wrapped into range.
    pub fn from_radians(radians: f32) -> Self {
        Self::from_degrees(radians.rem_euclid(TAU).to_degrees())
    }

    /// Value in degrees, `[0, 360)`
    #[inline]
    pub fn degrees(self) -> f32 {
        self.degrees
    }

    /// Value in radians, `[0, 2π)`
    #[inline]
    pub fn radians(self) -> f32 {
        self.degrees.to_radians()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees + rhs.degrees)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees - rhs.degrees)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_degrees(-self.degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.degrees)
    }
}
