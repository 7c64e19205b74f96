//! # Angle Units
//!
//! Type-safe wrappers for angles. Drawing helpers take angles in degrees
//! (that is what callers write), while the trigonometry runs in radians.
//!
//! Both serialize as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::units::{Degrees, Radians};
//!
//! let quarter = Degrees(90.0);
//! let rad: Radians = quarter.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Zero angle
    pub const ZERO: Degrees = Degrees(0.0);

    /// Convert to radians
    pub fn to_radians(self) -> Radians {
        self.into()
    }

    pub fn sin(self) -> f64 {
        self.0.to_radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.0.to_radians().cos()
    }

    /// True when the angle is exactly zero (no rotation requested)
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Radians {
    /// Convert to degrees
    pub fn to_degrees(self) -> Degrees {
        self.into()
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_roundtrip() {
        let deg = Degrees(30.0);
        let rad: Radians = deg.into();
        let back: Degrees = rad.into();
        assert!((back.0 - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_trig_helpers() {
        assert!((Degrees(90.0).sin() - 1.0).abs() < 1e-12);
        assert!(Degrees(90.0).cos().abs() < 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Degrees(45.0)).unwrap();
        assert_eq!(json, "45.0");
    }
}
