//! Equatorial <-> ecliptic frame rotation at the fixed mean obliquity.
//!
//! The whole engine uses a single mean-obliquity constant; nutation in
//! obliquity is far below the accuracy of the linear ayanamsa model used
//! downstream.

use crate::vector::Vec3;

/// Mean obliquity of the ecliptic, degrees.
pub const OBLIQUITY_DEG: f64 = 23.439_291_1;

/// Mean obliquity of the ecliptic, radians.
pub const OBLIQUITY_RAD: f64 = OBLIQUITY_DEG * core::f64::consts::PI / 180.0;

/// Rotate an equatorial-frame vector into the ecliptic frame
/// (rotation about +x by the obliquity).
pub fn equatorial_to_ecliptic(v: Vec3) -> Vec3 {
    let (sin_e, cos_e) = OBLIQUITY_RAD.sin_cos();
    Vec3 {
        x: v.x,
        y: v.y * cos_e + v.z * sin_e,
        z: -v.y * sin_e + v.z * cos_e,
    }
}

/// Rotate an ecliptic-frame vector into the equatorial frame.
pub fn ecliptic_to_equatorial(v: Vec3) -> Vec3 {
    let (sin_e, cos_e) = OBLIQUITY_RAD.sin_cos();
    Vec3 {
        x: v.x,
        y: v.y * cos_e - v.z * sin_e,
        z: v.y * sin_e + v.z * cos_e,
    }
}
