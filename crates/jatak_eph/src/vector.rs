//! Cartesian vector math shared by the adapter contract and its consumers.

/// 3-component cartesian vector. Units are whatever the provider uses
/// (typically AU); the chart engine only ever takes directions and cross
/// products, so the scale cancels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Construct from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Cross product `self x other`.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean norm.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(y);
        assert!((z.x).abs() < 1e-15);
        assert!((z.y).abs() < 1e-15);
        assert!((z.z - 1.0).abs() < 1e-15);
    }

    #[test]
    fn cross_anticommutes() {
        let a = Vec3::new(0.3, -1.2, 2.5);
        let b = Vec3::new(1.1, 0.4, -0.7);
        let ab = a.cross(b);
        let ba = b.cross(a);
        assert!((ab.x + ba.x).abs() < 1e-15);
        assert!((ab.y + ba.y).abs() < 1e-15);
        assert!((ab.z + ba.z).abs() < 1e-15);
    }

    #[test]
    fn sub_and_norm() {
        let a = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.norm() - 5.0).abs() < 1e-15);
        let d = a.sub(Vec3::new(3.0, 4.0, 0.0));
        assert!(d.norm() < 1e-15);
    }
}
