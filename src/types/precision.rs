//! Single- and double-precision vector types and conversions between them

use crate::types::{Vec3, Vector};

/// 3D vector with `f32` components
pub type Vector3F = Vec3<f32>;

/// 3D vector with `f64` components
pub type Vector3D = Vec3<f64>;

impl Vec3<f32> {
    /// Zero vector
    pub const ZERO: Vector3F = Vector3F::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3F = Vector3F::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector3F = Vector3F::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Vector3F = Vector3F::new(0.0, 0.0, 1.0);

    /// Narrow a double-precision vector.
    ///
    /// Each component is rounded to the nearest `f32`; values beyond the
    /// `f32` range become infinite.
    pub fn narrow_from(v: &Vector3D) -> Self {
        Vector3F::new(v.x() as f32, v.y() as f32, v.z() as f32)
    }

    /// Widen to a double-precision vector (exact)
    pub fn widen(&self) -> Vector3D {
        Vector3D::from(*self)
    }
}

impl Vec3<f64> {
    /// Zero vector
    pub const ZERO: Vector3D = Vector3D::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3D = Vector3D::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector3D = Vector3D::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Vector3D = Vector3D::new(0.0, 0.0, 1.0);

    /// Narrow to a single-precision vector, see [`Vector3F::narrow_from`]
    pub fn narrow(&self) -> Vector3F {
        Vector3F::narrow_from(self)
    }
}

impl From<Vector3F> for Vector3D {
    fn from(v: Vector3F) -> Self {
        Vector3D::new(f64::from(v.x()), f64::from(v.y()), f64::from(v.z()))
    }
}
