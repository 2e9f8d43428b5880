//! Conversions to and from `nalgebra` vectors

use crate::num::Float;
use crate::types::{Vec3, Vector};
use nalgebra as na;

impl<T: Float> From<Vec3<T>> for na::Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        na::Vector3::new(v.x(), v.y(), v.z())
    }
}

impl<T: Float> From<na::Vector3<T>> for Vec3<T> {
    fn from(v: na::Vector3<T>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl<T: Float> From<Vec3<T>> for na::Point3<T> {
    fn from(v: Vec3<T>) -> Self {
        na::Point3::new(v.x(), v.y(), v.z())
    }
}

impl<T: Float> From<na::Point3<T>> for Vec3<T> {
    fn from(p: na::Point3<T>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}
