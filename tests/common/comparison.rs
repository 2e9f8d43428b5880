//! Tolerance-based comparison utilities for tests.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use num_traits::{Float as _, One as _};
use vector3::{Float, Vec3, Vector};

/// Check approximate equality of two scalars relative to their magnitude.
pub fn approx_eq<T: Float>(a: T, b: T, tol: T) -> bool {
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= tol * scale
}

/// Assert two vectors are approximately equal component-wise.
pub fn assert_vec3_eq<T: Float>(a: &Vec3<T>, b: &Vec3<T>, tol: T) {
    assert!(
        approx_eq(a.x(), b.x(), tol) && approx_eq(a.y(), b.y(), tol) && approx_eq(a.z(), b.z(), tol),
        "Vec3 mismatch: {a} vs {b} tol={tol}"
    );
}

/// Hash a value with the standard library hasher.
pub fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
