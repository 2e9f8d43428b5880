//! Shared test utilities for vector3 integration tests.

#![allow(dead_code)]

pub mod comparison;

use proptest::prelude::*;
use vector3::{Vector3D, Vector3F};

/// Largest component magnitude produced by the strategies below.
pub const MAX_COMPONENT: f64 = 1e3;

prop_compose! {
    pub fn vector3d_strategy(max_component: f64)(
        x in -max_component..max_component,
        y in -max_component..max_component,
        z in -max_component..max_component,
    ) -> Vector3D {
        Vector3D::new(x, y, z)
    }
}

prop_compose! {
    pub fn vector3f_strategy(max_component: f32)(
        x in -max_component..max_component,
        y in -max_component..max_component,
        z in -max_component..max_component,
    ) -> Vector3F {
        Vector3F::new(x, y, z)
    }
}

prop_compose! {
    /// Vectors whose length is comfortably away from zero.
    pub fn nonzero_vector3d_strategy(max_component: f64)(
        v in vector3d_strategy(max_component)
            .prop_filter("length too small", |v| vector3::Vector::length(v) > 1e-3)
    ) -> Vector3D {
        v
    }
}

prop_compose! {
    pub fn nonzero_vector3f_strategy(max_component: f32)(
        v in vector3f_strategy(max_component)
            .prop_filter("length too small", |v| vector3::Vector::length(v) > 1e-2)
    ) -> Vector3F {
        v
    }
}
