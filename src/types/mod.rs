//! Vector value types

mod axis;
mod contract;
mod interop;
mod precision;
mod vector;

pub use axis::Axis;
pub use contract::Vector;
pub use precision::{Vector3D, Vector3F};
pub use vector::Vec3;
