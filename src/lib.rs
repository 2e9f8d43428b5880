//! # vector3
//!
//! Immutable 3D vector value types in single and double precision.
//!
//! Both precisions are instantiations of one generic type, [`Vec3`], and
//! share one operation set, the [`Vector`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use vector3::{Vector, Vector3D, Vector3F};
//!
//! let a = Vector3D::new(1.0, 2.0, 3.0);
//! let b = Vector3D::new(1.0, 5.0, 7.0);
//!
//! assert_eq!(a.cross_product(&b), Vector3D::new(-1.0, -4.0, 3.0));
//! assert_eq!(a + b, Vector3D::new(2.0, 7.0, 10.0));
//! assert_eq!(a * b, 32.0);
//! assert_eq!(Vector3D::new(13.0, 0.0, 0.0).length(), 13.0);
//!
//! // Index access is the only fallible operation
//! assert_eq!(a.get_value(1)?, 2.0);
//! assert!(a.get_value(3).is_err());
//!
//! // Precision conversions
//! let single: Vector3F = a.narrow();
//! assert_eq!(Vector3D::from(single), a);
//! assert_eq!(single.to_string(), "<1, 2, 3>");
//! # Ok::<(), vector3::VectorError>(())
//! ```
//!
//! ## Floating point semantics
//!
//! Equality is exact and hashing is consistent with it. Operations other
//! than index access never fail: normalizing a zero-length vector yields NaN
//! components, exactly as the underlying arithmetic does.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod num;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VectorError};
pub use num::Float;
pub use types::{Axis, Vec3, Vector, Vector3D, Vector3F};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
