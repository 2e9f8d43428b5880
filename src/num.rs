//! Scalar types the vectors are generic over.

use nalgebra as na;
use num_traits as nt;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Floating point component type of a vector.
///
/// Implemented for `f32` and `f64`. Besides arithmetic, an implementation
/// must be able to feed itself into a [`Hasher`] consistently with `==`.
pub trait Float:
    nt::Float + na::Scalar + Default + fmt::Display + fmt::Debug + Send + Sync
{
    /// Hashes the value so that any two values comparing equal hash equally.
    fn hash_component<H: Hasher>(self, state: &mut H);
}

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            fn hash_component<H: Hasher>(self, state: &mut H) {
                // +0.0 and -0.0 compare equal but differ in bits
                let canonical = if self == 0.0 { 0.0 } else { self };
                canonical.to_bits().hash(state);
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<F: Float>(value: F) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_component(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_signed_zeros_hash_equally() {
        assert_eq!(hash_of(0.0f32), hash_of(-0.0f32));
        assert_eq!(hash_of(0.0f64), hash_of(-0.0f64));
    }

    #[test]
    fn test_distinct_values_hash_differently() {
        assert_ne!(hash_of(1.0f64), hash_of(2.0f64));
        assert_ne!(hash_of(1.5f32), hash_of(-1.5f32));
    }
}
