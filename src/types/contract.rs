//! The operation set shared by every 3D vector type
//!
//! [`Vector`] is written against an abstract [`Float`] component so that
//! algorithms can be expressed once and used with either precision.

use crate::error::Result;
use crate::num::Float;
use crate::types::Axis;
use num_traits::{Float as _, One as _};

/// Immutable 3D vector value.
///
/// Every operation returns a new value; nothing mutates `self`. Only
/// [`get_value`](Vector::get_value) and [`set_value`](Vector::set_value)
/// can fail. All other operations follow IEEE-754 arithmetic, so degenerate
/// input such as a zero-length vector passed to [`unit`](Vector::unit)
/// yields NaN or infinite components rather than an error.
pub trait Vector: Copy + PartialEq {
    /// Component type
    type Scalar: Float;

    /// X component
    fn x(&self) -> Self::Scalar;

    /// Y component
    fn y(&self) -> Self::Scalar;

    /// Z component
    fn z(&self) -> Self::Scalar;

    /// Component along `axis`
    fn get(&self, axis: Axis) -> Self::Scalar {
        match axis {
            Axis::X => self.x(),
            Axis::Y => self.y(),
            Axis::Z => self.z(),
        }
    }

    /// Copy of this vector with the component along `axis` replaced
    fn set(&self, axis: Axis, value: Self::Scalar) -> Self;

    /// Component at `index` (0 = x, 1 = y, 2 = z)
    fn get_value(&self, index: usize) -> Result<Self::Scalar> {
        Ok(self.get(Axis::from_index(index)?))
    }

    /// Copy of this vector with the component at `index` replaced
    fn set_value(&self, index: usize, value: Self::Scalar) -> Result<Self> {
        Ok(self.set(Axis::from_index(index)?, value))
    }

    /// Euclidean length, `sqrt(v · v)`
    fn length(&self) -> Self::Scalar {
        self.dot_product(self).sqrt()
    }

    /// Component-wise sum
    fn add(&self, other: &Self) -> Self;

    /// Component-wise difference
    fn subtract(&self, other: &Self) -> Self;

    /// Every component multiplied by `scalar`
    fn scale(&self, scalar: Self::Scalar) -> Self;

    /// Every component negated
    fn negate(&self) -> Self {
        self.apply(|c| -c)
    }

    /// `x1*x2 + y1*y2 + z1*z2`
    fn dot_product(&self, other: &Self) -> Self::Scalar {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product
    fn cross_product(&self, other: &Self) -> Self;

    /// Vector with the same direction and the given length.
    ///
    /// For a zero vector the result has NaN components.
    fn resize(&self, length: Self::Scalar) -> Self {
        self.unit().scale(length)
    }

    /// Vector with the same direction and length 1, computed as
    /// `v * (1 / length)`.
    ///
    /// For a zero vector the result has NaN components.
    fn unit(&self) -> Self {
        self.scale(Self::Scalar::one() / self.length())
    }

    /// Independent copy of this value
    fn copy(&self) -> Self {
        *self
    }

    /// Applies `selector` to x, y and z, in that order
    fn apply<F>(&self, selector: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar;
}
