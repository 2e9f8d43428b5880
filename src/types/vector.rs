//! Generic 3D vector value type

use crate::num::Float;
use crate::types::{Axis, Vector};
use num_traits::Zero as _;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Immutable 3D vector over a floating point component type.
///
/// Use the [`Vector3F`](crate::Vector3F) and [`Vector3D`](crate::Vector3D)
/// aliases for the single- and double-precision variants. Equality is exact
/// component-wise floating point comparison with no tolerance.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec3<T: Float> {
    x: T,
    y: T,
    z: T,
}

impl<T: Float> Vec3<T> {
    /// Create a new 3D vector
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vec3 { x, y, z }
    }

    /// Create a zero vector
    pub fn zero() -> Self {
        Vec3::new(T::zero(), T::zero(), T::zero())
    }

    /// Calculate the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot_product(self)
    }

    /// Components as `[x, y, z]`
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Float> Vector for Vec3<T> {
    type Scalar = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }

    fn z(&self) -> T {
        self.z
    }

    fn set(&self, axis: Axis, value: T) -> Self {
        match axis {
            Axis::X => Vec3::new(value, self.y, self.z),
            Axis::Y => Vec3::new(self.x, value, self.z),
            Axis::Z => Vec3::new(self.x, self.y, value),
        }
    }

    fn add(&self, other: &Self) -> Self {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    fn subtract(&self, other: &Self) -> Self {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    fn scale(&self, scalar: T) -> Self {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    fn cross_product(&self, other: &Self) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    fn apply<F>(&self, mut selector: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        let x = selector(self.x);
        let y = selector(self.y);
        let z = selector(self.z);
        Vec3::new(x, y, z)
    }
}

impl<T: Float> Hash for Vec3<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_component(state);
        self.y.hash_component(state);
        self.z.hash_component(state);
    }
}

impl<T: Float> Add for Vec3<T> {
    type Output = Vec3<T>;
    fn add(self, other: Vec3<T>) -> Vec3<T> {
        Vector::add(&self, &other)
    }
}

impl<T: Float> Sub for Vec3<T> {
    type Output = Vec3<T>;
    fn sub(self, other: Vec3<T>) -> Vec3<T> {
        self.subtract(&other)
    }
}

impl<T: Float> Neg for Vec3<T> {
    type Output = Vec3<T>;
    fn neg(self) -> Vec3<T> {
        self.negate()
    }
}

/// `v * s` scales the vector
impl<T: Float> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;
    fn mul(self, scalar: T) -> Vec3<T> {
        self.scale(scalar)
    }
}

/// `a * b` is the dot product
impl<T: Float> Mul for Vec3<T> {
    type Output = T;
    fn mul(self, other: Vec3<T>) -> T {
        self.dot_product(&other)
    }
}

impl<T: Float> Index<Axis> for Vec3<T> {
    type Output = T;
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

/// Panics when `index` is not 0, 1 or 2, like slice indexing.
/// [`Vector::get_value`] is the fallible form.
impl<T: Float> Index<usize> for Vec3<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of range for Vec3: the index is {index} but the len is 3"),
        }
    }
}

impl<T: Float> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl<T: Float> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl<T: Float> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> [T; 3] {
        v.to_array()
    }
}

impl<T: Float> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
