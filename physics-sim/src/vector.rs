// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! 2D vector value type
//!
//! [`Vector2D`] is a plain `Copy` pair of double-precision floats. Every
//! operation returns a new value and never mutates its operands. All
//! operations are total: IEEE float semantics apply, so NaN and infinity
//! propagate instead of being reported.
//!
//! # Ordering
//!
//! The comparison helpers ([`Vector2D::less_than`] and friends) are
//! conjunctions over both components. This is a partial order, so two
//! vectors can be neither less than, greater than, nor equal to each other.
//! For that reason `Vector2D` does not implement `PartialOrd`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector with double-precision components
///
/// # Examples
///
/// ```
/// use physics_sim::Vector2D;
///
/// let a = Vector2D::new(3.0, 4.0);
/// assert_eq!(a.magnitude(), 5.0);
/// assert_eq!(a + Vector2D::ZERO, a);
/// assert_eq!(2.0 * a, a * 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vector2D {
    /// `(0, 0)`
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };
    /// `(1, 1)`
    pub const ONE: Vector2D = Vector2D { x: 1.0, y: 1.0 };
    /// `(0, 1)`
    pub const UP: Vector2D = Vector2D { x: 0.0, y: 1.0 };
    /// `(0, -1)`
    pub const DOWN: Vector2D = Vector2D { x: 0.0, y: -1.0 };
    /// `(-1, 0)`
    pub const LEFT: Vector2D = Vector2D { x: -1.0, y: 0.0 };
    /// `(1, 0)`
    pub const RIGHT: Vector2D = Vector2D { x: 1.0, y: 0.0 };

    /// Create a new vector from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Ninety degree counter-clockwise rotation: `(-y, x)`
    pub fn perpendicular(self) -> Self {
        Vector2D::new(-self.y, self.x)
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product: `self.x * other.y - self.y * other.x`
    ///
    /// This is the z component of the 3D cross product of the two vectors
    /// embedded in the xy-plane. Positive when `other` lies counter-clockwise
    /// of `self`.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Multiply both components by a scalar
    pub fn scale(self, k: f64) -> Self {
        Vector2D::new(self.x * k, self.y * k)
    }

    /// Component-wise product `(x * x', y * y')`
    pub fn multiply_components(self, other: Self) -> Self {
        Vector2D::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient `(x / x', y / y')`
    ///
    /// A zero divisor component yields infinity or NaN in that component.
    pub fn divide_components(self, other: Self) -> Self {
        Vector2D::new(self.x / other.x, self.y / other.y)
    }

    /// Divide both components by a scalar
    pub fn divide_scalar(self, k: f64) -> Self {
        Vector2D::new(self.x / k, self.y / k)
    }

    /// Component-wise equality, same as `==`
    pub fn equals(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// `true` when both components are strictly less than `other`'s
    pub fn less_than(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// `true` when both components are strictly greater than `other`'s
    pub fn greater_than(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// `true` when both components are less than or equal to `other`'s
    pub fn less_or_equal(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// `true` when both components are greater than or equal to `other`'s
    pub fn greater_or_equal(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// Squared length, avoids the square root
    pub fn square_magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length
    pub fn magnitude(self) -> f64 {
        self.square_magnitude().sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector has no direction; its normalized form is NaN in both
    /// components.
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Get the vector as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Create a vector from an array
    pub fn from_array(arr: [f64; 2]) -> Self {
        Vector2D::new(arr[0], arr[1])
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Vector2D::ZERO
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(arr: [f64; 2]) -> Self {
        Vector2D::from_array(arr)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;
    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    fn mul(self, v: Vector2D) -> Vector2D {
        v.scale(self)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        self.divide_scalar(k)
    }
}

impl Div for Vector2D {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.divide_components(rhs)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

impl DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, k: f64) {
        *self = *self / k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Vector2D::ZERO, Vector2D::new(0.0, 0.0));
        assert_eq!(Vector2D::ONE, Vector2D::new(1.0, 1.0));
        assert_eq!(Vector2D::UP, Vector2D::new(0.0, 1.0));
        assert_eq!(Vector2D::DOWN, Vector2D::new(0.0, -1.0));
        assert_eq!(Vector2D::LEFT, Vector2D::new(-1.0, 0.0));
        assert_eq!(Vector2D::RIGHT, Vector2D::new(1.0, 0.0));
        assert_eq!(Vector2D::default(), Vector2D::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -4.0);
        assert_eq!(a + b, Vector2D::new(4.0, -2.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 6.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a.multiply_components(b), Vector2D::new(3.0, -8.0));
        assert_eq!(b / a, Vector2D::new(3.0, -2.0));
        assert_eq!(b / 2.0, Vector2D::new(1.5, -2.0));
    }

    #[test]
    fn test_scalar_multiplication_is_symmetric() {
        // Left-hand scalar must scale y by k, not copy x into y
        let v = Vector2D::new(2.0, 5.0);
        assert_eq!(3.0 * v, Vector2D::new(6.0, 15.0));
        assert_eq!(3.0 * v, v * 3.0);
        assert_eq!(v.scale(3.0), v * 3.0);
    }

    #[test]
    fn test_perpendicular_rotates_counter_clockwise() {
        assert_eq!(Vector2D::RIGHT.perpendicular(), Vector2D::UP);
        assert_eq!(Vector2D::UP.perpendicular(), Vector2D::LEFT);
    }

    #[test]
    fn test_cross_conventional_sign() {
        assert_eq!(Vector2D::RIGHT.cross(Vector2D::UP), 1.0);
        assert_eq!(Vector2D::UP.cross(Vector2D::RIGHT), -1.0);

        let a = Vector2D::new(2.0, 3.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn test_dot_product() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(Vector2D::RIGHT.dot(Vector2D::UP), 0.0);
    }

    #[test]
    fn test_inequality_is_negation_of_equality() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(1.0, 3.0);
        // Only one component differs, still unequal
        assert!(a != b);
        assert!(!a.equals(b));
        assert!(a == Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn test_partial_order() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(2.0, 2.0);
        assert!(a.less_than(b));
        assert!(b.greater_than(a));
        assert!(a.less_or_equal(a));
        assert!(a.greater_or_equal(a));

        // Mixed ordering: neither less, greater, nor equal
        let c = Vector2D::new(0.0, 3.0);
        assert!(!a.less_than(c));
        assert!(!a.greater_than(c));
        assert!(!a.equals(c));

        let d = Vector2D::new(1.0, 3.0);
        assert!(a.less_or_equal(d));
        assert!(!a.less_than(d));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.square_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalized() {
        let n = Vector2D::new(3.0, 4.0).normalized();
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_zero_vector_is_nan() {
        let n = Vector2D::ZERO.normalized();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
        assert!(!n.is_valid());
    }

    #[test]
    fn test_divide_by_zero_follows_ieee() {
        let v = Vector2D::new(1.0, 0.0) / Vector2D::ZERO;
        assert_eq!(v.x, f64::INFINITY);
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector2D::new(1.0, 1.0);
        v += Vector2D::new(1.0, 2.0);
        assert_eq!(v, Vector2D::new(2.0, 3.0));
        v -= Vector2D::ONE;
        assert_eq!(v, Vector2D::new(1.0, 2.0));
        v *= 4.0;
        assert_eq!(v, Vector2D::new(4.0, 8.0));
        v /= 2.0;
        assert_eq!(v, Vector2D::new(2.0, 4.0));
    }

    #[test]
    fn test_conversions_and_display() {
        let v: Vector2D = (1.5, -2.0).into();
        assert_eq!(v, Vector2D::new(1.5, -2.0));
        assert_eq!(Vector2D::from([1.5, -2.0]), v);
        assert_eq!(v.as_array(), [1.5, -2.0]);
        assert_eq!(v.to_string(), "(1.5, -2)");
    }
}
