use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use crate::NativeFloat;

/// A 2d point: a pair of coordinates, created by the caller and consumed by
/// the curve evaluators.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point2<T = NativeFloat> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T: Copy> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T: Float> Point2<T> {
    /// Returns the distance between self and other
    pub fn distance(&self, other: Self) -> T {
        ((self.x - other.x) * (self.x - other.x) + (self.y - other.y) * (self.y - other.y)).sqrt()
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Scalar multiplication; the scalar type may differ from the coordinate
/// type as long as `T * U` yields `T` again.
impl<T, U> Mul<U> for Point2<T>
where
    T: Mul<U, Output = T> + Copy,
    U: Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: U) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
