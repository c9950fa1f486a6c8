// Small 2D vector used for every position in the app.
// `Point` (integer pixels) is what pointer samples, the path window and the
// undo journal are keyed by; `Vec2f` is used while interpolating.
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// Integer pixel coordinate (canvas space).
pub type Point = Vec2<i32>;
pub type Vec2f = Vec2<f32>;

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    pub const fn splat(n: T) -> Self {
        Self { x: n, y: n }
    }

    /// Apply `f` to both components.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Vec2<U> {
        Vec2 { x: f(self.x), y: f(self.y) }
    }
}

impl<T: Copy + Mul<Output = T>> Vec2<T> {
    /// Component-wise product.
    pub fn hadamard_mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Copy + Div<Output = T>> Vec2<T> {
    /// Component-wise quotient.
    pub fn hadamard_div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec2<T> {
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }
}

impl Point {
    pub fn as_f32(self) -> Vec2f {
        self.map(|c| c as f32)
    }
}

impl Vec2f {
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Linear interpolation towards `rhs`; `t = 0` is `self`, `t = 1` is `rhs`.
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        (rhs - self) * t + self
    }

    pub fn floor(self) -> Point {
        self.map(|c| c.floor() as i32)
    }

    pub fn ceil(self) -> Point {
        self.map(|c| c.ceil() as i32)
    }

    /// Truncate towards zero (what `as i32` does per component).
    pub fn trunc(self) -> Point {
        self.map(|c| c as i32)
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Vec2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Point::new(3, 4);
        let b = Point::new(1, -2);
        assert_eq!(a + b, Point::new(4, 2));
        assert_eq!(a - b, Point::new(2, 6));
        assert_eq!(-a, Point::new(-3, -4));
        assert_eq!(a * 2, Point::new(6, 8));
        assert_eq!(a.hadamard_mul(b), Point::new(3, -8));
        assert_eq!(a.hadamard_div(Point::splat(2)), Point::new(1, 2));
        assert_eq!(a.length_squared(), 25);
    }

    #[test]
    fn test_extrapolation_used_for_closing_spline() {
        let p2 = Point::new(10, 10);
        let p3 = Point::new(14, 7);
        assert_eq!(p3 + (p3 - p2), Point::new(18, 4));
    }

    #[test]
    fn test_lerp_and_length() {
        let a = Vec2f::new(0.0, 0.0);
        let b = Vec2f::new(10.0, -4.0);
        assert_eq!(a.lerp(b, 0.5), Vec2f::new(5.0, -2.0));
        assert!((Vec2f::new(3.0, 4.0).length() - 5.0).abs() < f32::EPSILON);
        assert!((Vec2f::new(0.0, 9.0).normalized().y - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rounding_casts() {
        let v = Vec2f::new(-1.5, 2.7);
        assert_eq!(v.floor(), Point::new(-2, 2));
        assert_eq!(v.ceil(), Point::new(-1, 3));
        assert_eq!(v.trunc(), Point::new(-1, 2));
        assert_eq!(Point::new(2, -3).as_f32(), Vec2f::new(2.0, -3.0));
    }
}
