use std::ops::{Add, AddAssign, Sub};

/// A signed position on the plane
///
/// Front ends work in unbounded signed coordinates (a panned camera, a
/// pointer outside the board); [`Torus::wrap`](crate::engine::Torus::wrap)
/// folds them back onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos2 {
    pub x: i64,
    pub y: i64,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign for Pos2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let mut p = Pos2::new(2, -3);
        assert_eq!(p + Pos2::new(1, 1), Pos2::new(3, -2));
        assert_eq!(p - Pos2::new(2, -3), Pos2::zero());
        p += Pos2::new(-5, 5);
        assert_eq!(p, Pos2::new(-3, 2));
    }
}
