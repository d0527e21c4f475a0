//! Affine transformation matrix used throughout the graphics and text
//! state machinery.
//!
//! PDF represents a 3x3 affine transform with only six meaningful entries:
//!
//! ```text
//! | a  b  0 |
//! | c  d  0 |
//! | e  f  1 |
//! ```
//!
//! Row vectors are transformed by post-multiplying on the right:
//! `[x y 1] * M`. Concatenating two transforms so that `self` is applied
//! first and `other` second is therefore `self.multiply(&other)`; this is
//! the `new = local · current` convention spec'd for the `cm` operator and
//! for the text-matrix arithmetic in `showEncodedText`.

/// A 3x3 affine matrix, stored as its six meaningful entries.
///
/// `Matrix` is a plain `Copy` value type: every assignment and every field
/// in a containing struct is an independent copy, so there is no aliasing
/// hazard to guard against when handing one to a [`crate::sink::TextPositionSink`] —
/// unlike a mutable-object representation, no explicit "clone before
/// emission" step is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Matrix { a, b, c, d, e, f }
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Matrix::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Concatenate two transforms: a point is transformed by `self` first,
    /// then by `other`. Computes `self * other` in row-vector convention.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    pub fn x_scale(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    pub fn y_scale(&self) -> f64 {
        (self.c * self.c + self.d * self.d).sqrt()
    }

    pub const fn x_position(&self) -> f64 {
        self.e
    }

    pub const fn y_position(&self) -> f64 {
        self.f
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::new(2.0, 0.5, -0.3, 1.5, 10.0, -4.0);
        let lhs = m.multiply(&Matrix::IDENTITY);
        let rhs = Matrix::IDENTITY.multiply(&m);
        assert_eq!(lhs, m);
        assert_eq!(rhs, m);
    }

    #[test]
    fn multiplication_is_associative() {
        let a = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let b = Matrix::new(0.5, -1.0, 2.0, 0.25, -3.0, 1.0);
        let c = Matrix::translation(7.0, -2.0);

        let left = a.multiply(&b).multiply(&c);
        let right = a.multiply(&b.multiply(&c));

        assert!(approx_eq(left.a, right.a));
        assert!(approx_eq(left.b, right.b));
        assert!(approx_eq(left.c, right.c));
        assert!(approx_eq(left.d, right.d));
        assert!(approx_eq(left.e, right.e));
        assert!(approx_eq(left.f, right.f));
    }

    #[test]
    fn translation_then_scale_concatenates_in_order() {
        let translate = Matrix::translation(10.0, 0.0);
        let scale = Matrix::scale(2.0, 2.0);
        // point transformed by `translate` first, then `scale`
        let combined = translate.multiply(&scale);
        assert_eq!(combined, Matrix::new(2.0, 0.0, 0.0, 2.0, 20.0, 0.0));
    }

    #[test]
    fn scale_accessors() {
        let m = Matrix::new(3.0, 4.0, 0.0, 5.0, 1.0, 2.0);
        assert!(approx_eq(m.x_scale(), 5.0));
        assert!(approx_eq(m.y_scale(), 5.0));
        assert_eq!(m.x_position(), 1.0);
        assert_eq!(m.y_position(), 2.0);
    }
}
