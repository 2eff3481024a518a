//! Single polynomial term.

/// A term `coeff * x^exp`.
///
/// Terms with `coeff == 0` are never stored inside a polynomial;
/// the container filters them out on insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub coeff: i64,
    pub exp: i32,
}

impl Term {
    #[inline]
    pub const fn new(coeff: i64, exp: i32) -> Self {
        Term { coeff, exp }
    }

    /// The constant term `c` (exponent 0).
    #[inline]
    pub const fn constant(coeff: i64) -> Self {
        Term { coeff, exp: 0 }
    }
}
