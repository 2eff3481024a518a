//! The ordered term-sequence container and its arithmetic.

use tracing::debug;

use crate::error::PolyError;
use crate::term::Term;

/// A sparse univariate polynomial.
///
/// Terms are kept sorted by strictly descending exponent, with no
/// duplicate exponents and no zero coefficients. The empty sequence
/// represents the zero polynomial.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Builds a polynomial by inserting each (coefficient, exponent)
    /// pair in turn. Duplicate exponents merge, cancellations drop out.
    #[must_use]
    pub fn from_terms<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i32)>,
    {
        let mut poly = Self::new();
        for (coeff, exp) in pairs {
            poly.insert(coeff, exp);
        }
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in descending-exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the highest exponent, or None for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<i32> {
        self.terms.first().map(|t| t.exp)
    }

    /// Returns the coefficient of the highest-exponent term.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<i64> {
        self.terms.first().map(|t| t.coeff)
    }

    /// Inserts a term, keeping the sequence ordered.
    ///
    /// A zero coefficient is a no-op. If a term with the same exponent
    /// already exists, the coefficients are summed; a sum of zero
    /// removes the term. Otherwise the new term is spliced in at its
    /// position in the descending scan. Never fails.
    pub fn insert(&mut self, coeff: i64, exp: i32) {
        if coeff == 0 {
            return;
        }

        // First position whose exponent is not above the new one;
        // everything before it stays strictly larger.
        let pos = self
            .terms
            .iter()
            .position(|t| t.exp <= exp)
            .unwrap_or(self.terms.len());

        match self.terms.get_mut(pos) {
            Some(existing) if existing.exp == exp => {
                existing.coeff += coeff;
                if existing.coeff == 0 {
                    self.terms.remove(pos);
                }
            }
            _ => self.terms.insert(pos, Term::new(coeff, exp)),
        }
    }

    /// Adds two polynomials, producing a new one.
    ///
    /// Returns [`PolyError::EmptyOperand`] if either operand has no
    /// terms; the check happens before any result is built.
    pub fn add(&self, other: &Self) -> Result<Self, PolyError> {
        self.merge(other, false)
    }

    /// Subtracts `other` from `self` (first minus second).
    ///
    /// Same empty-operand rule as [`Polynomial::add`].
    pub fn sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.merge(other, true)
    }

    /// Two-pointer merge over the descending sequences. With `negate`
    /// the second operand's coefficients contribute negatively.
    fn merge(&self, other: &Self, negate: bool) -> Result<Self, PolyError> {
        if self.is_empty() || other.is_empty() {
            return Err(PolyError::EmptyOperand);
        }
        debug!(
            lhs_terms = self.terms.len(),
            rhs_terms = other.terms.len(),
            negate,
            "merging term sequences"
        );

        let mut result = Self::new();
        let (mut i, mut j) = (0usize, 0usize);
        loop {
            match (self.terms.get(i), other.terms.get(j)) {
                (Some(l), Some(r)) if l.exp == r.exp => {
                    let combined = if negate {
                        l.coeff - r.coeff
                    } else {
                        l.coeff + r.coeff
                    };
                    // insert drops the term when the sides cancel
                    result.insert(combined, l.exp);
                    i += 1;
                    j += 1;
                }
                (Some(l), Some(r)) if l.exp > r.exp => {
                    result.insert(l.coeff, l.exp);
                    i += 1;
                }
                (Some(l), None) => {
                    result.insert(l.coeff, l.exp);
                    i += 1;
                }
                (_, Some(r)) => {
                    let coeff = if negate { -r.coeff } else { r.coeff };
                    result.insert(coeff, r.exp);
                    j += 1;
                }
                (None, None) => break,
            }
        }
        Ok(result)
    }

    /// Multiplies two polynomials (schoolbook, O(n*m) term pairs).
    ///
    /// Every pairwise product is routed through [`Polynomial::insert`],
    /// so like-exponent products accumulate and cancellations drop out.
    /// Same empty-operand rule as [`Polynomial::add`].
    pub fn mul(&self, other: &Self) -> Result<Self, PolyError> {
        if self.is_empty() || other.is_empty() {
            return Err(PolyError::EmptyOperand);
        }
        debug!(
            lhs_terms = self.terms.len(),
            rhs_terms = other.terms.len(),
            "multiplying term sequences"
        );

        let mut result = Self::new();
        for l in &self.terms {
            for r in &other.terms {
                result.insert(l.coeff * r.coeff, l.exp + r.exp);
            }
        }
        Ok(result)
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// The sum is accumulated in `f64` and truncated toward zero to an
    /// integer as the final step; this truncation (not rounding) is
    /// deliberate, preserved behavior. The zero polynomial evaluates
    /// to 0. Negative exponents go through `f64::powi`, so the result
    /// at `x = 0` with negative exponents follows IEEE semantics and
    /// should not be relied on.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> i64 {
        let total: f64 = self
            .terms
            .iter()
            .map(|t| t.coeff as f64 * x.powi(t.exp))
            .sum();
        // explicit truncation at the API boundary
        total as i64
    }
}

impl FromIterator<(i64, i32)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (i64, i32)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}
