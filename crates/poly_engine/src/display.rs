//! Text rendering of polynomials.
//!
//! The separator rule is asymmetric on purpose: " + " appears only
//! before a positive term that is not first, while negative terms
//! carry their own sign with no separator at all ("3x^2-5x + 2").
//! This matches the historical output format and the round-trip
//! parser accepts it.

use std::fmt;

use crate::polynomial::Polynomial;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (idx, term) in self.terms().iter().enumerate() {
            if idx > 0 && term.coeff > 0 {
                write!(f, " + ")?;
            }
            match term.exp {
                0 => write!(f, "{}", term.coeff)?,
                1 => write!(f, "{}x", term.coeff)?,
                e => write!(f, "{}x^{}", term.coeff, e)?,
            }
        }
        Ok(())
    }
}
