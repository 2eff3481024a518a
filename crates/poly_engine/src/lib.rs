//! Sparse univariate polynomials stored as ordered term sequences.
//!
//! A [`Polynomial`] keeps its terms sorted by strictly descending
//! exponent with no zero coefficients; the empty sequence is the zero
//! polynomial. All mutation goes through [`Polynomial::insert`], which
//! merges like terms and drops cancelled ones, so the invariants hold
//! by construction. Addition, subtraction, and multiplication build
//! fresh polynomials through the same insertion primitive.

pub mod display;
pub mod error;
pub mod polynomial;
pub mod term;

pub use error::PolyError;
pub use polynomial::Polynomial;
pub use term::Term;
