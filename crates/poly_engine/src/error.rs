//! Error types for poly_engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// A binary operation was given a polynomial with no terms.
    /// In the interactive workflow this means "operand not yet
    /// populated", so the operation is rejected rather than treated
    /// as arithmetic with zero.
    #[error("operation requires two non-empty polynomials")]
    EmptyOperand,
}
