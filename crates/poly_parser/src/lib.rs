//! Parsers for polynomial text input.
//!
//! Two entry points: [`parse_polynomial`] for polynomial literals such
//! as `3x^2 - 5x + 2` (the engine's own rendering, `3x^2-5x + 2`,
//! parses too), and [`parse_term_pair`] for the raw
//! `<coefficient> <exponent>` form used by the shell's insert command.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_polynomial, parse_term_pair};
