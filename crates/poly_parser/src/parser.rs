use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res, opt, recognize},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};
use poly_engine::Polynomial;

use crate::error::ParseError;

// ============================================================================
// Public entry points
// ============================================================================

/// Parses a polynomial literal into a `Polynomial`.
///
/// Accepts conventional notation (`3x^2 - 5x + 2`) as well as the
/// engine's own rendering, where a negative term's sign abuts the
/// previous term with no separator (`3x^2-5x + 2`). A term is
/// `[sign] [integer] [x [^ integer]]`: a missing coefficient means 1,
/// `x` without a caret means exponent 1, a bare integer is a constant.
/// Terms are folded in through `Polynomial::insert`, so duplicate
/// exponents merge and `0` yields the zero polynomial.
pub fn parse_polynomial(input: &str) -> Result<Polynomial, ParseError> {
    let (rest, terms) =
        polynomial(input).map_err(|e| ParseError::Syntax(format!("{}", e)))?;
    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.to_string()));
    }
    Ok(Polynomial::from_terms(terms))
}

/// Parses the raw `<coefficient> <exponent>` input form: exactly two
/// whitespace-separated integers.
pub fn parse_term_pair(input: &str) -> Result<(i64, i32), ParseError> {
    let mut parts = input.split_whitespace();
    let (Some(c), Some(e), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::Syntax(
            "expected '<coefficient> <exponent>'".to_string(),
        ));
    };
    let coeff = c
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger(c.to_string()))?;
    let exp = e
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidInteger(e.to_string()))?;
    Ok((coeff, exp))
}

// ============================================================================
// nom combinators
// ============================================================================

fn integer_i64(input: &str) -> IResult<&str, i64> {
    map_res(digit1, str::parse::<i64>)(input)
}

/// Exponent after `^`; may be negative.
fn integer_i32(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i32>)(input)
}

/// `x`, `x^3`, `x^-2`. Yields the exponent.
fn x_part(input: &str) -> IResult<&str, i32> {
    let (input, _) = char('x')(input)?;
    let (input, exp) = opt(preceded(char('^'), integer_i32))(input)?;
    Ok((input, exp.unwrap_or(1)))
}

/// A term without its leading sign: `7`, `7x`, `7x^2`, `x`, `x^2`.
fn unsigned_term(input: &str) -> IResult<&str, (i64, i32)> {
    alt((
        map(pair(integer_i64, opt(x_part)), |(coeff, exp)| {
            (coeff, exp.unwrap_or(0))
        }),
        map(x_part, |exp| (1, exp)),
    ))(input)
}

/// A term with an optional attached sign (`-5x`, `+3`).
fn signed_term(input: &str) -> IResult<&str, (i64, i32)> {
    let (input, sign) = opt(alt((char('+'), char('-'))))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, (coeff, exp)) = unsigned_term(input)?;
    let coeff = if sign == Some('-') { -coeff } else { coeff };
    Ok((input, (coeff, exp)))
}

/// First term, then any number of `+`/`-` separated terms. The
/// separator's sign applies on top of the term's own sign.
fn polynomial(input: &str) -> IResult<&str, Vec<(i64, i32)>> {
    let (input, first) = preceded(multispace0, signed_term)(input)?;
    let (input, rest) = many0(preceded(
        multispace0,
        pair(
            alt((char('+'), char('-'))),
            preceded(multispace0, signed_term),
        ),
    ))(input)?;

    let mut terms = vec![first];
    for (sep, (coeff, exp)) in rest {
        let coeff = if sep == '-' { -coeff } else { coeff };
        terms.push((coeff, exp));
    }
    Ok((input, terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(p: &Polynomial) -> Vec<(i64, i32)> {
        p.terms().iter().map(|t| (t.coeff, t.exp)).collect()
    }

    #[test]
    fn test_parse_conventional_notation() {
        let p = parse_polynomial("3x^2 - 5x + 2").unwrap();
        assert_eq!(pairs(&p), vec![(3, 2), (-5, 1), (2, 0)]);
    }

    #[test]
    fn test_parse_engine_rendering() {
        // The engine prints negative terms with no separator.
        let p = parse_polynomial("3x^2-5x + 2").unwrap();
        assert_eq!(pairs(&p), vec![(3, 2), (-5, 1), (2, 0)]);
    }

    #[test]
    fn test_parse_sign_after_separator() {
        let p = parse_polynomial("3x^2 + -5x + 2").unwrap();
        assert_eq!(pairs(&p), vec![(3, 2), (-5, 1), (2, 0)]);
    }

    #[test]
    fn test_parse_bare_variable_and_constants() {
        let p = parse_polynomial("x + 2").unwrap();
        assert_eq!(pairs(&p), vec![(1, 1), (2, 0)]);
    }

    #[test]
    fn test_parse_leading_negative() {
        let p = parse_polynomial("-x^3 + 4").unwrap();
        assert_eq!(pairs(&p), vec![(-1, 3), (4, 0)]);
    }

    #[test]
    fn test_parse_negative_exponent() {
        let p = parse_polynomial("2x^-3").unwrap();
        assert_eq!(pairs(&p), vec![(2, -3)]);
    }

    #[test]
    fn test_parse_zero_literal() {
        let p = parse_polynomial("0").unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn test_parse_merges_duplicate_exponents() {
        let p = parse_polynomial("2x + 3x").unwrap();
        assert_eq!(pairs(&p), vec![(5, 1)]);
    }

    #[test]
    fn test_parse_cancelling_terms_give_zero() {
        let p = parse_polynomial("x - x").unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        let err = parse_polynomial("3x^2 y").unwrap_err();
        assert_eq!(err, ParseError::TrailingInput("y".to_string()));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(parse_polynomial(""), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_polynomial("   "), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_parse_term_pair() {
        assert_eq!(parse_term_pair("3 2").unwrap(), (3, 2));
        assert_eq!(parse_term_pair("  -5   0 ").unwrap(), (-5, 0));
    }

    #[test]
    fn test_parse_term_pair_errors() {
        assert!(matches!(parse_term_pair("3"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_term_pair("3 2 1"), Err(ParseError::Syntax(_))));
        assert_eq!(
            parse_term_pair("a 2"),
            Err(ParseError::InvalidInteger("a".to_string()))
        );
    }
}
