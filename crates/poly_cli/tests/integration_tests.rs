//! End-to-end flows the shell drives: parse user text, run the
//! engine operation, render the result.

use poly_engine::{PolyError, Polynomial};
use poly_parser::{parse_polynomial, parse_term_pair};

#[test]
fn test_insert_flow_builds_polynomial() {
    // The shell feeds "coeff exp" pairs straight into insert.
    let inputs = ["3 2", "-5 1", "2 0"];
    let mut poly = Polynomial::new();
    for input in inputs {
        let (coeff, exp) = parse_term_pair(input).expect("valid pair");
        poly.insert(coeff, exp);
    }
    assert_eq!(poly.to_string(), "3x^2-5x + 2");
}

#[test]
fn test_set_then_add_flow() {
    let p1 = parse_polynomial("3x^2 + 1").unwrap();
    let p2 = parse_polynomial("2x^2 + 5x").unwrap();
    let sum = p1.add(&p2).unwrap();
    assert_eq!(sum.to_string(), "5x^2 + 5x + 1");
}

#[test]
fn test_set_then_sub_flow() {
    let p1 = parse_polynomial("3x^2 + 1").unwrap();
    let p2 = parse_polynomial("2x^2 + 5x").unwrap();
    let diff = p1.sub(&p2).unwrap();
    assert_eq!(diff.to_string(), "1x^2-5x + 1");
}

#[test]
fn test_set_then_mul_flow() {
    let p1 = parse_polynomial("x + 2").unwrap();
    let p2 = parse_polynomial("x - 1").unwrap();
    let product = p1.mul(&p2).unwrap();
    assert_eq!(product.to_string(), "1x^2 + 1x-2");
}

#[test]
fn test_unpopulated_slot_reports_error_message() {
    let p1 = parse_polynomial("x + 2").unwrap();
    let empty = Polynomial::new();
    let err = p1.mul(&empty).unwrap_err();
    assert_eq!(err, PolyError::EmptyOperand);
    assert_eq!(
        err.to_string(),
        "operation requires two non-empty polynomials"
    );
}

#[test]
fn test_eval_flow() {
    let p = parse_polynomial("2x^2 + 3x - 1").unwrap();
    assert_eq!(p.evaluate(2.0), 13);
    assert_eq!(p.evaluate(0.0), -1);
}

#[test]
fn test_shown_polynomial_can_be_set_back() {
    // What `show` prints, `set` accepts.
    let original = parse_polynomial("4x^3 - 2x + 7").unwrap();
    let reparsed = parse_polynomial(&original.to_string()).unwrap();
    assert_eq!(reparsed, original);
}
