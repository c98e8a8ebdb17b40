use crate::mach::{Function, Operation};
use std::f64::consts::PI;

#[test]
fn test_safe_log_and_sqrt() {
    assert_eq!(Function::safe_log(0.0), 0.0);
    assert_eq!(Function::safe_log(-3.0), 0.0);
    assert!((Function::safe_log(std::f64::consts::E) - 1.0).abs() < 1e-12);
    assert_eq!(Function::safe_sqrt(-4.0), 0.0);
    assert_eq!(Function::safe_sqrt(16.0), 4.0);
}

#[test]
fn test_safe_tan() {
    assert_eq!(Function::safe_tan(PI / 2.0), 0.0);
    assert_eq!(Function::safe_tan(-PI / 2.0), 0.0);
    assert!((Function::safe_tan(PI / 4.0) - 1.0).abs() < 1e-12);
    assert_eq!(Function::safe_tan(0.0), 0.0);
}

#[test]
fn test_sign_and_round() {
    assert_eq!(Function::sign(-2.5), -1.0);
    assert_eq!(Function::sign(0.0), 0.0);
    assert_eq!(Function::sign(f64::NAN), 0.0);
    assert_eq!(Function::sign(9.0), 1.0);
    assert_eq!(Function::round(2.5), 2.0);
    assert_eq!(Function::round(3.5), 4.0);
    assert_eq!(Function::round(-0.5), 0.0);
    assert_eq!(Function::reciprocal(0.0), 0.0);
    assert_eq!(Function::reciprocal(4.0), 0.25);
}

#[test]
fn test_division_family() {
    assert_eq!(Operation::divide(5.0, 0.0), 0.0);
    assert_eq!(Operation::divide(5.0, 2.0), 2.5);
    assert_eq!(Operation::quotient(7.0, 2.0), 3.0);
    assert_eq!(Operation::quotient(-7.0, 2.0), -4.0);
    assert_eq!(Operation::quotient(7.0, 0.0), 0.0);
    assert_eq!(Operation::modulo(-7.0, 3.0), 2.0);
    assert_eq!(Operation::modulo(7.0, -3.0), -2.0);
    assert_eq!(Operation::modulo(7.0, 0.0), 0.0);
}

#[test]
fn test_power() {
    assert_eq!(Operation::power(3.0, 2.0), 9.0);
    assert_eq!(Operation::power(2.0, 8.0), 256.0);
    assert_eq!(Operation::power(2.0, 7.0), 128.0);
    assert_eq!(Operation::power(5.0, 0.0), 1.0);
    assert_eq!(Operation::power(2.0, -1.0), 0.0);
    assert!((Operation::power(2.0, 0.5) - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_min_max_operand_order() {
    assert_eq!(Operation::min(1.0, 2.0), 1.0);
    assert_eq!(Operation::max(1.0, 2.0), 2.0);
    assert!(Operation::min(f64::NAN, 1.0) == 1.0);
    assert!(Operation::min(1.0, f64::NAN).is_nan());
}

#[test]
fn test_logic() {
    assert_eq!(Operation::and(2.0, -1.0), 1.0);
    assert_eq!(Operation::and(2.0, 0.0), 0.0);
    assert_eq!(Operation::or(0.0, 0.5), 1.0);
    assert_eq!(Operation::nand(1.0, 1.0), 0.0);
    assert_eq!(Operation::nor(0.0, 0.0), 1.0);
    assert_eq!(Operation::xor(3.0, 0.0), 1.0);
    assert_eq!(Operation::xor(3.0, 4.0), 0.0);
    assert_eq!(Operation::not(0.0), 1.0);
    assert_eq!(Operation::conditional(0.0, 5.0, 6.0), 6.0);
    assert_eq!(Operation::conditional(-1.0, 5.0, 6.0), 5.0);
}
