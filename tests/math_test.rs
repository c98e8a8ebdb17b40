mod common;
use common::*;
use funcscript::mach::Opcode::*;
use funcscript::sim::{Context, World};
use std::f64::consts::PI;

#[test]
fn test_division_by_zero() {
    for a in [-3.5, 0.0, 5.0, 1e300].iter() {
        assert_eq!(eval_bare(vec![Constant, Constant, MathDivide], vec![*a, 0.0]), 0.0);
        assert_eq!(eval_bare(vec![Constant, Constant, MathQuotient], vec![*a, 0.0]), 0.0);
        assert_eq!(eval_bare(vec![Constant, Constant, MathMod], vec![*a, 0.0]), 0.0);
    }
    assert_eq!(eval_bare(vec![Constant, Constant, MathDivide], vec![5.0, 0.0]), 0.0);
    assert_eq!(eval_bare(vec![Constant, MathReciprocal], vec![0.0]), 0.0);
}

#[test]
fn test_power() {
    let pow = |a: f64, b: f64| eval_bare(vec![Constant, Constant, MathPower], vec![a, b]);
    assert_eq!(pow(2.0, 2.0), 4.0);
    assert_eq!(pow(2.0, 0.0), 1.0);
    assert_eq!(pow(2.0, -1.0), 0.0);
    assert_eq!(pow(2.0, 5.0), 32.0);
}

#[test]
fn test_log_sqrt() {
    assert_eq!(eval_bare(vec![Constant, MathLog], vec![0.0]), 0.0);
    assert_eq!(eval_bare(vec![Constant, MathLog], vec![-5.0]), 0.0);
    assert_eq!(eval_bare(vec![Constant, MathSqrt], vec![-4.0]), 0.0);
    assert_eq!(eval_bare(vec![Constant, MathSqrt], vec![9.0]), 3.0);
}

#[test]
fn test_tan_asymptote() {
    let t = eval_bare(vec![Constant, MathTan], vec![PI / 2.0]);
    assert_eq!(t, 0.0);
    for x in [-PI / 2.0, 3.0 * PI / 2.0, -3.0 * PI / 2.0, 201.0 * PI / 2.0].iter() {
        assert_eq!(eval_bare(vec![Constant, MathTan], vec![*x]), 0.0, "tan {}", x);
    }
    let t = eval_bare(vec![Constant, MathTan], vec![PI / 4.0]);
    assert!((t - 1.0).abs() < 1e-12);
}

#[test]
fn test_arithmetic_order() {
    assert_eq!(eval_bare(vec![Constant, Constant, MathSubtract], vec![10.0, 4.0]), 6.0);
    assert_eq!(
        eval_bare(vec![ConstantArray(3), MathFusedMultiplyAdd], vec![2.0, 3.0, 4.0]),
        10.0
    );
    assert_eq!(eval_bare(vec![Constant, StackCopy, MathTimes], vec![7.0]), 49.0);
    assert_eq!(
        eval_bare(vec![Constant, Constant, StackSwap, MathDivide], vec![2.0, 8.0]),
        4.0
    );
    assert_eq!(eval_bare(vec![Constant, MathIncrement, MathMinus], vec![1.0]), -2.0);
    assert_eq!(eval_bare(vec![Constant, MathRound], vec![2.5]), 2.0);
    assert_eq!(eval_bare(vec![Constant, MathFloor], vec![-1.5]), -2.0);
    assert_eq!(eval_bare(vec![Constant, MathCeiling], vec![-1.5]), -1.0);
    assert_eq!(eval_bare(vec![Constant, Constant, MathMin], vec![3.0, -2.0]), -2.0);
    assert_eq!(eval_bare(vec![Constant, Constant, MathMax], vec![3.0, -2.0]), 3.0);
}

#[test]
fn test_comparison_and_logic() {
    assert_eq!(eval_bare(vec![Constant, Constant, CompareLess], vec![1.0, 2.0]), 1.0);
    assert_eq!(eval_bare(vec![Constant, Constant, CompareGreaterEqual], vec![1.0, 2.0]), 0.0);
    assert_eq!(
        eval_bare(vec![ConstantArray(3), CompareConditional], vec![1.0, 10.0, 20.0]),
        10.0
    );
    assert_eq!(
        eval_bare(vec![ConstantArray(3), CompareConditional], vec![0.0, 10.0, 20.0]),
        20.0
    );
    assert_eq!(eval_bare(vec![Constant, Constant, LogicalXor], vec![1.0, 1.0]), 0.0);
    assert_eq!(eval_bare(vec![Constant, LogicalNot], vec![0.0]), 1.0);
}

#[test]
fn test_value_and_delta() {
    let world = World::default();
    let ctx = Context::new(&world).with_elapsed(0.25);
    let mut s = script(vec![Value, Delta, MathPlus], vec![]);
    let mut r = rng();
    assert_eq!(s.evaluate(&ctx, &mut r).unwrap(), 0.25);
    assert_eq!(s.evaluate(&ctx, &mut r).unwrap(), 0.5);
    s.set_last_result(10.0);
    assert_eq!(s.evaluate(&ctx, &mut r).unwrap(), 10.25);
    assert_eq!(s.last_result(), 10.25);
    assert_eq!(s.stack().len(), 1);
}

#[test]
fn test_random_bounds() {
    let world = World::default();
    let ctx = Context::new(&world);
    let mut r = rng();
    let mut s = script(vec![Constant, Constant, MathRandom], vec![2.0, 5.0]);
    let mut n = script(vec![Constant, Constant, MathRandomInt], vec![2.0, 5.0]);
    for _ in 0..200 {
        let x = s.evaluate(&ctx, &mut r).unwrap();
        assert!(x >= 2.0 && x < 5.0);
        let i = n.evaluate(&ctx, &mut r).unwrap();
        assert!(i == 2.0 || i == 3.0 || i == 4.0);
    }
    let mut empty = script(vec![Constant, Constant, MathRandomInt], vec![5.0, 5.0]);
    assert_eq!(empty.evaluate(&ctx, &mut r).unwrap(), 5.0);
}

#[test]
fn test_time_and_state() {
    let mut world = World::default();
    world.seconds_since_midnight = 3600.0;
    let ctx = Context::new(&world).with_state(2);
    assert_eq!(eval(vec![TimeSecondsSinceMidnight], vec![], &ctx), 3600.0);
    assert_eq!(eval(vec![CurrentObjectState], vec![], &ctx), 2.0);
    world.use_local_time();
    assert!(world.seconds_since_midnight >= 0.0 && world.seconds_since_midnight < 86_401.0);
}
