use crate::mach::{Opcode, Script};
use crate::sim::{Context, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod function_test;
mod opcode_test;

fn eval(ops: Vec<Opcode>, constants: Vec<f64>) -> f64 {
    let world = World::default();
    let ctx = Context::new(&world);
    let mut script = Script::new(ops, constants).unwrap();
    script.evaluate(&ctx, &mut StdRng::seed_from_u64(7)).unwrap()
}
