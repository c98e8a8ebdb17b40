//! # Animation function scripts
//!
//! A stack machine that evaluates compiled animation functions against a
//! snapshot of the running simulation. Each animated element of a train or
//! route object owns one [`Script`](mach::Script); once per frame the host
//! evaluates it and uses the single resulting number to rotate a needle,
//! pick a digital gauge frame, shift a texture or sweep an LED.
//!
//! The textual form `speedometer abs 3.6 *` compiles (elsewhere) to
//! `[TrainSpeedometer, MathAbs, Constant, MathTimes]` with the constant
//! pool `[3.6]`:
//!
//! ```
//! use funcscript::mach::{Opcode, Script};
//! use funcscript::sim::{Car, Context, Train, World};
//!
//! let mut script = Script::new(
//!     vec![Opcode::TrainSpeedometer, Opcode::MathAbs, Opcode::Constant, Opcode::MathTimes],
//!     vec![3.6],
//! )
//! .unwrap();
//! let mut car = Car::default();
//! car.perceived_speed = -10.0;
//! let train = Train::with_cars(vec![car]);
//! let world = World::default();
//! let ctx = Context::new(&world).with_train(&train, 0);
//! let kmh = script.evaluate(&ctx, &mut rand::thread_rng()).unwrap();
//! assert!((kmh - 36.0).abs() < 1e-9);
//! ```
//!
//! Evaluation is total over numbers: division by zero, logarithms and square
//! roots of invalid input and tangent asymptotes all produce `0.0`, and every
//! train query has a default when no train is present. Only an unknown
//! instruction or the internal `Panel2Timetable` instruction abort an
//! evaluation; [`Animation`](mach::Animation) is the host-side wrapper that
//! logs such a failure once and freezes the element.

#[macro_use]
mod error;

pub use error::Error;
pub use error::ErrorCode;

pub mod mach;
pub mod sim;
