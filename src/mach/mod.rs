/*!
## Machine Module

Instruction set, stack and dispatcher for compiled animation functions.

*/

pub type Address = usize;

mod animation;
mod function;
mod opcode;
mod operation;
mod runtime;
mod script;
mod stack;

pub use animation::Animation;
pub use function::Function;
pub use opcode::Opcode;
pub use operation::Operation;
pub use script::Script;
pub use stack::Stack;

#[cfg(test)]
mod tests;
