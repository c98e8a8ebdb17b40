use super::{Opcode, Stack};
use crate::error;
use crate::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled animation function
///
/// The instruction stream and constant pool are fixed once built. The stack
/// and the last result are the only state that changes between frames.
#[derive(Debug, Clone)]
pub struct Script {
    pub(super) instructions: Vec<Opcode>,
    pub(super) constants: Vec<f64>,
    pub(super) stack: Stack<f64>,
    pub(super) last_result: f64,
}

impl Script {
    /// Builds a script with a stack just deep enough for `instructions`.
    pub fn new(instructions: Vec<Opcode>, constants: Vec<f64>) -> Result<Script> {
        let depth = validate(&instructions, &constants)?;
        Script::assemble(instructions, constants, depth)
    }

    /// Builds a script with the stack capacity chosen by the compiler.
    pub fn with_capacity(
        instructions: Vec<Opcode>,
        constants: Vec<f64>,
        capacity: usize,
    ) -> Result<Script> {
        let depth = validate(&instructions, &constants)?;
        if depth > capacity {
            return Err(error!(StackOverflow; "capacity is below the required depth"));
        }
        Script::assemble(instructions, constants, capacity)
    }

    /// Builds a script from a raw instruction stream.
    pub fn decode(codes: &[u16], constants: Vec<f64>) -> Result<Script> {
        match Opcode::decode(codes) {
            Some(instructions) => Script::new(instructions, constants),
            None => Err(error!(MissingOperand, codes.len() - 1; "constant array without a count")),
        }
    }

    pub fn encode(&self) -> Result<Vec<u16>> {
        match Opcode::encode(&self.instructions) {
            Some(codes) => Ok(codes),
            None => {
                let addr = self
                    .instructions
                    .iter()
                    .position(|op| matches!(op, Opcode::ConstantArray(n) if *n > u16::MAX as usize))
                    .unwrap_or(0);
                Err(error!(OperandOutOfRange, addr; "constant array count"))
            }
        }
    }

    fn assemble(instructions: Vec<Opcode>, constants: Vec<f64>, capacity: usize) -> Result<Script> {
        let stack = match Stack::try_with_capacity(capacity) {
            Some(stack) => stack,
            None => return Err(error!(StackOverflow; "capacity cannot be allocated")),
        };
        Ok(Script {
            instructions,
            constants,
            stack,
            last_result: 0.0,
        })
    }

    pub fn instructions(&self) -> &[Opcode] {
        &self.instructions
    }

    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// The stack as the last evaluation left it.
    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn set_last_result(&mut self, value: f64) {
        self.last_result = value;
    }

    /// True when every evaluation gives the same result, so the host may
    /// evaluate once and stop.
    pub fn is_constant(&self) -> bool {
        self.instructions.iter().all(Opcode::is_pure)
    }

    /// Shifts every constant that is used directly as a car index, for when
    /// the owning object has been turned around.
    pub fn correct_car_indices(&mut self, offset: f64) {
        let mut c = 0;
        for (addr, op) in self.instructions.iter().enumerate() {
            match op {
                Opcode::Constant => {
                    let feeds_car_index = self
                        .instructions
                        .get(addr + 1)
                        .map_or(false, Opcode::takes_car_index);
                    if feeds_car_index {
                        if let Some(constant) = self.constants.get_mut(c) {
                            *constant += offset;
                        }
                    }
                    c += 1;
                }
                Opcode::ConstantArray(n) => c = c.saturating_add(*n),
                _ => {}
            }
        }
    }
}

/// Walks the stack effects of `instructions` and returns the deepest the
/// stack gets. Nothing after the first `Halt` is checked since it never runs.
fn validate(instructions: &[Opcode], constants: &[f64]) -> Result<usize> {
    let mut depth: usize = 0;
    let mut max_depth: usize = 0;
    let mut consumed: usize = 0;
    let mut end = instructions.len();
    for (addr, op) in instructions.iter().enumerate() {
        if *op == Opcode::Halt {
            end = addr;
            break;
        }
        let taken = match op {
            Opcode::Constant => 1,
            Opcode::ConstantArray(n) => *n,
            _ => 0,
        };
        consumed = match consumed.checked_add(taken) {
            Some(consumed) if consumed <= constants.len() => consumed,
            _ => return Err(error!(ConstantPoolMismatch, addr; "constant pool exhausted")),
        };
        let (pops, pushes) = op.stack_effect();
        if pops > depth {
            return Err(error!(StackUnderflow, addr));
        }
        depth = match (depth - pops).checked_add(pushes) {
            Some(depth) => depth,
            None => return Err(error!(StackOverflow, addr)),
        };
        max_depth = max_depth.max(depth);
    }
    if depth != 1 {
        return Err(error!(UnbalancedStack, end; "exactly one value must remain"));
    }
    Ok(max_depth)
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut constants = self.constants.iter();
        let mut words: Vec<String> = vec![];
        for op in &self.instructions {
            match op {
                Opcode::Constant => {
                    if let Some(c) = constants.next() {
                        words.push(c.to_string());
                    }
                }
                Opcode::ConstantArray(n) => {
                    words.extend(constants.by_ref().take(*n).map(f64::to_string));
                }
                op => words.push(op.to_string()),
            }
        }
        write!(f, "{}", words.join(" "))
    }
}
