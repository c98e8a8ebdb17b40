use crate::mach::Address;

pub struct Error {
    code: u16,
    address: Option<Address>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::Error::new($crate::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::Error::new($crate::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::Error::new($crate::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::Error::new($crate::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// True for the two failures a compiled script can only hit while running.
    pub fn is_fatal(&self) -> bool {
        self.is(ErrorCode::UnknownOpcode) || self.is(ErrorCode::ReservedOpcode)
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn at_address(&self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            code: self.code,
            address: Some(address),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            address: self.address,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownOpcode = 1,
    ReservedOpcode = 2,
    StackUnderflow = 3,
    StackOverflow = 4,
    UnbalancedStack = 5,
    ConstantPoolMismatch = 6,
    MissingOperand = 7,
    OperandOutOfRange = 8,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "unknown instruction",
            2 => "instruction is for internal use only",
            3 => "stack underflow",
            4 => "stack overflow",
            5 => "unbalanced stack",
            6 => "constant pool mismatch",
            7 => "missing operand",
            8 => "operand out of range",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" at {}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "script error {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
