//! When parsing or computing with a `BigInt` goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

/// This type represents all possible errors that can occur when parsing text
/// into a `BigInt` or when an arithmetic operation has no defined result.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// Most arithmetic returns `Result<BigInt>`, so the error side should not
    /// make the happy path any wider.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `arbint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the parsed text at which the error was
    /// detected.
    ///
    /// Errors that do not come from the parser report offset 0.
    pub fn offset(&self) -> usize {
        self.err.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Format` - text that is not a valid integer literal
    /// - `Category::Arithmetic` - an operation with no defined result
    /// - `Category::Conversion` - a value that does not fit the requested type
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Empty | ErrorCode::InvalidDigit(_) | ErrorCode::UnsupportedRadix(_) => {
                Category::Format
            }
            ErrorCode::DivisionByZero | ErrorCode::NegativeExponent => Category::Arithmetic,
            ErrorCode::OutOfRange => Category::Conversion,
        }
    }

    /// Returns true if this error was caused by malformed numeric text or an
    /// unsupported radix.
    pub fn is_format(&self) -> bool {
        self.classify() == Category::Format
    }

    /// Returns true if this error was caused by dividing by zero or raising
    /// to a negative power.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by converting a `BigInt` into a
    /// native integer too narrow to hold it.
    pub fn is_conversion(&self) -> bool {
        self.classify() == Category::Conversion
    }
}

/// Categorizes the cause of an `arbint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by text that is not a valid integer literal in
    /// the requested radix.
    Format,

    /// The error was caused by an arithmetic operation with no defined
    /// result, such as a zero divisor.
    Arithmetic,

    /// The error was caused by a value outside the range of a native integer
    /// type.
    Conversion,
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

/// This type describes all possible errors that can occur when parsing or
/// computing with a `BigInt`.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// No digits were found after the optional sign and radix prefix.
    Empty,

    /// A character that is not a digit of the resolved radix.
    InvalidDigit(char),

    /// Radix outside of `2..=36`.
    UnsupportedRadix(u32),

    /// Divisor magnitude is zero.
    DivisionByZero,

    /// `pow` was called with an exponent below zero.
    NegativeExponent,

    /// Value does not fit the requested native integer type.
    OutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }

    #[cold]
    pub(crate) fn arithmetic(code: ErrorCode) -> Self {
        Error::syntax(code, 0)
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error::syntax(ErrorCode::OutOfRange, 0)
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Empty => f.write_str("Empty"),
            ErrorCode::InvalidDigit(c) => f.debug_tuple("InvalidDigit").field(c).finish(),
            ErrorCode::UnsupportedRadix(radix) => {
                f.debug_tuple("UnsupportedRadix").field(radix).finish()
            }
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::NegativeExponent => f.write_str("NegativeExponent"),
            ErrorCode::OutOfRange => f.write_str("OutOfRange"),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Empty => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit(c) => {
                f.write_fmt(format_args!("invalid digit {:?} found in string", c))
            }
            ErrorCode::UnsupportedRadix(radix) => {
                f.write_fmt(format_args!("radix {} is not in the range 2..=36", radix))
            }
            ErrorCode::DivisionByZero => f.write_str("attempt to divide by zero"),
            ErrorCode::NegativeExponent => f.write_str("negative exponent"),
            ErrorCode::OutOfRange => f.write_str("number out of range"),
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.offset == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at offset {}", self.code, self.offset)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, offset: {})",
            self.err.code.to_string(),
            self.err.offset
        )
    }
}
