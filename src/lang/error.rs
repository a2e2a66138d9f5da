use super::{Column, LineNumber};
use std::borrow::Cow;
use std::num::{IntErrorKind, ParseIntError};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

/// Every parse and run failure of the interpreter is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 1,
    TokenError = 2,
    TypeError = 3,
    UndefinedVariable = 4,
    UndefinedLine = 5,
    LabelRedefinition = 6,
    InvalidExpression = 7,
    InvalidLineNumber = 8,
    DivideByZero = 9,
    /// Reserved. No statement of the language produces it.
    EndWithoutIf = 10,
    MissingOperand = 11,
    MissingOperator = 12,
    MissingEnd = 13,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "SYNTAX ERROR",
            TokenError => "TOKEN ERROR",
            TypeError => "TYPE ERROR",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UndefinedLine => "UNDEFINED LINE",
            LabelRedefinition => "LABEL REDEFINITION",
            InvalidExpression => "INVALID EXPRESSION",
            InvalidLineNumber => "INVALID LINE NUMBER",
            DivideByZero => "DIVISION BY ZERO",
            EndWithoutIf => "END WITHOUT IF",
            MissingOperand => "MISSING OPERAND",
            MissingOperator => "MISSING OPERATOR",
            MissingEnd => "MISSING END",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", self.code, suffix)
        } else {
            write!(f, "{}{}", self.code, suffix)
        }
    }
}

/// ## Numeric conversion failure
///
/// Raised when text that must be a decimal integer isn't one: the answer
/// to an INPUT statement, or a literal that doesn't fit in 32 bits.
#[derive(Clone, PartialEq)]
pub struct NumberError {
    line_number: LineNumber,
    text: String,
    kind: IntErrorKind,
}

impl NumberError {
    pub fn new(text: &str, error: ParseIntError) -> NumberError {
        NumberError {
            line_number: None,
            text: text.to_string(),
            kind: error.kind().clone(),
        }
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_overflow(&self) -> bool {
        matches!(
            self.kind,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
        )
    }

    pub fn in_line_number(self, line: LineNumber) -> NumberError {
        debug_assert!(self.line_number.is_none());
        NumberError {
            line_number: line,
            ..self
        }
    }
}

impl std::fmt::Debug for NumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NumberError {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for NumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let what = if self.is_overflow() {
            "NUMBER OUT OF RANGE"
        } else {
            "INVALID NUMBER"
        };
        match self.line_number {
            Some(line_number) => write!(f, "{} IN {}; {:?}", what, line_number, self.text),
            None => write!(f, "{}; {:?}", what, self.text),
        }
    }
}

/// Anything that can stop a run: a language error or a bad number.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Error(Error),
    Number(NumberError),
}

impl Failure {
    pub fn line_number(&self) -> LineNumber {
        match self {
            Failure::Error(e) => e.line_number(),
            Failure::Number(e) => e.line_number(),
        }
    }

    /// The language error code, if this isn't a numeric conversion failure.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Failure::Error(e) => Some(e.code()),
            Failure::Number(_) => None,
        }
    }

    pub fn in_line_number(self, line: LineNumber) -> Failure {
        match self {
            Failure::Error(e) => Failure::Error(e.in_line_number(line)),
            Failure::Number(e) => Failure::Number(e.in_line_number(line)),
        }
    }
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Failure::Error(error)
    }
}

impl From<NumberError> for Failure {
    fn from(error: NumberError) -> Self {
        Failure::Number(error)
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Failure::Error(e) => write!(f, "{}", e),
            Failure::Number(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for NumberError {}
impl std::error::Error for Failure {}
