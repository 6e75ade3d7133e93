use super::{Column, LineNumber};
use std::rc::Rc;

/// ## Errors
///
/// Every failure in the scanner, parser and interpreter is an `Error`.
/// The error knows enough about where it happened to echo the offending
/// source back to the user with a `?` marking the spot.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    source: Option<Rc<str>>,
    message: String,
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
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            source: None,
            message: String::new(),
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

    pub fn source_text(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn legacy(&self) -> Legacy {
        self.code.legacy()
    }

    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = line;
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn in_source(mut self, source: &Rc<str>) -> Error {
        if self.source.is_none() {
            self.source = Some(source.clone());
        }
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.to_string();
        self
    }

    /// The terse message a Level I machine would print, followed by the
    /// offending line with a `?` inserted where the trouble was found.
    pub fn report(&self) -> String {
        let mut s = self.legacy().to_string();
        if let Some(source) = &self.source {
            let mut echo = String::new();
            let mut marked = false;
            for (index, ch) in source.chars().enumerate() {
                if !marked && self.column != (0..0) && index == self.column.start {
                    echo.push('?');
                    marked = true;
                }
                echo.push(ch);
            }
            if !marked && self.column != (0..0) {
                echo.push('?');
            }
            s.push('\n');
            match self.line_number {
                Some(number) => s.push_str(&format!(" {}  {}", number, echo)),
                None => s.push_str(&echo),
            }
        }
        s
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        error!(FileError; &error.to_string())
    }
}

/// The classes of failure the interpreter distinguishes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Scan,
    Parse,
    RuntimeStatement,
    RuntimeExpression,
    ValueOutOfRange,
}

/// What the user actually sees.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Legacy {
    What,
    How,
    Sorry,
}

impl std::fmt::Display for Legacy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Legacy::What => write!(f, "WHAT?"),
            Legacy::How => write!(f, "HOW?"),
            Legacy::Sorry => write!(f, "SORRY"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    SyntaxError,
    UnterminatedString,
    UnrecognizedCharacter,
    WrongArity,
    UnknownIdentifier,
    InvalidLineNumber,
    UndefinedLine,
    NextWithoutFor,
    ReturnWithoutGosub,
    OutOfData,
    CantContinue,
    DirectStatementInFile,
    FileError,
    TypeMismatch,
    DivisionByZero,
    Overflow,
    IllegalQuantity,
    StringTooLong,
    SubscriptOutOfRange,
    OutOfMemory,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            UnterminatedString | UnrecognizedCharacter => ErrorKind::Scan,
            SyntaxError | WrongArity | UnknownIdentifier | InvalidLineNumber => ErrorKind::Parse,
            UndefinedLine | NextWithoutFor | ReturnWithoutGosub | OutOfData | CantContinue
            | DirectStatementInFile | FileError => ErrorKind::RuntimeStatement,
            TypeMismatch => ErrorKind::RuntimeExpression,
            DivisionByZero | Overflow | IllegalQuantity | StringTooLong
            | SubscriptOutOfRange | OutOfMemory => ErrorKind::ValueOutOfRange,
        }
    }

    pub fn legacy(self) -> Legacy {
        use ErrorCode::*;
        match self {
            SubscriptOutOfRange | OutOfMemory => Legacy::Sorry,
            UndefinedLine | DivisionByZero | Overflow | IllegalQuantity | StringTooLong
            | CantContinue | FileError => Legacy::How,
            _ => Legacy::What,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            SyntaxError => "SYNTAX ERROR",
            UnterminatedString => "UNTERMINATED STRING",
            UnrecognizedCharacter => "UNRECOGNIZED CHARACTER",
            WrongArity => "WRONG NUMBER OF ARGUMENTS",
            UnknownIdentifier => "UNKNOWN IDENTIFIER",
            InvalidLineNumber => "INVALID LINE NUMBER",
            UndefinedLine => "UNDEFINED LINE",
            NextWithoutFor => "NEXT WITHOUT FOR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "OUT OF DATA",
            CantContinue => "CAN'T CONTINUE",
            DirectStatementInFile => "DIRECT STATEMENT IN FILE",
            FileError => "FILE ERROR",
            TypeMismatch => "TYPE MISMATCH",
            DivisionByZero => "DIVISION BY ZERO",
            Overflow => "OVERFLOW",
            IllegalQuantity => "ILLEGAL QUANTITY",
            StringTooLong => "STRING TOO LONG",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            OutOfMemory => "OUT OF MEMORY",
        };
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
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}
