use super::ast::Statement;
use super::{parse, scan, Error, LineNumber};
use std::rc::Rc;

/// ## A parsed line
///
/// The source text is what follows the line number, trimmed. It is what
/// `LIST` and `SAVE` print and what the memory accounting counts.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    source: Rc<str>,
    statements: Vec<Statement>,
}

impl Line {
    pub fn new(number: LineNumber, source: Rc<str>, statements: Vec<Statement>) -> Line {
        Line {
            number,
            source,
            statements,
        }
    }

    /// Scan and parse one line of input. Blank input is `Ok(None)`.
    pub fn parse(s: &str) -> Result<Option<Line>, Error> {
        let tokens = scan(s)?;
        parse(&tokens)
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn source(&self) -> &Rc<str> {
        &self.source
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Bytes of program memory the line occupies.
    pub fn size(&self) -> usize {
        4 + self.source.len()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, " {}  {}", number, self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_is_stripped() {
        let line = Line::parse("100 print  x ").unwrap().unwrap();
        assert_eq!(line.number(), Some(100));
        assert_eq!(&**line.source(), "print  x");
        assert_eq!(line.size(), 12);
        assert_eq!(line.to_string(), " 100  print  x");
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Line::parse("   \r\n").unwrap(), None);
    }
}
