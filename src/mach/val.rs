use crate::error;
use crate::lang::{ast::Literal, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i32),
    Single(f32),
    String(Rc<str>),
    Bool(bool),
}

impl Val {
    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    /// Anything that is not zero, false or empty.
    pub fn is_true(&self) -> bool {
        match self {
            Val::Integer(n) => *n != 0,
            Val::Single(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
            Val::Bool(b) => *b,
        }
    }

    pub fn to_f32(&self) -> Result<f32> {
        match self {
            Val::Integer(n) => Ok(*n as f32),
            Val::Single(n) => Ok(*n),
            Val::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Truncates toward zero. Out of range values are an illegal quantity.
    pub fn to_i32(&self) -> Result<i32> {
        match self {
            Val::Integer(n) => Ok(*n),
            Val::Single(n) => {
                let n = n.trunc();
                if n >= i32::min_value() as f32 && n < i32::max_value() as f32 {
                    Ok(n as i32)
                } else {
                    Err(error!(IllegalQuantity))
                }
            }
            Val::Bool(b) => Ok(*b as i32),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Line numbers in `GOTO`, `GOSUB`, `RUN` and `LIST`.
    pub fn to_line_number(&self) -> Result<u16> {
        let n = self.to_i32()?;
        if n < 0 || n > crate::lang::MAX_LINE_NUMBER as i32 {
            return Err(error!(IllegalQuantity; "LINE NUMBER OUT OF RANGE"));
        }
        Ok(n as u16)
    }
}

impl From<&Literal> for Val {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(n) => Val::Integer(*n),
            Literal::Single(n) => Val::Single(*n),
            Literal::String(s) => Val::String(s.as_str().into()),
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

/// Numbers print with a sign column and a trailing space.
impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (negative, digits) = match self {
            Val::String(s) => return write!(f, "{}", s),
            Val::Integer(n) => (*n < 0, format_integer(*n)),
            Val::Single(n) => (*n < 0.0, format_single(*n)),
            Val::Bool(b) => (false, if *b { "1".into() } else { "0".into() }),
        };
        if negative {
            write!(f, "{} ", digits)
        } else {
            write!(f, " {} ", digits)
        }
    }
}

fn format_integer(n: i32) -> String {
    if (n as i64).abs() >= 1_000_000 {
        format_scientific(n as f64)
    } else {
        n.to_string()
    }
}

fn format_single(n: f32) -> String {
    if n == 0.0 {
        return "0".into();
    }
    let magnitude = n.abs();
    if magnitude < 0.1 || magnitude >= 1e6 {
        return format_scientific(n as f64);
    }
    let decimals = if magnitude < 10.0 {
        5
    } else if magnitude < 100.0 {
        4
    } else if magnitude < 1000.0 {
        3
    } else if magnitude < 10000.0 {
        2
    } else if magnitude < 100000.0 {
        1
    } else {
        0
    };
    trim_fraction(format!("{:.*}", decimals, n))
}

fn format_scientific(n: f64) -> String {
    let s = format!("{:.5e}", n);
    let (mantissa, exponent) = match s.find('e') {
        Some(index) => (&s[..index], &s[index + 1..]),
        None => (s.as_str(), "0"),
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}E{}{:02}",
        trim_fraction(mantissa.to_string()),
        sign,
        exponent.abs()
    )
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_column() {
        assert_eq!(Val::Integer(5).to_string(), " 5 ");
        assert_eq!(Val::Integer(-5).to_string(), "-5 ");
        assert_eq!(Val::Bool(true).to_string(), " 1 ");
        assert_eq!(Val::from("HI").to_string(), "HI");
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(Val::Single(1.0 / 3.0).to_string(), " 0.33333 ");
        assert_eq!(Val::Single(12.5).to_string(), " 12.5 ");
        assert_eq!(Val::Single(-123.4567).to_string(), "-123.457 ");
        assert_eq!(Val::Single(99999.9).to_string(), " 99999.9 ");
        assert_eq!(Val::Single(123456.7).to_string(), " 123457 ");
        assert_eq!(Val::Single(0.0).to_string(), " 0 ");
        assert_eq!(Val::Single(0.1).to_string(), " 0.1 ");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(Val::Single(0.05).to_string(), " 5E-02 ");
        assert_eq!(Val::Single(1234567.0).to_string(), " 1.23457E+06 ");
        assert_eq!(Val::Integer(3000000).to_string(), " 3E+06 ");
        assert_eq!(Val::Single(-0.000123).to_string(), "-1.23E-04 ");
    }

    #[test]
    fn test_to_i32_truncates() {
        assert_eq!(Val::Single(2.9).to_i32(), Ok(2));
        assert_eq!(Val::Single(-2.9).to_i32(), Ok(-2));
        assert!(Val::from("X").to_i32().is_err());
    }
}
