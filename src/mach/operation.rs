use super::Val;
use crate::error;
use crate::lang::{ast::Operator, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Operators
///
/// Integers widen to singles when mixed or on overflow. `Bool` comes out
/// of comparisons; `+` and `*` on two of them are OR and AND, otherwise
/// they count as 1 and 0. Strings only compare.

pub struct Operation {}

enum Pair {
    Integer(i32, i32),
    Single(f32, f32),
    String(Rc<str>, Rc<str>),
    Bool(bool, bool),
}

impl Pair {
    fn widen(lhs: Val, rhs: Val) -> Result<Pair> {
        use Val::*;
        match (lhs, rhs) {
            (Bool(l), Bool(r)) => Ok(Pair::Bool(l, r)),
            (String(l), String(r)) => Ok(Pair::String(l, r)),
            (String(_), _) | (_, String(_)) => Err(error!(TypeMismatch)),
            (Single(l), r) => Ok(Pair::Single(l, r.to_f32()?)),
            (l, Single(r)) => Ok(Pair::Single(l.to_f32()?, r)),
            (l, r) => Ok(Pair::Integer(l.to_i32()?, r.to_i32()?)),
        }
    }

    /// Arithmetic other than `+` and `*` sees booleans as numbers.
    fn numeric(self) -> Result<Pair> {
        match self {
            Pair::Bool(l, r) => Ok(Pair::Integer(l as i32, r as i32)),
            Pair::String(..) => Err(error!(TypeMismatch)),
            pair => Ok(pair),
        }
    }
}

impl Operation {
    pub fn binary(lhs: Val, op: Operator, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Equal => Operation::equal(lhs, rhs),
            NotEqual => Ok(Val::Bool(!Operation::equal(lhs, rhs)?.is_true())),
            Less => Operation::less(lhs, rhs),
            LessEqual => Ok(Val::Bool(!Operation::less(rhs, lhs)?.is_true())),
            Greater => Operation::less(rhs, lhs),
            GreaterEqual => Ok(Val::Bool(!Operation::less(lhs, rhs)?.is_true())),
        }
    }

    pub fn unary(op: Operator, val: Val) -> Result<Val> {
        match op {
            Operator::Minus => Operation::negate(val),
            Operator::Plus if !val.is_string() => Ok(val),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Ok(Single(-(n as f32))),
            },
            Single(n) => Ok(Single(-n)),
            Bool(b) => Ok(Integer(-(b as i32))),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        match Pair::widen(lhs, rhs)? {
            Pair::Bool(l, r) => Ok(Val::Bool(l || r)),
            Pair::Integer(l, r) => match l.checked_add(r) {
                Some(n) => Ok(Val::Integer(n)),
                None => Ok(Val::Single(l as f32 + r as f32)),
            },
            Pair::Single(l, r) => Operation::finite(l + r),
            Pair::String(..) => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        match Pair::widen(lhs, rhs)?.numeric()? {
            Pair::Integer(l, r) => match l.checked_sub(r) {
                Some(n) => Ok(Val::Integer(n)),
                None => Ok(Val::Single(l as f32 - r as f32)),
            },
            Pair::Single(l, r) => Operation::finite(l - r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        match Pair::widen(lhs, rhs)? {
            Pair::Bool(l, r) => Ok(Val::Bool(l && r)),
            Pair::Integer(l, r) => match l.checked_mul(r) {
                Some(n) => Ok(Val::Integer(n)),
                None => Ok(Val::Single(l as f32 * r as f32)),
            },
            Pair::Single(l, r) => Operation::finite(l * r),
            Pair::String(..) => Err(error!(TypeMismatch)),
        }
    }

    /// Integer division stays integer only when it is exact.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        match Pair::widen(lhs, rhs)?.numeric()? {
            Pair::Integer(_, 0) => Err(error!(DivisionByZero)),
            Pair::Integer(l, r) => match (l.checked_rem(r), l.checked_div(r)) {
                (Some(0), Some(n)) => Ok(Val::Integer(n)),
                _ => Ok(Val::Single(l as f32 / r as f32)),
            },
            Pair::Single(l, r) => {
                if r == 0.0 {
                    Err(error!(DivisionByZero))
                } else {
                    Operation::finite(l / r)
                }
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn finite(n: f32) -> Result<Val> {
        if n.is_finite() {
            Ok(Val::Single(n))
        } else {
            Err(error!(Overflow))
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        let eq = match Pair::widen(lhs, rhs)? {
            Pair::Integer(l, r) => l == r,
            Pair::Single(l, r) => (l - r).abs() <= std::f32::EPSILON * l.abs().max(r.abs()),
            Pair::String(l, r) => l == r,
            Pair::Bool(l, r) => l == r,
        };
        Ok(Val::Bool(eq))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let lt = match Pair::widen(lhs, rhs)? {
            Pair::Integer(l, r) => l < r,
            Pair::Single(l, r) => l < r,
            Pair::String(l, r) => l < r,
            Pair::Bool(l, r) => !l & r,
        };
        Ok(Val::Bool(lt))
    }
}
