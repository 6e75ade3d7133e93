use super::{Val, PIXEL_COLUMNS, PIXEL_ROWS, PRINT_ZONE_WIDTH};
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in functions
///
/// The pure part of each builtin. Anything needing the screen or the
/// program store is finished off by the runtime.

pub struct Function {}

impl Function {
    pub fn abs(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_abs() {
                Some(n) => Ok(Integer(n)),
                None => Ok(Single((n as f32).abs())),
            },
            Single(n) => Ok(Single(n.abs())),
            Bool(b) => Ok(Integer(b as i32)),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Largest whole number not greater than the argument.
    pub fn int(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => Ok(Integer(n)),
            Single(n) => {
                let n = n.floor();
                if n >= i32::min_value() as f32 && n < i32::max_value() as f32 {
                    Ok(Integer(n as i32))
                } else {
                    Ok(Single(n))
                }
            }
            Bool(b) => Ok(Integer(b as i32)),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn chr(val: Val) -> Result<Val> {
        let n = val.to_i32()?;
        if n < 0 || n > 255 {
            return Err(error!(IllegalQuantity));
        }
        Ok(Val::String((n as u8 as char).to_string().into()))
    }

    /// `RND(0)` is a fraction, `RND(N)` a whole number from 1 to N.
    pub fn rnd(val: Val) -> Result<Val> {
        let n = val.to_i32()?;
        let mut rng = rand::thread_rng();
        match n {
            0 => Ok(Val::Single(rng.gen::<f32>())),
            n if n > 0 => Ok(Val::Integer(rng.gen_range(1..=n))),
            _ => Err(error!(IllegalQuantity)),
        }
    }

    /// Padding that moves the cursor from `column` to `val`. Moving left
    /// does nothing.
    pub fn tab(val: Val, column: usize) -> Result<Val> {
        let n = val.to_i32()?;
        if n < 0 || n > 255 {
            return Err(error!(IllegalQuantity));
        }
        let n = n as usize;
        Ok(Val::String(" ".repeat(n.saturating_sub(column)).into()))
    }

    /// Padding to the start of the next print zone.
    pub fn zone(column: usize) -> Val {
        let len = PRINT_ZONE_WIDTH - column % PRINT_ZONE_WIDTH;
        Val::String(" ".repeat(len).into())
    }

    /// Pixel coordinates for `SET`, `RESET` and `POINT`.
    pub fn pixel(x: Val, y: Val) -> Result<(usize, usize)> {
        let x = x.to_i32()?;
        let y = y.to_i32()?;
        if x < 0 || y < 0 || x as usize >= PIXEL_COLUMNS || y as usize >= PIXEL_ROWS {
            return Err(error!(IllegalQuantity));
        }
        Ok((x as usize, y as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_floors() {
        assert_eq!(Function::int(Val::Single(2.7)), Ok(Val::Integer(2)));
        assert_eq!(Function::int(Val::Single(-2.5)), Ok(Val::Integer(-3)));
    }

    #[test]
    fn test_rnd_range() {
        for _ in 0..100 {
            match Function::rnd(Val::Integer(6)).unwrap() {
                Val::Integer(n) => assert!(n >= 1 && n <= 6),
                other => panic!("{:?}", other),
            }
            match Function::rnd(Val::Integer(0)).unwrap() {
                Val::Single(n) => assert!(n >= 0.0 && n < 1.0),
                other => panic!("{:?}", other),
            }
        }
        assert!(Function::rnd(Val::Integer(-1)).is_err());
    }

    #[test]
    fn test_zone_and_tab() {
        assert_eq!(Function::zone(0), Val::from(" ".repeat(15).as_str()));
        assert_eq!(Function::zone(16), Val::from(" ".repeat(14).as_str()));
        assert_eq!(Function::tab(Val::Integer(5), 2), Ok(Val::from("   ")));
        assert_eq!(Function::tab(Val::Integer(1), 2), Ok(Val::from("")));
    }

    #[test]
    fn test_pixel_bounds() {
        assert_eq!(
            Function::pixel(Val::Integer(127), Val::Integer(47)),
            Ok((127, 47))
        );
        assert!(Function::pixel(Val::Integer(128), Val::Integer(0)).is_err());
        assert!(Function::pixel(Val::Integer(0), Val::Integer(-1)).is_err());
    }

    #[test]
    fn test_chr() {
        assert_eq!(Function::chr(Val::Integer(65)), Ok(Val::from("A")));
        assert!(Function::chr(Val::Integer(256)).is_err());
    }
}
