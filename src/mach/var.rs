use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Only the first letter of a name counts, plus the `$` of a string
/// variable. `COUNT` and `CHRIS` are the same variable.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
    arrays: HashMap<Rc<str>, HashMap<i32, Val>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.arrays.clear();
    }

    fn key(var_name: &str) -> Rc<str> {
        let mut key: String = var_name
            .chars()
            .take(1)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if var_name.ends_with('$') {
            key.push('$');
        }
        key.into()
    }

    fn default_for(key: &str) -> Val {
        if key.ends_with('$') {
            Val::String("".into())
        } else {
            Val::Integer(0)
        }
    }

    /// True when both names refer to the same variable.
    pub fn same(a: &str, b: &str) -> bool {
        Var::key(a) == Var::key(b)
    }

    pub fn exists(&self, var_name: &str) -> bool {
        self.vars.contains_key(&Var::key(var_name))
    }

    /// Reading a variable defines it.
    pub fn get(&mut self, var_name: &str) -> Val {
        let key = Var::key(var_name);
        self.vars
            .entry(key.clone())
            .or_insert_with(|| Var::default_for(&key))
            .clone()
    }

    pub fn assign(&mut self, var_name: &str, value: Val) -> Result<Val> {
        let key = Var::key(var_name);
        let value = Var::validate(&key, value)?;
        self.vars.insert(key, value.clone());
        Ok(value)
    }

    pub fn get_array(&mut self, var_name: &str, index: i32) -> Val {
        self.arrays
            .entry(Var::key(var_name))
            .or_default()
            .entry(index)
            .or_insert(Val::Integer(0))
            .clone()
    }

    pub fn assign_array(&mut self, var_name: &str, index: i32, value: Val) -> Result<Val> {
        let key = Var::key(var_name);
        if key.ends_with('$') {
            return Err(error!(TypeMismatch));
        }
        let value = Var::validate(&key, value)?;
        self.arrays
            .entry(key)
            .or_default()
            .insert(index, value.clone());
        Ok(value)
    }

    /// A numeric variable takes a one character string as zero; anything
    /// longer will not fit.
    fn validate(key: &str, value: Val) -> Result<Val> {
        match (key.ends_with('$'), value) {
            (true, Val::String(s)) => Ok(Val::String(s)),
            (true, _) => Err(error!(TypeMismatch)),
            (false, Val::String(s)) => {
                if s.chars().count() <= 1 {
                    Ok(Val::Integer(0))
                } else {
                    Err(error!(StringTooLong))
                }
            }
            (false, Val::Bool(b)) => Ok(Val::Integer(b as i32)),
            (false, value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_letter_is_significant() {
        let mut var = Var::new();
        var.assign("COUNT", Val::Integer(3)).unwrap();
        assert_eq!(var.get("CHRIS"), Val::Integer(3));
        assert_eq!(var.get("c"), Val::Integer(3));
        assert_eq!(var.get("C$"), Val::from(""));
    }

    #[test]
    fn test_get_defines() {
        let mut var = Var::new();
        assert!(!var.exists("Y"));
        assert_eq!(var.get("Y"), Val::Integer(0));
        assert!(var.exists("Y"));
    }

    #[test]
    fn test_string_into_numeric() {
        let mut var = Var::new();
        assert_eq!(var.assign("A", Val::from("X")), Ok(Val::Integer(0)));
        let e = var.assign("A", Val::from("XY")).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::StringTooLong);
        assert_eq!(e.kind(), crate::lang::ErrorKind::ValueOutOfRange);
        assert!(var.assign("A$", Val::Integer(1)).is_err());
    }

    #[test]
    fn test_sparse_array() {
        let mut var = Var::new();
        assert_eq!(var.get_array("A", 500), Val::Integer(0));
        var.assign_array("A", 3, Val::Single(1.5)).unwrap();
        assert_eq!(var.get_array("ALPHA", 3), Val::Single(1.5));
        assert_eq!(var.get("A"), Val::Integer(0));
    }
}
