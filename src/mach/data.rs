use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## DATA elements
///
/// Everything in every `DATA` statement of the program, in line order,
/// with the cursor `READ` takes from.

#[derive(Debug, Default)]
pub struct Data {
    vec: Vec<Val>,
    cursor: usize,
}

impl Data {
    pub fn new() -> Data {
        Data::default()
    }

    pub fn clear(&mut self) {
        self.vec.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn add(&mut self, val: Val) {
        self.vec.push(val);
    }

    pub fn get_next(&mut self) -> Result<Val> {
        match self.vec.get(self.cursor) {
            Some(val) => {
                self.cursor += 1;
                Ok(val.clone())
            }
            None => Err(error!(OutOfData)),
        }
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_restore() {
        let mut data = Data::new();
        data.add(Val::Integer(1));
        data.add(Val::from("X"));
        assert_eq!(data.get_next(), Ok(Val::Integer(1)));
        assert_eq!(data.get_next(), Ok(Val::from("X")));
        assert!(data.get_next().is_err());
        data.move_first();
        assert_eq!(data.get_next(), Ok(Val::Integer(1)));
    }
}
