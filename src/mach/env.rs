use super::{Address, Data, Stack, Val, Var, MAX_FOR_DEPTH, MAX_GOSUB_DEPTH};
use crate::lang::ast::Ident;

/// ## Environment
///
/// Everything a running program can change other than the program itself.

#[derive(Debug)]
pub struct Environment {
    pub vars: Var,
    pub data: Data,
    pub fors: Stack<ForCheck>,
    pub gosubs: Stack<Address>,
}

/// An active `FOR` loop. `resume` is the statement after the `FOR`.
#[derive(Debug, Clone)]
pub struct ForCheck {
    pub var: Ident,
    pub end: Val,
    pub step: Val,
    pub resume: Address,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            vars: Var::new(),
            data: Data::new(),
            fors: Stack::new(MAX_FOR_DEPTH, "TOO MANY FOR LOOPS"),
            gosubs: Stack::new(MAX_GOSUB_DEPTH, "TOO MANY GOSUBS"),
        }
    }
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.data.clear();
        self.clear_stacks();
    }

    pub fn clear_stacks(&mut self) {
        self.fors.clear();
        self.gosubs.clear();
    }
}
