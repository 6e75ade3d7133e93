/*!
## Rust Machine Module

This Rust module holds the runtime values, variable memory, the program
store and the interpreter that executes Level I BASIC.

*/

mod data;
mod display;
mod env;
mod function;
mod listing;
mod operation;
mod runtime;
mod stack;
mod val;
mod var;

pub use data::Data;
pub use display::{Display, MemoryStorage, Storage, Transcript};
pub use env::{Environment, ForCheck};
pub use function::Function;
pub use listing::{Listing, Slot};
pub use operation::Operation;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;

/// Location of an executable statement. Program addresses index the
/// compiled listing; direct addresses index the line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    Program(usize),
    Direct(usize),
}

/// Bytes free on a freshly reset 4K Level I machine.
pub const MEM_BASELINE: usize = 3583;

/// Array elements cost four bytes each out of free memory.
pub const ARRAY_ELEMENT_SIZE: usize = 4;

pub const PRINT_ZONE_WIDTH: usize = 15;

pub const SCREEN_COLUMNS: usize = 64;
pub const SCREEN_ROWS: usize = 16;

pub const PIXEL_COLUMNS: usize = 128;
pub const PIXEL_ROWS: usize = 48;

/// `LIST` waits for a key after this many lines.
pub const LIST_PAGE_LINES: usize = 12;

pub const MAX_FOR_DEPTH: usize = 64;
pub const MAX_GOSUB_DEPTH: usize = 256;
