//! # Level I BASIC
//!
//! The BASIC of the TRS-80 Model I as it came on its 4K ROM. Programs
//! written for Level I, abbreviations and all, load and run unchanged.
//!
//! Begin by opening a terminal and running the executable. If you get
//! the following, you have achieved success.
//! ```text
//! LEVEL I BASIC
//! READY
//! █
//! ```
//!
//! A program file given on the command line is loaded at start-up.
//! Set `RUST_LOG` or pass `--log debug` to watch the interpreter work;
//! logs go to stderr.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
