use super::ast::*;
use super::token::*;
use super::*;

mod parse_test;
