//! Makefile documentation model and parser.

pub mod parser;
pub mod types;

pub use types::{Document, Module, Section, Submodule, Target};
