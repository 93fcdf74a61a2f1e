//! Fill a crossword grid from a word list by treating it as a constraint satisfaction problem.
//!
//! Each slot of the grid is a variable whose domain starts as the whole vocabulary. Domains are
//! pruned once by node consistency (word length) and AC-3 (crossing letters), then a
//! backtracking search picks one distinct word per slot so that every crossing agrees.

pub mod assignment;
pub mod consistency;
pub mod crossword;
pub mod domain;
pub mod error;
pub mod fill;
pub mod image;
pub mod order;
pub mod parse;
pub mod render;
pub mod vocabulary;

pub use assignment::Assignment;
pub use crossword::{Crossword, Direction, Variable};
pub use domain::Domains;
pub use error::{DomainWipeout, Error, NoSolution, Result};
pub use fill::{fill_crossword, Filler, FillerConfig, Solver, Strategy};
pub use order::{ValueOrder, VariableOrder};
pub use render::Rendered;
pub use vocabulary::Vocabulary;
