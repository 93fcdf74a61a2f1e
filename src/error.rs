use thiserror::Error;

use crate::crossword::Variable;

/// Errors raised while loading a puzzle or its vocabulary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Structure contains no cells")]
    EmptyStructure,

    #[error("Word list contains no words")]
    EmptyWordList,

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("Font file could not be parsed")]
    Font,

    #[error("Expected {expected} cells for the given dimensions, found {actual}")]
    MismatchedDimensions { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a fill produced no assignment.
///
/// Both variants display the same way; callers that only care whether a fill exists can treat
/// them alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoSolution {
    /// Arc consistency emptied the domain of `variable` before search began.
    #[error("No solution.")]
    Inconsistent { variable: Variable },

    /// Backtracking tried every candidate without completing the grid.
    #[error("No solution.")]
    Exhausted,
}

/// Arc consistency left `variable` with no remaining words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainWipeout {
    pub variable: Variable,
}

impl From<DomainWipeout> for NoSolution {
    fn from(wipeout: DomainWipeout) -> NoSolution {
        NoSolution::Inconsistent {
            variable: wipeout.variable,
        }
    }
}
