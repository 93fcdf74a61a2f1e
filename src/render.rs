use crate::{assignment::Assignment, crossword::Crossword, error::Result};
use std::{fmt, path::Path};

const BLOCKED_CELL: char = '█';

/// Letters placed by `assignment`, row by row. Cells no word covers are `None`.
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; crossword.width()]; crossword.height()];
    for (variable, word) in assignment.iter() {
        for ((row, col), c) in variable.cells().zip(word.chars()) {
            letters[row][col] = Some(c);
        }
    }
    letters
}

/// Text view of a (possibly partial) fill.
pub struct Rendered<'s> {
    crossword: &'s Crossword,
    letters: Vec<Vec<Option<char>>>,
}

impl<'s> Rendered<'s> {
    pub fn new(crossword: &'s Crossword, assignment: &Assignment) -> Rendered<'s> {
        Rendered {
            crossword,
            letters: letter_grid(crossword, assignment),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, letters) in self.letters.iter().enumerate() {
            for (col, letter) in letters.iter().enumerate() {
                if self.crossword.is_open(row, col) {
                    write!(f, "{}", letter.unwrap_or(' '))?;
                } else {
                    write!(f, "{}", BLOCKED_CELL)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{letter_grid, Rendered};
    use crate::{
        assignment::Assignment,
        crossword::{Crossword, Direction, Variable},
    };

    #[test]
    fn it_works() {
        let crossword = Crossword::new(
            "
#___#
#_##_
#_##_
#_##_
#____
",
        )
        .unwrap();
        let assignment = Assignment::new()
            .with(Variable::new(0, 1, Direction::Across, 3), "SIX")
            .with(Variable::new(0, 1, Direction::Down, 5), "SEVEN")
            .with(Variable::new(1, 4, Direction::Down, 4), "FIVE")
            .with(Variable::new(4, 1, Direction::Across, 4), "NINE");

        assert_eq!(
            "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n",
            Rendered::new(&crossword, &assignment).to_string()
        );
    }

    #[test]
    fn partial_fill_leaves_blanks() {
        let crossword = Crossword::new("___\n_#_\n").unwrap();
        let assignment = Assignment::new().with(Variable::new(0, 0, Direction::Across, 3), "CAT");

        let letters = letter_grid(&crossword, &assignment);
        assert_eq!(vec![Some('C'), Some('A'), Some('T')], letters[0]);
        assert_eq!(vec![None, None, None], letters[1]);

        assert_eq!("CAT\n █ \n", Rendered::new(&crossword, &assignment).to_string());
    }
}
