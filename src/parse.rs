use crate::crossword::{Crossword, Direction, Variable};
use crate::error::{Error, Result};

const OPEN_CELL: char = '_';

/// Reads a structure into `(width, height, cells)`. Short rows are padded with blocked cells.
///
/// Every line is a row, including rows with no open cells. A single leading newline and any
/// trailing empty lines are ignored.
pub(crate) fn parse_structure(structure: &str) -> Result<(usize, usize, Vec<bool>)> {
    let structure = structure.strip_prefix('\n').unwrap_or(structure);
    let lines: Vec<&str> = structure.lines().collect();
    let height = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map(|last| last + 1)
        .ok_or(Error::EmptyStructure)?;
    let width = lines[..height]
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut cells = Vec::with_capacity(width * height);
    for line in &lines[..height] {
        let mut row: Vec<bool> = line.chars().map(|c| c == OPEN_CELL).collect();
        row.resize(width, false);
        cells.extend(row);
    }

    Ok((width, height, cells))
}

pub(crate) fn parse_variables(crossword: &Crossword) -> Vec<Variable> {
    let mut result = vec![];

    for row in 0..crossword.height {
        for col in 0..crossword.width {
            if !crossword.is_open(row, col) {
                continue;
            }

            // a word starts here if the cell before it is blocked or off the grid
            if row == 0 || !crossword.is_open(row - 1, col) {
                let length = (row..crossword.height)
                    .take_while(|r| crossword.is_open(*r, col))
                    .count();
                if length > 1 {
                    result.push(Variable::new(row, col, Direction::Down, length));
                }
            }

            if col == 0 || !crossword.is_open(row, col - 1) {
                let length = (col..crossword.width)
                    .take_while(|c| crossword.is_open(row, *c))
                    .count();
                if length > 1 {
                    result.push(Variable::new(row, col, Direction::Across, length));
                }
            }
        }
    }

    result
}

/// One word per line; words are trimmed and upper-cased, blank lines are skipped.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_uppercase())
        .collect()
}
