use crate::error::{Error, Result};
use crate::parse::{parse_structure, parse_variables};
use rustc_hash::FxHashMap;
use std::{fmt, path::Path};

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A slot in the grid that takes exactly one word.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
pub struct Variable {
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) direction: Direction,
    pub(crate) length: usize,
}

impl Variable {
    pub fn new(start_row: usize, start_col: usize, direction: Direction, length: usize) -> Variable {
        Variable {
            start_row,
            start_col,
            direction,
            length,
        }
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn cells(&self) -> CellIterator {
        CellIterator::new(*self)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.start_row, self.start_col, self.direction, self.length
        )
    }
}

/// Walks the `(row, col)` cells covered by a variable, first letter first.
#[derive(Clone, Debug)]
pub struct CellIterator {
    variable: Variable,
    index: usize,
}

impl CellIterator {
    pub fn new(variable: Variable) -> CellIterator {
        CellIterator { variable, index: 0 }
    }
}

impl Iterator for CellIterator {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.variable.length {
            return None;
        }

        let result = match self.variable.direction {
            Direction::Across => (
                self.variable.start_row,
                self.variable.start_col + self.index,
            ),
            Direction::Down => (
                self.variable.start_row + self.index,
                self.variable.start_col,
            ),
        };
        self.index += 1;
        Some(result)
    }
}

/// Grid geometry: which cells are open, the slots they form, and where slots cross.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Crossword {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<bool>,
    variables: Vec<Variable>,
    overlaps: FxHashMap<(Variable, Variable), (usize, usize)>,
    neighbors: FxHashMap<Variable, Vec<Variable>>,
}

impl Crossword {
    /// Parses a structure where `_` marks an open cell and anything else is blocked.
    pub fn new(structure: &str) -> Result<Crossword> {
        let (width, height, cells) = parse_structure(structure)?;
        Crossword::from_cells(width, height, cells)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Crossword> {
        let structure = std::fs::read_to_string(path)?;
        Crossword::new(&structure)
    }

    /// Builds geometry from a row-major vector of open (`true`) and blocked cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Crossword> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyStructure);
        }
        if cells.len() != width * height {
            return Err(Error::MismatchedDimensions {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let mut crossword = Crossword {
            width,
            height,
            cells,
            variables: vec![],
            overlaps: FxHashMap::default(),
            neighbors: FxHashMap::default(),
        };
        crossword.variables = parse_variables(&crossword);
        crossword.index_overlaps();
        Ok(crossword)
    }

    fn index_overlaps(&mut self) {
        let mut cell_owners: FxHashMap<(usize, usize), Vec<(Variable, usize)>> =
            FxHashMap::default();
        for variable in &self.variables {
            for (index, cell) in variable.cells().enumerate() {
                cell_owners
                    .entry(cell)
                    .or_insert_with(Vec::new)
                    .push((*variable, index));
            }
        }

        for owners in cell_owners.values() {
            for (x, i) in owners {
                for (y, j) in owners {
                    if x != y {
                        self.overlaps.insert((*x, *y), (*i, *j));
                    }
                }
            }
        }

        for variable in &self.variables {
            let neighbors = self
                .variables
                .iter()
                .filter(|other| self.overlaps.contains_key(&(*variable, **other)))
                .copied()
                .collect();
            self.neighbors.insert(*variable, neighbors);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Variables in scan order: row by row, down before across at a shared start cell.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Indices `(in x, in y)` of the cell shared by `x` and `y`, if they cross.
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    /// Every variable crossing `variable`, in variable order.
    pub fn neighbors(&self, variable: &Variable) -> &[Variable] {
        self.neighbors
            .get(variable)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Every crossing as `((x, y), (index in x, index in y))`, in both orientations.
    pub fn overlaps(&self) -> impl Iterator<Item = (&(Variable, Variable), &(usize, usize))> {
        self.overlaps.iter()
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.cells[row * self.width + col] {
                    '_'
                } else {
                    '#'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
