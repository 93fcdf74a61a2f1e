use crate::crossword::{Crossword, Variable};
use rustc_hash::{FxHashMap, FxHashSet};

/// Words chosen for some or all of a crossword's variables.
///
/// Search never edits an assignment in place; [`Assignment::with`] returns an extended copy so
/// sibling branches stay independent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    words: FxHashMap<Variable, String>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment::default()
    }

    pub fn with(&self, variable: Variable, word: &str) -> Assignment {
        let mut words = self.words.clone();
        words.insert(variable, word.to_owned());
        Assignment { words }
    }

    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(|word| word.as_str())
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.words.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.words
            .iter()
            .map(|(variable, word)| (variable, word.as_str()))
    }

    /// Every variable of `crossword` has a word.
    pub fn is_complete(&self, crossword: &Crossword) -> bool {
        self.words.len() == crossword.variables().len()
            && crossword
                .variables()
                .iter()
                .all(|variable| self.contains(variable))
    }

    /// Words fit their slots, no word is used twice, and crossing words share their letter.
    pub fn is_consistent(&self, crossword: &Crossword) -> bool {
        if self
            .words
            .iter()
            .any(|(variable, word)| word.chars().count() != variable.length)
        {
            return false;
        }

        let mut seen = FxHashSet::default();
        if !self.words.values().all(|word| seen.insert(word.as_str())) {
            return false;
        }

        crossword.overlaps().all(|((x, y), (i, j))| {
            match (self.words.get(x), self.words.get(y)) {
                (Some(a), Some(b)) => a.chars().nth(*i) == b.chars().nth(*j),
                _ => true,
            }
        })
    }
}
