use crate::crossword::{Crossword, Variable};
use crate::vocabulary::Vocabulary;
use rustc_hash::FxHashMap;

/// Candidate words for every variable of a crossword.
///
/// Words are only ever removed, never added back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: FxHashMap<Variable, Vec<String>>,
}

impl Domains {
    /// Every variable starts out with the whole vocabulary.
    pub fn new(crossword: &Crossword, vocabulary: &Vocabulary) -> Domains {
        let words: Vec<String> = vocabulary.iter().cloned().collect();
        Domains {
            domains: crossword
                .variables()
                .iter()
                .map(|variable| (*variable, words.clone()))
                .collect(),
        }
    }

    pub fn words(&self, variable: &Variable) -> &[String] {
        self.domains
            .get(variable)
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self, variable: &Variable) -> usize {
        self.words(variable).len()
    }

    pub fn is_empty(&self, variable: &Variable) -> bool {
        self.words(variable).is_empty()
    }

    /// Total number of candidate words across all variables.
    pub fn size(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }

    /// Keeps only the words of `variable` matching `keep`, returning how many were dropped.
    pub(crate) fn retain<F>(&mut self, variable: &Variable, keep: F) -> usize
    where
        F: FnMut(&String) -> bool,
    {
        match self.domains.get_mut(variable) {
            Some(words) => {
                let before = words.len();
                words.retain(keep);
                before - words.len()
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Domains;
    use crate::{Crossword, Vocabulary};

    #[test]
    fn new_uses_whole_vocabulary() {
        let crossword = Crossword::new("___\n_#_\n___\n").unwrap();
        let vocabulary = Vocabulary::new(vec!["CAT", "DOGS", "A"]);
        let domains = Domains::new(&crossword, &vocabulary);

        for variable in crossword.variables() {
            assert_eq!(&["A", "CAT", "DOGS"], domains.words(variable));
        }
        assert_eq!(12, domains.size());
    }

    #[test]
    fn retain_reports_removals() {
        let crossword = Crossword::new("___\n").unwrap();
        let vocabulary = Vocabulary::new(vec!["CAT", "DOGS", "A"]);
        let mut domains = Domains::new(&crossword, &vocabulary);
        let variable = crossword.variables()[0];

        assert_eq!(2, domains.retain(&variable, |word| word.len() == 3));
        assert_eq!(0, domains.retain(&variable, |word| word.len() == 3));
        assert_eq!(1, domains.len(&variable));
        assert!(!domains.is_empty(&variable));
    }
}
