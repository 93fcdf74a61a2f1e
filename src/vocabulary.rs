use crate::error::{Error, Result};
use crate::parse::parse_words;
use std::{collections::BTreeSet, path::Path};

/// The set of words a fill may draw from, kept in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Vocabulary
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(contents: &str) -> Result<Vocabulary> {
        let vocabulary = Vocabulary::new(parse_words(contents));
        if vocabulary.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(vocabulary)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
        let contents = std::fs::read_to_string(path)?;
        Vocabulary::parse(&contents)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}
