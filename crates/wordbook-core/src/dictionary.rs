use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::TranslateError;
use crate::language::Language;

/// One-directional word-translation table for a single ordered language
/// pair. A present key always maps to a non-empty candidate set; an absent
/// key means "no known translation". Entries only grow, there is no removal.
#[derive(Debug, Clone)]
pub struct Dictionary {
    from: Language,
    to: Language,
    translations: HashMap<String, HashSet<String>>,
}

impl Dictionary {
    pub fn new(from: Language, to: Language) -> Self {
        Self {
            from,
            to,
            translations: HashMap::new(),
        }
    }

    /// Human-readable label for a pair, e.g. "Polish -> English dictionary".
    /// Also used to build the not-found message for a pair no dictionary
    /// covers.
    pub fn describe(from: Language, to: Language) -> String {
        format!("{from} -> {to} dictionary")
    }

    /// The (from, to) pair fixed at construction.
    pub fn languages(&self) -> (Language, Language) {
        (self.from, self.to)
    }

    /// Add candidate translations for `word`, unioned into any existing set.
    ///
    /// Zero candidates is a no-op: an entry only exists once it has at least
    /// one candidate.
    pub fn add_translation<I, S>(&mut self, word: &str, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut candidates = candidates.into_iter().peekable();
        if candidates.peek().is_none() {
            return;
        }
        self.translations
            .entry(word.to_string())
            .or_default()
            .extend(candidates.map(Into::into));
    }

    /// Union-merge a batch of entries, as produced by an import. Entries
    /// with no candidates are skipped to keep present keys non-empty.
    /// Returns how many entries were merged.
    pub fn merge_entries<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut merged = 0;
        for (word, candidates) in entries {
            if candidates.is_empty() {
                tracing::warn!("skipping entry '{word}': no candidates");
                continue;
            }
            self.translations.entry(word).or_default().extend(candidates);
            merged += 1;
        }
        merged
    }

    /// Non-failing lookup; `None` means the word is unknown here.
    pub fn lookup(&self, word: &str) -> Option<&HashSet<String>> {
        self.translations.get(word)
    }

    /// Candidate set for `word`, or `TranslationNotFound` carrying the word
    /// and this dictionary's description.
    pub fn get_translation(&self, word: &str) -> Result<&HashSet<String>, TranslateError> {
        self.lookup(word)
            .ok_or_else(|| TranslateError::TranslationNotFound {
                word: word.to_string(),
                dictionary: self.to_string(),
            })
    }

    /// Iterate (word, candidate set) entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.translations
            .iter()
            .map(|(word, candidates)| (word.as_str(), candidates))
    }

    /// Number of source words held.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::describe(self.from, self.to))
    }
}
