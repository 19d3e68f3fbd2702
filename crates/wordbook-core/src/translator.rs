use std::collections::HashSet;
use std::fmt;

use crate::dictionary::Dictionary;
use crate::error::TranslateError;
use crate::language::Language;

/// Ordered collection of dictionaries with pair-routed and pair-agnostic
/// lookup. Always holds an initialized vector; the empty translator is a
/// valid state, not a null one.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dictionaries: Vec<Dictionary>,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            dictionaries: Vec::new(),
        }
    }

    pub fn with_dictionaries(dictionaries: Vec<Dictionary>) -> Self {
        Self { dictionaries }
    }

    /// Append a dictionary. Duplicate pairs are allowed; each participates
    /// independently in lookups.
    pub fn add_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionaries.push(dictionary);
    }

    pub fn dictionaries(&self) -> &[Dictionary] {
        &self.dictionaries
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// Route to the first held dictionary whose pair is exactly (from, to)
    /// and look the word up there. Matching is order-sensitive: a
    /// Polish -> English dictionary does not answer English -> Polish.
    pub fn translate_word(
        &self,
        word: &str,
        from: Language,
        to: Language,
    ) -> Result<&HashSet<String>, TranslateError> {
        for dictionary in &self.dictionaries {
            if dictionary.languages() == (from, to) {
                return dictionary.get_translation(word);
            }
        }
        tracing::debug!("no {from} -> {to} dictionary held");
        Err(TranslateError::DictionaryNotFound {
            dictionary: Dictionary::describe(from, to),
            translator: self.to_string(),
        })
    }

    /// Candidate sets from every held dictionary containing `word`, in held
    /// order. A dictionary lacking the word is skipped; this never fails,
    /// absence is an empty result.
    pub fn detect_language_translate_word(&self, word: &str) -> Vec<&HashSet<String>> {
        self.dictionaries
            .iter()
            .filter_map(|dictionary| dictionary.lookup(word))
            .collect()
    }

    /// Language pairs of the held dictionaries containing `word`, in held
    /// order.
    pub fn detect_language(&self, word: &str) -> Vec<(Language, Language)> {
        self.dictionaries
            .iter()
            .filter(|dictionary| dictionary.lookup(word).is_some())
            .map(|dictionary| dictionary.languages())
            .collect()
    }
}

impl fmt::Display for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dictionaries.is_empty() {
            return f.write_str("An empty Translator!");
        }
        let pairs: Vec<String> = self
            .dictionaries
            .iter()
            .map(|dictionary| {
                let (from, to) = dictionary.languages();
                format!("{from} -> {to}")
            })
            .collect();
        write!(f, "Translator({})", pairs.join(", "))
    }
}
