/// Lookup failures. Both carry pre-rendered descriptions and propagate to
/// the immediate caller; nothing is swallowed inside the library.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translation of the word '{word}' not found in {dictionary}!")]
    TranslationNotFound { word: String, dictionary: String },

    #[error("{dictionary} not found in {translator}!")]
    DictionaryNotFound { dictionary: String, translator: String },
}
