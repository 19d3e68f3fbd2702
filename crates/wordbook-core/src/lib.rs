pub mod dictionary;
pub mod error;
pub mod language;
pub mod translator;

pub use dictionary::Dictionary;
pub use error::TranslateError;
pub use language::Language;
pub use translator::Translator;
