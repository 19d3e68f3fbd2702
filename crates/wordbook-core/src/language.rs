use std::fmt;

/// Closed set of languages a dictionary pair can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Polish,
    Spanish,
    German,
    Italian,
    French,
}

impl Language {
    /// Every selectable language, in presentation order.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Polish,
        Language::Spanish,
        Language::German,
        Language::Italian,
        Language::French,
    ];

    /// Display name. Maintained as an explicit table rather than derived
    /// from the variant identifier.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Polish => "Polish",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::French => "French",
        }
    }

    /// Resolve a display name back to a variant, case-insensitively.
    pub fn from_name(name: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn display_uses_name_table() {
        assert_eq!(Language::Polish.to_string(), "Polish");
        assert_eq!(Language::English.to_string(), "English");
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Language::from_name("polish"), Some(Language::Polish));
        assert_eq!(Language::from_name("SPANISH"), Some(Language::Spanish));
        assert_eq!(Language::from_name("French"), Some(Language::French));
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        assert_eq!(Language::from_name("klingon"), None);
        assert_eq!(Language::from_name(""), None);
    }
}
