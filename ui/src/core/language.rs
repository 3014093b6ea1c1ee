//! The closed set of languages the page ships in.

/// A supported language code. Everything outside this set is rejected at the
/// parsing boundary; no other code ever reaches the resolver or the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
    Fr,
}

/// Hard default when neither a stored preference nor a usable hint exists.
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    /// All supported languages, in switcher display order.
    pub const SUPPORTED: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    /// Short code as it appears in the `lang` query parameter and the
    /// preference store.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Native display label for the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    /// Regional locale tag used for Fluent assets and date formatting.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Fr => "fr-FR",
        }
    }

    /// Parse a short code. Unrecognized input yields `None`, never an error;
    /// callers fall through their precedence chain instead.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
