//! Internationalization (i18n) support for `dpita-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/dpita-ui.ftl   (fallback/reference)
//!   es-ES/dpita-ui.ftl   (additional locale)
//!   fr-FR/dpita-ui.ftl   (additional locale)
//! ```
//!
//! Unlike a single mutable global loader, one `FluentLanguageLoader` is built
//! per supported language at first use, each force-selected to its locale
//! with en-US as fallback. That makes every lookup total over the closed
//! language set: `t!(lang, "key")` resolves against the loader for `lang`
//! with no runtime language switching involved.
//!
//! Usage in a component:
//! ```ignore
//! use ui::core::language::Language;
//! use ui::t;
//! let label = t!(Language::Fr, "nav-toolkit");
//! ```
//!
//! To add a new locale:
//! 1. Copy `en-US/dpita-ui.ftl` to `i18n/<lang-id>/dpita-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add the language to `core::language` and register a loader here.
//! 4. Run tests to ensure completeness.

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "nav-toolkit")
///     t!(lang, "hello-user", name = "Emma")
///
/// This expands to `fl!(loader(lang), ...)` keeping callsites short while
/// ensuring all lookups route through the per-language loaders.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "dpita-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

fn build_loader(locale: &str) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = "en-US"
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    let requested: LanguageIdentifier =
        locale.parse().expect("valid supported language identifier");
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
        eprintln!("[i18n] Failed selecting {locale} ({err}); continuing with fallback");
    }
    loader
}

static EN_US: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader("en-US"));
static ES_ES: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader("es-ES"));
static FR_FR: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader("fr-FR"));

/// Loader for one supported language (total over the closed set).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::En => &EN_US,
        Language::Es => &ES_ES,
        Language::Fr => &FR_FR,
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn every_supported_language_is_embedded() {
        let embedded = available_languages();
        for lang in Language::SUPPORTED {
            assert!(
                embedded.iter().any(|l| l == lang.locale()),
                "no embedded assets for {}",
                lang.locale()
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        let s = fl!(loader(Language::En), "nav-toolkit");
        assert_eq!(s, "Toolkit");
    }

    #[test]
    fn loaders_resolve_per_language() {
        assert_eq!(t!(Language::En, "language-label"), "Language");
        assert_eq!(t!(Language::Es, "language-label"), "Idioma");
        assert_eq!(t!(Language::Fr, "language-label"), "Langue");
    }
}
