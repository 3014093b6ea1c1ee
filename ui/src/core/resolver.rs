//! Language resolution: one precedence policy, one update operation.
//!
//! Three representations of "current language" exist: the URL parameter, the
//! persisted preference, and the in-memory active value. The resolver owns
//! the precedence at load time and keeps the first two in sync on change;
//! the active value itself lives in a signal owned by the rendering layer.

use crate::core::language::{Language, DEFAULT_LANGUAGE};
use crate::core::storage::PreferenceStore;
use crate::core::url::LangQuery;

pub struct LanguageResolver<S, Q> {
    store: S,
    query: Q,
}

impl<S: PreferenceStore, Q: LangQuery> LanguageResolver<S, Q> {
    pub fn new(store: S, query: Q) -> Self {
        Self { store, query }
    }

    /// Compute the initial language. Never fails: invalid or missing inputs
    /// fall through to the next step.
    ///
    /// 1. A valid persisted preference wins (returning-visitor intent beats
    ///    a possibly-stale shared link).
    /// 2. Otherwise a valid incoming hint wins.
    /// 3. Otherwise the hard default, `en`.
    pub fn initial(&self, hint: Option<&str>) -> Language {
        if let Some(stored) = self.store.load() {
            if let Some(lang) = Language::from_code(&stored) {
                return lang;
            }
        }
        hint.and_then(Language::from_code).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Apply a user selection. Persists first so back-navigation never shows
    /// a stale language, then rewrites the URL parameter only when it
    /// differs. Selecting the already-active language is a no-op on the URL.
    pub fn select(&self, next: Language) -> Language {
        self.store.save(next.code());
        if self.query.read().as_deref() != Some(next.code()) {
            self.query.replace(next.code());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::core::url::MemoryQuery;

    fn resolver(store: MemoryStore, query: MemoryQuery) -> LanguageResolver<MemoryStore, MemoryQuery> {
        LanguageResolver::new(store, query)
    }

    #[test]
    fn stored_preference_beats_incoming_hint() {
        let r = resolver(MemoryStore::with_value("fr"), MemoryQuery::new());
        assert_eq!(r.initial(Some("es")), Language::Fr);
    }

    #[test]
    fn hint_wins_without_stored_preference() {
        let r = resolver(MemoryStore::new(), MemoryQuery::new());
        assert_eq!(r.initial(Some("es")), Language::Es);
    }

    #[test]
    fn defaults_to_english_without_usable_inputs() {
        let r = resolver(MemoryStore::new(), MemoryQuery::new());
        assert_eq!(r.initial(None), Language::En);
        assert_eq!(r.initial(Some("zz")), Language::En);
        assert_eq!(r.initial(Some("")), Language::En);
    }

    #[test]
    fn invalid_stored_preference_is_treated_as_absent() {
        let r = resolver(MemoryStore::with_value("klingon"), MemoryQuery::new());
        assert_eq!(r.initial(Some("es")), Language::Es);
        let r = resolver(MemoryStore::with_value("klingon"), MemoryQuery::new());
        assert_eq!(r.initial(None), Language::En);
    }

    #[test]
    fn select_persists_and_mirrors_into_url() {
        let r = resolver(MemoryStore::new(), MemoryQuery::new());
        let active = r.select(Language::Fr);
        assert_eq!(active, Language::Fr);
        assert_eq!(r.store.load().as_deref(), Some("fr"));
        assert_eq!(r.query.read().as_deref(), Some("fr"));
    }

    #[test]
    fn select_twice_with_same_language_rewrites_url_once() {
        let r = resolver(MemoryStore::new(), MemoryQuery::new());
        r.select(Language::Fr);
        assert_eq!(r.query.write_count(), 1);
        r.select(Language::Fr);
        assert_eq!(r.query.write_count(), 1);
        assert_eq!(r.store.load().as_deref(), Some("fr"));
        assert_eq!(r.query.read().as_deref(), Some("fr"));
    }

    #[test]
    fn select_skips_rewrite_when_url_already_matches() {
        let r = resolver(MemoryStore::new(), MemoryQuery::with_value("es"));
        r.select(Language::Es);
        assert_eq!(r.query.write_count(), 0);
        assert_eq!(r.store.load().as_deref(), Some("es"));
    }

    #[test]
    fn selection_round_trips_through_initialization() {
        let r = resolver(MemoryStore::new(), MemoryQuery::new());
        r.select(Language::Fr);
        assert_eq!(r.initial(Some("es")), Language::Fr);
    }
}
