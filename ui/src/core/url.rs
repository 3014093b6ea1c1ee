//! URL mirroring for the active language.
//!
//! The `lang` query parameter keeps the page URL shareable. Rewrites use
//! replace-state semantics: no new history entry, no scroll movement. The
//! browser write is dispatched onto the event loop so a selection never
//! blocks the interactive thread; the rewrite is idempotent, so a deferred
//! write that lands after a further change is harmless.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Name of the query parameter mirroring the active language.
pub const QUERY_PARAM: &str = "lang";

/// The `lang` query parameter as a capability: read the current value,
/// replace it in place.
pub trait LangQuery {
    fn read(&self) -> Option<String>;
    fn replace(&self, code: &'static str);
}

impl<T: LangQuery + ?Sized> LangQuery for &T {
    fn read(&self) -> Option<String> {
        (**self).read()
    }
    fn replace(&self, code: &'static str) {
        (**self).replace(code)
    }
}

/// In-memory query slot, used by tests and as the native fallback. Counts
/// writes so tests can assert that redundant rewrites are skipped.
#[derive(Debug, Default)]
pub struct MemoryQuery {
    param: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            param: Mutex::new(Some(code.to_string())),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl LangQuery for MemoryQuery {
    fn read(&self) -> Option<String> {
        self.param.lock().ok().and_then(|p| p.clone())
    }

    fn replace(&self, code: &'static str) {
        if let Ok(mut param) = self.param.lock() {
            *param = Some(code.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Browser-backed query parameter, wired to `location.search` and
/// `history.replaceState`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserQuery;

#[cfg(target_arch = "wasm32")]
impl LangQuery for BrowserQuery {
    fn read(&self) -> Option<String> {
        read_location_param()
    }

    fn replace(&self, code: &'static str) {
        // Deferred so the select handler returns before the URL rewrite runs.
        wasm_bindgen_futures::spawn_local(async move {
            replace_location_param(code);
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn read_location_param() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(QUERY_PARAM)
}

#[cfg(target_arch = "wasm32")]
fn replace_location_param(code: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(pathname), Ok(search)) = (location.pathname(), location.search()) else {
        return;
    };
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return;
    };
    params.set(QUERY_PARAM, code);
    let next_url = format!("{pathname}?{}", String::from(params.to_string()));
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&next_url),
        );
    }
}

/// Request-time language hint: the `lang` parameter of the incoming URL.
/// Absent (or unreadable) is not an error, merely "no hint".
#[cfg(target_arch = "wasm32")]
pub fn lang_hint() -> Option<String> {
    read_location_param()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn lang_hint() -> Option<String> {
    None
}

/// The query-parameter capability for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn lang_query() -> impl LangQuery {
    BrowserQuery
}

#[cfg(not(target_arch = "wasm32"))]
pub fn lang_query() -> impl LangQuery {
    static NATIVE_QUERY: once_cell::sync::Lazy<MemoryQuery> =
        once_cell::sync::Lazy::new(MemoryQuery::new);
    &*NATIVE_QUERY
}
