use dioxus::prelude::*;

use crate::catalog;
use crate::core::format;
use crate::core::language::Language;
use crate::core::resolver::LanguageResolver;
use crate::core::{storage, url};
use crate::t;

// Header stylesheet (brand, nav links, locale switcher, timestamp badge)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Page header: skip link, brand + tagline, anchor navigation, the language
/// switcher, and the localized timestamp badge.
///
/// The switcher is the single writer of the shared `Signal<Language>`: a
/// selection routes through the resolver (persist, then conditional URL
/// rewrite) before the signal updates and dependents re-render. The timestamp
/// is recomputed on every render so a language change immediately reformats
/// it with the new locale.
#[component]
pub fn Header() -> Element {
    let mut active = use_context::<Signal<Language>>();
    let lang = active();
    let content = catalog::bundle(lang);
    let timestamp = format::localized_timestamp(lang, format::local_now());

    let on_change = move |evt: dioxus::events::FormEvent| {
        // The select only offers the closed set; anything else is ignored.
        if let Some(next) = Language::from_code(&evt.value()) {
            let resolver =
                LanguageResolver::new(storage::preference_store(), url::lang_query());
            active.set(resolver.select(next));
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        a { class: "skip-link", href: "#main-content", {t!(lang, "skip-link")} }

        header { class: "header", aria_label: "Primary",
            div { class: "header__inner",
                div { class: "header__brand",
                    span { class: "header__brand-mark", "DPITA" }
                    p { class: "header__tagline", "{content.tagline}" }
                }

                nav { class: "header__links",
                    { content.navigation.iter().map(|item| {
                        rsx! {
                            a {
                                key: "{lang}-{item.href}",
                                class: "header__link",
                                href: item.href,
                                "{item.label}"
                            }
                        }
                    })}
                }

                div { class: "header__meta",
                    div { class: "header__locale",
                        label {
                            class: "header__locale-label",
                            r#for: "language-select",
                            {t!(lang, "language-label")}
                        }
                        select {
                            id: "language-select",
                            value: "{lang.code()}",
                            aria_label: "Select site language",
                            oninput: on_change,
                            { Language::SUPPORTED.iter().map(|option| {
                                let code = option.code();
                                let label = option.label();
                                rsx! {
                                    option { key: "{code}", value: "{code}", "{label}" }
                                }
                            })}
                        }
                    }
                    span { class: "header__timestamp", "{timestamp}" }
                }
            }
        }
    }
}
