use dioxus::prelude::*;

use crate::catalog::{self, ContentBundle};
use crate::core::language::Language;
use crate::t;

/// The landing page body. A thin observer: every change of the shared
/// language signal re-fetches the matching bundle and re-renders. Lookup is
/// total, so there is no loading or error state.
#[component]
pub fn Landing() -> Element {
    let active = use_context::<Signal<Language>>();
    let lang = active();
    let content = catalog::bundle(lang);

    rsx! {
        main { id: "main-content", class: "landing",
            {hero_section(&content)}
            {toolkit_section(lang, &content)}
            {highlights_section(lang, &content)}
            {privacy_section(lang, &content)}
            {testimonials_section(lang, &content)}
            {faq_section(lang, &content)}
        }
        {footer_section(&content)}
    }
}

fn hero_section(content: &ContentBundle) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__copy",
                div { class: "hero__banner", "{content.hero.banner}" }
                h1 { class: "hero__title", "{content.hero.title}" }
                p { class: "hero__subtitle", "{content.hero.subtitle}" }
                div { class: "hero__actions",
                    a { class: "button button--primary", href: "#toolkit",
                        "{content.hero.primary_cta}"
                    }
                    a { class: "button button--ghost", href: "#privacy",
                        "{content.hero.secondary_cta}"
                    }
                }
                dl { class: "hero__stats",
                    { content.stats.iter().map(|stat| {
                        rsx! {
                            div { key: "{stat.label}", class: "hero__stat",
                                dt { "{stat.label}" }
                                dd { "{stat.value}" }
                            }
                        }
                    })}
                }
            }
            aside { class: "hero__aside",
                h2 { class: "hero__aside-heading", "{content.performance.heading}" }
                p { class: "hero__aside-copy", "{content.performance.description}" }
                div { class: "hero__callouts",
                    { content.performance.callouts.iter().map(|callout| {
                        rsx! {
                            div { key: "{callout.title}", class: "callout",
                                h3 { class: "callout__title", "{callout.title}" }
                                p { class: "callout__body", "{callout.body}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}

fn toolkit_section(lang: Language, content: &ContentBundle) -> Element {
    rsx! {
        section { id: "toolkit", class: "toolkit", aria_labelledby: "toolkit-heading",
            div { class: "toolkit__lead",
                div {
                    h2 { id: "toolkit-heading", {t!(lang, "toolkit-heading")} }
                    p { class: "toolkit__intro", {t!(lang, "toolkit-intro")} }
                }
                div { class: "toolkit__locale-note", {t!(lang, "toolkit-locale-note")} }
            }
            div { class: "toolkit__grid",
                { content.tools.iter().map(|tool| {
                    rsx! {
                        article { key: "{lang}-{tool.name}", class: "tool-card",
                            div { class: "tool-card__top",
                                span { class: "tool-card__category", "{tool.category}" }
                                span { class: "tool-card__badge", aria_hidden: "true",
                                    {t!(lang, "toolkit-badge")}
                                }
                            }
                            h3 { class: "tool-card__name", "{tool.name}" }
                            p { class: "tool-card__description", "{tool.description}" }
                            ul { class: "tool-card__features",
                                { tool.features.iter().map(|feature| {
                                    rsx! { li { key: "{feature}", "{feature}" } }
                                })}
                            }
                            a { class: "tool-card__cta", href: tool.href,
                                {t!(lang, "toolkit-cta")}
                            }
                        }
                    }
                })}
            }
        }
    }
}

fn highlights_section(lang: Language, content: &ContentBundle) -> Element {
    rsx! {
        section { id: "highlights", class: "highlights",
            div { class: "highlights__lead",
                h2 { "{content.highlights.title}" }
                p { "{content.highlights.description}" }
            }
            div { class: "highlights__grid",
                { content.highlights.points.iter().map(|point| {
                    rsx! {
                        div { key: "{lang}-{point.title}", class: "highlights__card",
                            h3 { "{point.title}" }
                            p { "{point.body}" }
                        }
                    }
                })}
            }
        }
    }
}

fn privacy_section(lang: Language, content: &ContentBundle) -> Element {
    rsx! {
        section { id: "privacy", class: "privacy", aria_labelledby: "privacy-heading",
            div { class: "privacy__main",
                h2 { id: "privacy-heading", "{content.privacy.title}" }
                p { "{content.privacy.description}" }
                ul { class: "privacy__bullets",
                    { content.privacy.bullets.iter().map(|bullet| {
                        rsx! { li { key: "{bullet}", "{bullet}" } }
                    })}
                }
                a { class: "button button--ghost", href: "#", "{content.privacy.cta}" }
            }
            div { class: "privacy__accessibility",
                h3 { "{content.accessibility.title}" }
                p { "{content.accessibility.description}" }
                div { class: "privacy__points",
                    { content.accessibility.points.iter().map(|point| {
                        rsx! {
                            div { key: "{lang}-{point.title}", class: "privacy__point",
                                h4 { "{point.title}" }
                                p { "{point.body}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}

fn testimonials_section(lang: Language, content: &ContentBundle) -> Element {
    rsx! {
        section { id: "testimonials", class: "testimonials", aria_labelledby: "testimonials-heading",
            div { class: "testimonials__lead",
                div {
                    h2 { id: "testimonials-heading", {t!(lang, "testimonials-heading")} }
                    p { {t!(lang, "testimonials-intro")} }
                }
                div { class: "testimonials__badge", {t!(lang, "testimonials-badge")} }
            }
            div { class: "testimonials__grid",
                { content.testimonials.iter().map(|testimonial| {
                    rsx! {
                        figure { key: "{lang}-{testimonial.author}", class: "testimonial",
                            blockquote { "“{testimonial.quote}”" }
                            figcaption {
                                span { class: "testimonial__author", "{testimonial.author}" }
                                span { class: "testimonial__role", "{testimonial.role}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}

fn faq_section(lang: Language, content: &ContentBundle) -> Element {
    rsx! {
        section { id: "faq", class: "faq", aria_labelledby: "faq-heading",
            h2 { id: "faq-heading", {t!(lang, "faq-heading")} }
            div { class: "faq__list",
                { content.faq.iter().map(|item| {
                    rsx! {
                        details { key: "{lang}-{item.question}", class: "faq__item",
                            summary { "{item.question}" }
                            p { "{item.answer}" }
                        }
                    }
                })}
            }
        }
    }
}

fn footer_section(content: &ContentBundle) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                p { class: "footer__statement", "{content.footer.statement}" }
                p { class: "footer__accessibility", "{content.footer.accessibility}" }
            }
            p { class: "footer__rights", "{content.footer.rights}" }
        }
    }
}
