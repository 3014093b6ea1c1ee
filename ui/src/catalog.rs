//! The content catalog: one fully-localized bundle per language.
//!
//! Lookup is total over the closed language set. Bundles are assembled from
//! the compile-time-embedded Fluent assets via per-language loaders, so
//! `bundle(lang)` is a pure function of the language; the assets themselves
//! never change after startup.

use crate::core::language::Language;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct ContentBundle {
    pub tagline: String,
    pub hero: Hero,
    pub navigation: Vec<NavItem>,
    pub stats: Vec<Stat>,
    pub performance: PerformanceAside,
    pub tools: Vec<Tool>,
    pub highlights: Section,
    pub accessibility: Section,
    pub privacy: Privacy,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqItem>,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub banner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceAside {
    pub heading: String,
    pub description: String,
    pub callouts: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub href: &'static str,
    pub category: String,
}

/// A titled section with titled sub-points (highlights, accessibility).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Privacy {
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub statement: String,
    pub rights: String,
    pub accessibility: String,
}

/// The localized bundle for `lang`. Total: every supported language has
/// exactly one bundle; a missing message would be a programming error caught
/// by the translation completeness tests, not a runtime condition.
pub fn bundle(lang: Language) -> ContentBundle {
    ContentBundle {
        tagline: t!(lang, "tagline"),
        hero: Hero {
            title: t!(lang, "hero-title"),
            subtitle: t!(lang, "hero-subtitle"),
            primary_cta: t!(lang, "hero-cta-primary"),
            secondary_cta: t!(lang, "hero-cta-secondary"),
            banner: t!(lang, "hero-banner"),
        },
        navigation: vec![
            NavItem {
                label: t!(lang, "nav-toolkit"),
                href: "#toolkit",
            },
            NavItem {
                label: t!(lang, "nav-highlights"),
                href: "#highlights",
            },
            NavItem {
                label: t!(lang, "nav-privacy"),
                href: "#privacy",
            },
            NavItem {
                label: t!(lang, "nav-testimonials"),
                href: "#testimonials",
            },
            NavItem {
                label: t!(lang, "nav-faq"),
                href: "#faq",
            },
        ],
        stats: vec![
            Stat {
                label: t!(lang, "stat-load-label"),
                value: t!(lang, "stat-load-value"),
            },
            Stat {
                label: t!(lang, "stat-languages-label"),
                value: t!(lang, "stat-languages-value"),
            },
            Stat {
                label: t!(lang, "stat-satisfaction-label"),
                value: t!(lang, "stat-satisfaction-value"),
            },
        ],
        performance: PerformanceAside {
            heading: t!(lang, "perf-heading"),
            description: t!(lang, "perf-description"),
            callouts: vec![
                Point {
                    title: t!(lang, "perf-speed-title"),
                    body: t!(lang, "perf-speed-body"),
                },
                Point {
                    title: t!(lang, "perf-seo-title"),
                    body: t!(lang, "perf-seo-body"),
                },
                Point {
                    title: t!(lang, "perf-privacy-title"),
                    body: t!(lang, "perf-privacy-body"),
                },
            ],
        },
        tools: vec![
            Tool {
                name: t!(lang, "tool-scanner-name"),
                description: t!(lang, "tool-scanner-description"),
                features: vec![
                    t!(lang, "tool-scanner-feature-1"),
                    t!(lang, "tool-scanner-feature-2"),
                    t!(lang, "tool-scanner-feature-3"),
                ],
                href: "#",
                category: t!(lang, "tool-scanner-category"),
            },
            Tool {
                name: t!(lang, "tool-timer-name"),
                description: t!(lang, "tool-timer-description"),
                features: vec![
                    t!(lang, "tool-timer-feature-1"),
                    t!(lang, "tool-timer-feature-2"),
                    t!(lang, "tool-timer-feature-3"),
                ],
                href: "#",
                category: t!(lang, "tool-timer-category"),
            },
            Tool {
                name: t!(lang, "tool-microcopy-name"),
                description: t!(lang, "tool-microcopy-description"),
                features: vec![
                    t!(lang, "tool-microcopy-feature-1"),
                    t!(lang, "tool-microcopy-feature-2"),
                    t!(lang, "tool-microcopy-feature-3"),
                ],
                href: "#",
                category: t!(lang, "tool-microcopy-category"),
            },
            Tool {
                name: t!(lang, "tool-converter-name"),
                description: t!(lang, "tool-converter-description"),
                features: vec![
                    t!(lang, "tool-converter-feature-1"),
                    t!(lang, "tool-converter-feature-2"),
                    t!(lang, "tool-converter-feature-3"),
                ],
                href: "#",
                category: t!(lang, "tool-converter-category"),
            },
        ],
        highlights: Section {
            title: t!(lang, "highlights-title"),
            description: t!(lang, "highlights-description"),
            points: vec![
                Point {
                    title: t!(lang, "highlight-design-title"),
                    body: t!(lang, "highlight-design-body"),
                },
                Point {
                    title: t!(lang, "highlight-seo-title"),
                    body: t!(lang, "highlight-seo-body"),
                },
                Point {
                    title: t!(lang, "highlight-devices-title"),
                    body: t!(lang, "highlight-devices-body"),
                },
            ],
        },
        accessibility: Section {
            title: t!(lang, "access-title"),
            description: t!(lang, "access-description"),
            points: vec![
                Point {
                    title: t!(lang, "access-wcag-title"),
                    body: t!(lang, "access-wcag-body"),
                },
                Point {
                    title: t!(lang, "access-assistive-title"),
                    body: t!(lang, "access-assistive-body"),
                },
                Point {
                    title: t!(lang, "access-locale-title"),
                    body: t!(lang, "access-locale-body"),
                },
            ],
        },
        privacy: Privacy {
            title: t!(lang, "privacy-title"),
            description: t!(lang, "privacy-description"),
            bullets: vec![
                t!(lang, "privacy-bullet-1"),
                t!(lang, "privacy-bullet-2"),
                t!(lang, "privacy-bullet-3"),
            ],
            cta: t!(lang, "privacy-cta"),
        },
        testimonials: vec![
            Testimonial {
                quote: t!(lang, "testimonial-1-quote"),
                author: t!(lang, "testimonial-1-author"),
                role: t!(lang, "testimonial-1-role"),
            },
            Testimonial {
                quote: t!(lang, "testimonial-2-quote"),
                author: t!(lang, "testimonial-2-author"),
                role: t!(lang, "testimonial-2-role"),
            },
        ],
        faq: vec![
            FaqItem {
                question: t!(lang, "faq-1-question"),
                answer: t!(lang, "faq-1-answer"),
            },
            FaqItem {
                question: t!(lang, "faq-2-question"),
                answer: t!(lang, "faq-2-answer"),
            },
            FaqItem {
                question: t!(lang, "faq-3-question"),
                answer: t!(lang, "faq-3-answer"),
            },
        ],
        footer: Footer {
            statement: t!(lang, "footer-statement"),
            rights: t!(lang, "footer-rights"),
            accessibility: t!(lang, "footer-accessibility"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_empty(bundle: &ContentBundle, lang: Language) {
        let code = lang.code();
        assert!(!bundle.tagline.is_empty(), "{code}: empty tagline");
        assert!(!bundle.hero.title.is_empty(), "{code}: empty hero title");
        assert!(!bundle.hero.subtitle.is_empty(), "{code}: empty hero subtitle");
        assert!(!bundle.hero.banner.is_empty(), "{code}: empty hero banner");
        assert_eq!(bundle.navigation.len(), 5, "{code}: navigation items");
        assert_eq!(bundle.stats.len(), 3, "{code}: stats");
        assert_eq!(bundle.performance.callouts.len(), 3, "{code}: callouts");
        assert_eq!(bundle.tools.len(), 4, "{code}: tools");
        for tool in &bundle.tools {
            assert!(!tool.name.is_empty(), "{code}: empty tool name");
            assert_eq!(tool.features.len(), 3, "{code}: features of {}", tool.name);
        }
        assert_eq!(bundle.highlights.points.len(), 3, "{code}: highlights");
        assert_eq!(bundle.accessibility.points.len(), 3, "{code}: access points");
        assert_eq!(bundle.privacy.bullets.len(), 3, "{code}: privacy bullets");
        assert_eq!(bundle.testimonials.len(), 2, "{code}: testimonials");
        assert_eq!(bundle.faq.len(), 3, "{code}: faq entries");
        assert!(!bundle.footer.rights.is_empty(), "{code}: empty footer");
    }

    #[test]
    fn every_language_has_a_complete_bundle() {
        for lang in Language::SUPPORTED {
            assert_non_empty(&bundle(lang), lang);
        }
    }

    #[test]
    fn bundles_are_actually_localized() {
        let en = bundle(Language::En);
        let es = bundle(Language::Es);
        let fr = bundle(Language::Fr);
        assert_ne!(en.hero.title, es.hero.title);
        assert_ne!(en.hero.title, fr.hero.title);
        assert_ne!(es.hero.title, fr.hero.title);
    }

    #[test]
    fn anchors_are_stable_across_languages() {
        let en = bundle(Language::En);
        let fr = bundle(Language::Fr);
        let en_hrefs: Vec<_> = en.navigation.iter().map(|n| n.href).collect();
        let fr_hrefs: Vec<_> = fr.navigation.iter().map(|n| n.href).collect();
        assert_eq!(en_hrefs, fr_hrefs);
    }
}
