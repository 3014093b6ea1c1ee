use dioxus::prelude::*;

use ui::components::Header;
use ui::core::resolver::LanguageResolver;
use ui::core::{storage, url};
use ui::views::Landing;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Resolve the initial language once: stored preference, then the `lang`
    // query parameter of the incoming URL, then the default. The signal is
    // the single ActiveLanguage cell; the header's switcher is its only
    // writer.
    use_context_provider(|| {
        let resolver = LanguageResolver::new(storage::preference_store(), url::lang_query());
        Signal::new(resolver.initial(url::lang_hint().as_deref()))
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "DPITA • Daily Productivity Toolkit & Accessibility Hub" }

        Header {}
        Landing {}
    }
}
