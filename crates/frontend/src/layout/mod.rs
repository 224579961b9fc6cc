pub mod global_context;

use crate::shared::i18n::LocaleSelect;
use leptos::prelude::*;

/// Application shell: top bar with the locale switch and a single pane.
///
/// ```text
/// +------------------------------------------+
/// |          Header (locale switch)           |
/// +------------------------------------------+
/// |                 Pane                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <LocaleSelect />
            </header>
            <main class="app-main pane">
                {children()}
            </main>
        </div>
    }
}
