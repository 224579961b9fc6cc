//! Localization context for the application.
//!
//! Catalogs are bundled into the binary from `locales/*.json`. English has no
//! catalog: the default text passed by each caller is the English text.
//! The chosen locale is persisted in localStorage.

use contracts::shared::i18n::{negotiate_locale, MessageCatalog};
use leptos::prelude::*;
use once_cell::sync::Lazy;
use web_sys::window;

pub const DEFAULT_LOCALE: &str = "en";

const LOCALE_STORAGE_KEY: &str = "app-locale";

const BUNDLED: &[(&str, &str)] = &[
    ("ru", include_str!("../../../locales/ru.json")),
    ("de", include_str!("../../../locales/de.json")),
    ("es", include_str!("../../../locales/es.json")),
];

static CATALOGS: Lazy<Vec<MessageCatalog>> = Lazy::new(|| {
    BUNDLED
        .iter()
        .filter_map(|(locale, json)| match MessageCatalog::from_json(locale, json) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                log::error!("Failed to load message catalog '{}': {}", locale, err);
                None
            }
        })
        .collect()
});

/// All selectable locales, the default one first.
pub fn available_locales() -> Vec<&'static str> {
    std::iter::once(DEFAULT_LOCALE)
        .chain(BUNDLED.iter().map(|(locale, _)| *locale))
        .collect()
}

/// Map a requested tag (`ru-RU`, `de`, ...) to a supported locale.
pub fn resolve_locale(requested: &str) -> &'static str {
    negotiate_locale(requested, &available_locales()).unwrap_or(DEFAULT_LOCALE)
}

/// Catalog for a supported locale; empty for the default one.
pub fn catalog_for(locale: &str) -> MessageCatalog {
    CATALOGS
        .iter()
        .find(|catalog| catalog.locale() == locale)
        .cloned()
        .unwrap_or_else(|| MessageCatalog::empty(locale))
}

/// Translate with an optional context; without one the default is returned.
pub fn translate(ctx: Option<LocaleContext>, id: &str, default_message: &str) -> String {
    match ctx {
        Some(ctx) => ctx.message(id, default_message),
        None => default_message.to_string(),
    }
}

/// Load locale from localStorage, then from the browser language.
fn detect_locale() -> &'static str {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten());
    let browser = window().and_then(|w| w.navigator().language());

    stored
        .into_iter()
        .chain(browser)
        .find_map(|tag| negotiate_locale(&tag, &available_locales()))
        .unwrap_or(DEFAULT_LOCALE)
}

fn save_locale_to_storage(locale: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale);
    }
}

/// Locale context type.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Active catalog; replaced as a whole on locale change.
    pub catalog: RwSignal<MessageCatalog>,
}

impl LocaleContext {
    pub fn new(locale: &str) -> Self {
        Self {
            catalog: RwSignal::new(catalog_for(resolve_locale(locale))),
        }
    }

    pub fn locale(&self) -> String {
        self.catalog.with(|catalog| catalog.locale().to_string())
    }

    /// Switch locale and persist the choice.
    pub fn set_locale(&self, requested: &str) {
        let locale = resolve_locale(requested);
        log::debug!("locale: '{}' -> '{}'", requested, locale);
        self.catalog.set(catalog_for(locale));
        save_locale_to_storage(locale);
    }

    pub fn message(&self, id: &str, default_message: &str) -> String {
        self.catalog
            .with(|catalog| catalog.get(id, default_message).to_string())
    }
}

/// Provides locale context to children components.
#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    provide_context(LocaleContext::new(detect_locale()));

    children()
}

/// Hook to use the locale context, if the app provides one.
pub fn use_messages() -> Option<LocaleContext> {
    use_context::<LocaleContext>()
}

/// Localized text with a literal fallback.
#[component]
pub fn FormattedMessage(
    #[prop(into)] id: String,
    #[prop(into)] default_message: String,
) -> impl IntoView {
    let ctx = use_messages();

    move || translate(ctx, &id, &default_message)
}

/// Locale selector dropdown.
#[component]
pub fn LocaleSelect() -> impl IntoView {
    use_messages().map(|ctx| {
        view! {
            <select
                class="locale-select"
                prop:value=move || ctx.locale()
                on:change=move |ev| ctx.set_locale(&event_target_value(&ev))
            >
                {available_locales()
                    .into_iter()
                    .map(|locale| view! { <option value=locale>{locale}</option> })
                    .collect_view()}
            </select>
        }
    })
}
