use crate::shared::i18n::{translate, use_messages, FormattedMessage};
use crate::shared::icons::icon;
use contracts::domain::a003_collection::Collection;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Число с неразрывным пробелом между разрядами
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Коды стран коллекции для бейджей, в верхнем регистре
pub fn country_codes(collection: &Collection) -> Vec<String> {
    collection
        .countries
        .iter()
        .map(|country| country.trim().to_uppercase())
        .filter(|country| !country.is_empty())
        .collect()
}

/// Подпись категории, если для неё нет перевода: `court_archive` -> `Court archive`
pub fn category_fallback(code: &str) -> String {
    let text = code.trim().replace(['_', '-'], " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Краткая сводка по коллекции-источнику
#[component]
pub fn CollectionOverview(
    collection: Option<Collection>,
    /// Показать заголовок с названием коллекции
    #[prop(optional)]
    has_header: bool,
) -> impl IntoView {
    let messages = use_messages();

    collection.map(|collection| {
        let header = has_header.then(|| {
            view! {
                <h3 class="collection-overview__header">
                    {icon("collection")}
                    <span>{collection.label.clone()}</span>
                </h3>
            }
        });

        let summary = collection.summary_text().map(|summary| {
            view! { <p class="collection-overview__summary">{summary.to_string()}</p> }
        });

        let category = collection
            .category
            .clone()
            .zip(collection.category_message_id())
            .map(|(code, id)| {
                let fallback = category_fallback(&code);
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || translate(messages, &id, &fallback)}
                    </Badge>
                }
            });

        let countries = country_codes(&collection)
            .into_iter()
            .map(|country| {
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                        {country}
                    </Badge>
                }
            })
            .collect_view();

        let count = collection.count.map(|n| {
            view! {
                <div class="collection-overview__count">
                    <FormattedMessage id="collection.overview.count" default_message="Entities" />
                    ": "
                    {format_count(n)}
                </div>
            }
        });

        view! {
            <div class="collection-overview">
                {header}
                {summary}
                <div class="collection-overview__tags">
                    {category}
                    {countries}
                </div>
                {count}
            </div>
        }
    })
}
