use crate::shared::i18n::{translate, use_messages};
use contracts::domain::a001_schema::Schema;
use contracts::domain::a002_entity::Entity;
use leptos::prelude::*;

/// Длинные заголовки обрезаются; полный текст остаётся в `title`
const MAX_TITLE_CHARS: usize = 120;

/// Обрезать строку до `max_chars` символов с многоточием
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let title = title.trim();
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut short: String = title.chars().take(max_chars.saturating_sub(1)).collect();
    short.truncate(short.trim_end().len());
    short.push('…');
    short
}

/// CSS-класс заголовка; без `add_class` атрибут не выводится
fn label_class(add_class: bool) -> Option<&'static str> {
    add_class.then_some("entity-label")
}

/// Заголовок сущности
#[component]
pub fn EntityLabel(
    entity: Entity,
    /// Схема сущности для поиска свойств-заголовков
    #[prop(optional)]
    schema: Option<Schema>,
    /// Добавить CSS-класс `entity-label`
    #[prop(optional)]
    add_class: bool,
) -> impl IntoView {
    let messages = use_messages();
    let caption = entity.caption(schema.as_ref()).map(str::to_string);
    let full = Signal::derive(move || {
        caption
            .clone()
            .unwrap_or_else(|| translate(messages, "entity.label.untitled", "Untitled"))
    });

    view! {
        <span class=label_class(add_class) title=move || full.get()>
            {move || truncate_title(&full.get(), MAX_TITLE_CHARS)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(truncate_title(" Alice ", 10), "Alice");
    }

    #[test]
    fn test_long_title_truncated() {
        assert_eq!(truncate_title("Alice Smith", 7), "Alice…");
        assert_eq!(truncate_title("Иван Петров", 5), "Иван…");
    }

    #[test]
    fn test_label_class_omitted_without_flag() {
        assert_eq!(label_class(true), Some("entity-label"));
        assert_eq!(label_class(false), None);
    }
}
