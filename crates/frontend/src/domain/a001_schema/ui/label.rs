use crate::shared::icons::{self, schema_icon};
use contracts::domain::a001_schema::Schema;
use leptos::prelude::*;

/// Иконка и название типа сущности
#[component]
pub fn SchemaLabel(
    schema: Schema,
    /// Показать иконку схемы перед названием
    #[prop(optional)]
    icon: bool,
    /// Название во множественном числе
    #[prop(optional)]
    plural: bool,
) -> impl IntoView {
    let text = if plural {
        schema.plural_label().to_string()
    } else {
        schema.display_label().to_string()
    };
    let icon_name = schema_icon(&schema);

    view! {
        <span class="schema-label">
            {icon.then(|| icons::icon(icon_name))}
            <span class="schema-label__text">{text}</span>
        </span>
    }
}
