use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a001_schema::{PropertyDef, PropertyType};
use contracts::domain::a002_entity::PropertyValue;
use leptos::prelude::*;

/// Разделитель между несколькими значениями одного свойства
pub const VALUE_SEPARATOR: &str = " · ";

/// Текст значения с учётом типа свойства
pub fn display_text(property_type: PropertyType, value: &PropertyValue) -> String {
    match (property_type, value) {
        (_, PropertyValue::Entity(_)) => value.caption().to_string(),
        (PropertyType::Date, PropertyValue::Text(s)) => format_date(s),
        (PropertyType::Country, PropertyValue::Text(s)) => s.trim().to_uppercase(),
        (_, PropertyValue::Text(s)) => s.clone(),
    }
}

/// Ссылка для значения, если тип свойства её подразумевает
pub fn value_href(property_type: PropertyType, value: &PropertyValue) -> Option<String> {
    let text = value.as_text()?.trim();
    match property_type {
        PropertyType::Url if text.starts_with("http://") || text.starts_with("https://") => {
            Some(text.to_string())
        }
        PropertyType::Email if text.contains('@') => Some(format!("mailto:{}", text)),
        _ => None,
    }
}

fn render_value(property_type: PropertyType, value: &PropertyValue) -> AnyView {
    let text = display_text(property_type, value);
    match (value, value_href(property_type, value)) {
        (PropertyValue::Entity(r), _) => view! {
            <span class="entity-ref" title=r.id.clone()>{text}</span>
        }
        .into_any(),
        (_, Some(href)) if property_type == PropertyType::Url => view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                {text}
                {icon("link")}
            </a>
        }
        .into_any(),
        (_, Some(href)) => view! { <a href=href>{text}</a> }.into_any(),
        (_, None) => view! { <span>{text}</span> }.into_any(),
    }
}

#[component]
pub fn PropertyName(model: PropertyDef) -> impl IntoView {
    view! { <span class="property-name">{model.display_label().to_string()}</span> }
}

/// Значения свойства через разделитель; пустой список показывается прочерком
#[component]
pub fn PropertyValues(model: PropertyDef, values: Vec<PropertyValue>) -> impl IntoView {
    if values.is_empty() {
        return view! { <span class="property-values property-values--empty">"—"</span> }
            .into_any();
    }

    let property_type = model.property_type;
    let items = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            view! {
                {(i > 0).then_some(VALUE_SEPARATOR)}
                {render_value(property_type, value)}
            }
        })
        .collect_view();

    view! { <span class="property-values">{items}</span> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_entity::EntityRef;

    #[test]
    fn test_display_text_by_type() {
        let date = PropertyValue::text("2021-06-01");
        assert_eq!(display_text(PropertyType::Date, &date), "01.06.2021");
        assert_eq!(display_text(PropertyType::String, &date), "2021-06-01");
        assert_eq!(
            display_text(PropertyType::Country, &PropertyValue::text(" ru ")),
            "RU"
        );
    }

    #[test]
    fn test_display_text_entity_reference() {
        let value = PropertyValue::Entity(EntityRef {
            id: "c1".to_string(),
            schema: Some("Company".to_string()),
            name: Some("ACME Ltd".to_string()),
        });
        assert_eq!(display_text(PropertyType::Entity, &value), "ACME Ltd");
        assert_eq!(value_href(PropertyType::Entity, &value), None);
    }

    #[test]
    fn test_value_href() {
        assert_eq!(
            value_href(PropertyType::Url, &PropertyValue::text("https://example.org")),
            Some("https://example.org".to_string())
        );
        assert_eq!(
            value_href(PropertyType::Url, &PropertyValue::text("javascript:alert(1)")),
            None
        );
        assert_eq!(
            value_href(PropertyType::Email, &PropertyValue::text("alice@example.org")),
            Some("mailto:alice@example.org".to_string())
        );
        assert_eq!(
            value_href(PropertyType::Name, &PropertyValue::text("Alice")),
            None
        );
    }
}
