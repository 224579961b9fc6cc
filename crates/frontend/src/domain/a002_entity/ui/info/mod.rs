//! Entity Info pane
//!
//! - view_model.rs: view-model built from the schema registry (pure)
//! - view.rs: Leptos component rendering a resolved view-model
//! - EntityInfoMode (here): adapter between the registry signal and the view

mod view;
mod view_model;

pub use view::EntityInfoView;
pub use view_model::{EntityInfoViewModel, InfoRow};

use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_schema::SchemaRegistry;
use contracts::domain::a002_entity::Entity;
use leptos::prelude::*;

/// Реестр схем панели: переданный сигнал или `AppGlobalContext::schemata`
fn registry_signal(injected: Option<Signal<SchemaRegistry>>) -> Signal<SchemaRegistry> {
    injected.unwrap_or_else(|| match use_context::<AppGlobalContext>() {
        Some(ctx) => ctx.schemata.into(),
        None => {
            log::error!("EntityInfoMode: AppGlobalContext not found, no schemata available");
            Signal::stored(SchemaRegistry::new())
        }
    })
}

/// Текущая модель панели; отслеживает реестр, если вызвана в реактивном контексте
pub fn pane_view_model(
    registry: Signal<SchemaRegistry>,
    entity: &Entity,
) -> Option<EntityInfoViewModel> {
    registry.with(|registry| EntityInfoViewModel::build(registry, entity))
}

/// Информационная панель сущности
///
/// Пока схема сущности не загружена, панель пуста; когда реестр
/// обновится, панель перерисуется сама.
#[component]
pub fn EntityInfoMode(
    entity: Entity,
    /// Реестр схем; по умолчанию берётся из `AppGlobalContext`
    #[prop(optional, into)]
    registry: Option<Signal<SchemaRegistry>>,
) -> impl IntoView {
    let registry = registry_signal(registry);

    move || match pane_view_model(registry, &entity) {
        Some(vm) => Some(view! { <EntityInfoView vm=vm /> }),
        None => {
            log::debug!(
                "schema '{}' not loaded yet, entity {} not rendered",
                entity.schema,
                entity.id
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_schema::{PropertyDef, Schema};
    use contracts::domain::a002_entity::PropertyValue;
    use leptos::tachys::view::RenderHtml;

    fn person_registry() -> SchemaRegistry {
        SchemaRegistry::from_schemata([Schema::new("Person", "Person")
            .with_featured(&["name"])
            .with_property(PropertyDef::new("name"))])
    }

    fn alice() -> Entity {
        Entity::new("e1", "Person")
            .with_schemata(&["Thing", "Person"])
            .with_values("name", vec![PropertyValue::text("Alice")])
    }

    #[test]
    fn test_pane_empty_until_schema_loaded() {
        Owner::new().with(|| {
            let registry = RwSignal::new(SchemaRegistry::new());
            let entity = alice();

            assert!(pane_view_model(registry.into(), &entity).is_none());
            let html = view! { <EntityInfoMode entity=entity.clone() registry=registry /> }
                .to_html();
            assert!(!html.contains("pane-heading"));

            registry.set(person_registry());
            let vm = pane_view_model(registry.into(), &entity);
            assert_eq!(vm.as_ref().map(|vm| vm.row_names()), Some(vec!["name"]));
        });
    }

    #[test]
    fn test_registry_from_context() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new();
            provide_context(ctx);

            let registry = registry_signal(None);
            assert!(pane_view_model(registry, &alice()).is_none());

            ctx.schemata.set(person_registry());
            assert!(pane_view_model(registry, &alice()).is_some());
        });
    }

    #[test]
    fn test_injected_registry_wins_over_context() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new();
            ctx.schemata.set(person_registry());
            provide_context(ctx);

            let registry = registry_signal(Some(Signal::stored(SchemaRegistry::new())));
            assert!(pane_view_model(registry, &alice()).is_none());
        });
    }
}
