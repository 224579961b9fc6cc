use crate::domain::a002_entity::ui::EntityInfoMode;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::i18n::LocaleProvider;
use contracts::domain::a002_entity::Entity;
use leptos::prelude::*;

// Bundled sample data; a host application fills the store from its API instead.
const DEMO_METADATA: &str = include_str!("../demo/metadata.json");
const DEMO_ENTITY: &str = include_str!("../demo/entity.json");

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    if let Err(err) = ctx.load_schemata(DEMO_METADATA) {
        log::error!("Failed to load schemata: {}", err);
    }

    let entity = match Entity::from_json(DEMO_ENTITY) {
        Ok(entity) => Some(entity),
        Err(err) => {
            log::error!("Failed to parse entity: {}", err);
            None
        }
    };

    view! {
        <LocaleProvider>
            <Shell>
                {entity.map(|entity| view! { <EntityInfoMode entity=entity /> })}
            </Shell>
        </LocaleProvider>
    }
}
