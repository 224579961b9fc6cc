use contracts::domain::a001_schema::SchemaRegistry;
use contracts::domain::common::ModelError;
use leptos::prelude::*;

/// Shared application store.
///
/// The schema registry starts empty and is filled by the host once the
/// metadata arrives; every view reading it re-renders on update.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub schemata: RwSignal<SchemaRegistry>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            schemata: RwSignal::new(SchemaRegistry::new()),
        }
    }

    /// Replace the registry with a parsed metadata payload.
    pub fn load_schemata(&self, json: &str) -> Result<usize, ModelError> {
        let registry = SchemaRegistry::from_json(json)?;
        let count = registry.len();
        self.schemata.set(registry);
        log::info!("📚 schemata loaded: {}", count);
        Ok(count)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_schema::Schema;
    use contracts::domain::a002_entity::Entity;

    const METADATA: &str = include_str!("../../demo/metadata.json");
    const ENTITY: &str = include_str!("../../demo/entity.json");

    fn has_person(ctx: &AppGlobalContext) -> bool {
        ctx.schemata
            .with_untracked(|registry| registry.get("Person").is_some())
    }

    #[test]
    fn test_load_schemata() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new();
            assert!(!has_person(&ctx));
            assert_eq!(ctx.load_schemata(METADATA).unwrap(), 3);
            assert!(has_person(&ctx));
        });
    }

    #[test]
    fn test_invalid_payload_keeps_registry() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new();
            ctx.schemata
                .set(SchemaRegistry::from_schemata([Schema::new("Person", "Person")]));
            assert!(ctx.load_schemata("not json").is_err());
            assert!(has_person(&ctx));
        });
    }

    #[test]
    fn test_demo_entity_resolves() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new();
            ctx.load_schemata(METADATA).unwrap();
            let entity = Entity::from_json(ENTITY).unwrap();
            let label = ctx
                .schemata
                .with_untracked(|registry| registry.resolve(&entity).map(|s| s.label.clone()));
            assert_eq!(label.as_deref(), Some("Person"));
        });
    }
}
