use contracts::domain::a001_schema::{resolve_schema, PropertyDef, Schema, SchemaRegistry};
use contracts::domain::a002_entity::{Entity, PropertyValue};

/// Строка информационного листа
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub property: PropertyDef,
    pub values: Vec<PropertyValue>,
}

/// Всё, что нужно панели для отрисовки; строится только при наличии схемы
#[derive(Debug, Clone, PartialEq)]
pub struct EntityInfoViewModel {
    pub entity: Entity,
    pub schema: Schema,
    /// Показывать ли заголовок сущности
    pub is_thing: bool,
    pub rows: Vec<InfoRow>,
}

impl EntityInfoViewModel {
    /// `None`, пока схема сущности не загружена в реестр
    pub fn build(registry: &SchemaRegistry, entity: &Entity) -> Option<Self> {
        let schema = resolve_schema(registry, entity)?;
        Some(Self::from_parts(schema, entity))
    }

    pub fn from_parts(schema: &Schema, entity: &Entity) -> Self {
        let rows = schema
            .listed_properties(entity)
            .map(|property| InfoRow {
                property: property.clone(),
                values: entity.values(&property.name).to_vec(),
            })
            .collect();

        Self {
            entity: entity.clone(),
            schema: schema.clone(),
            is_thing: entity.is_thing(),
            rows,
        }
    }

    pub fn row_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.property.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_schema::PropertyType;
    use contracts::domain::a003_collection::Collection;

    fn person_schema() -> Schema {
        Schema::new("Person", "Person")
            .with_featured(&["name"])
            .with_property(PropertyDef::new("name").with_label("Name"))
            .with_property(PropertyDef::new("email").with_type(PropertyType::Email))
    }

    fn registry() -> SchemaRegistry {
        SchemaRegistry::from_schemata([person_schema()])
    }

    fn alice(schemata: &[&str]) -> Entity {
        Entity::new("e1", "Person")
            .with_schemata(schemata)
            .with_values("name", vec![PropertyValue::text("Alice")])
            .with_values("email", vec![])
            .with_collection(Collection::new("c1", "Leaked registry"))
    }

    #[test]
    fn test_missing_schema_builds_nothing() {
        let entity = alice(&["Thing", "Person"]);
        assert!(EntityInfoViewModel::build(&SchemaRegistry::new(), &entity).is_none());

        let other = Entity::new("e2", "Vessel");
        assert!(EntityInfoViewModel::build(&registry(), &other).is_none());
    }

    #[test]
    fn test_thing_with_featured_name_only() {
        let vm = EntityInfoViewModel::build(&registry(), &alice(&["Thing", "Person"])).unwrap();
        assert!(vm.is_thing);
        assert_eq!(vm.row_names(), vec!["name"]);
        assert_eq!(vm.rows[0].values, vec![PropertyValue::text("Alice")]);
        assert_eq!(vm.schema.name, "Person");
        assert_eq!(
            vm.entity.collection.as_ref().map(|c| c.label.as_str()),
            Some("Leaked registry")
        );
    }

    #[test]
    fn test_non_thing_keeps_rows() {
        let vm = EntityInfoViewModel::build(&registry(), &alice(&["Document"])).unwrap();
        assert!(!vm.is_thing);
        assert_eq!(vm.row_names(), vec!["name"]);
    }

    #[test]
    fn test_caption_property_excluded_even_if_featured() {
        let schema = Schema::new("Person", "Person")
            .with_featured(&["name", "email"])
            .with_property(PropertyDef::new("name").as_caption())
            .with_property(PropertyDef::new("email"));
        let vm = EntityInfoViewModel::from_parts(&schema, &alice(&["Thing"]));
        assert_eq!(vm.row_names(), vec!["email"]);
        assert!(vm.rows[0].values.is_empty());
    }

    #[test]
    fn test_rows_follow_schema_order() {
        let schema = Schema::new("Company", "Company")
            .with_featured(&["country", "name"])
            .with_property(PropertyDef::new("name"))
            .with_property(PropertyDef::new("website"))
            .with_property(PropertyDef::new("country"));
        let entity = Entity::new("c1", "Company")
            .with_values("website", vec![PropertyValue::text("https://acme.test")])
            .with_values("unknown", vec![PropertyValue::text("ignored")]);
        let vm = EntityInfoViewModel::from_parts(&schema, &entity);
        assert_eq!(vm.row_names(), vec!["name", "website", "country"]);
    }

    #[test]
    fn test_populated_non_featured_listed() {
        let entity = alice(&["Thing"])
            .with_values("email", vec![PropertyValue::text("alice@example.org")]);
        let vm = EntityInfoViewModel::build(&registry(), &entity).unwrap();
        assert_eq!(vm.row_names(), vec!["name", "email"]);
    }

    #[test]
    fn test_demo_pane_rows() {
        let registry =
            SchemaRegistry::from_json(include_str!("../../../../../demo/metadata.json")).unwrap();
        let entity = Entity::from_json(include_str!("../../../../../demo/entity.json")).unwrap();
        let vm = EntityInfoViewModel::build(&registry, &entity).unwrap();
        assert!(vm.is_thing);
        assert_eq!(vm.row_names(), vec!["alias", "nationality", "birthDate", "website"]);
        assert_eq!(vm.rows[0].values.len(), 2);
    }
}
