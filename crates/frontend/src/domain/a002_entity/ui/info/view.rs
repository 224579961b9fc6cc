use super::view_model::EntityInfoViewModel;
use crate::domain::a001_schema::ui::{PropertyName, PropertyValues, SchemaLabel};
use crate::domain::a002_entity::ui::EntityLabel;
use crate::domain::a003_collection::ui::CollectionOverview;
use crate::shared::i18n::FormattedMessage;
use leptos::prelude::*;

#[component]
pub fn EntityInfoView(vm: EntityInfoViewModel) -> impl IntoView {
    let EntityInfoViewModel {
        entity,
        schema,
        is_thing,
        rows,
    } = vm;

    let title = is_thing.then(|| {
        let entity = entity.clone();
        let schema = schema.clone();
        view! { <EntityLabel entity=entity schema=schema add_class=true /> }
    });

    let rows_view = rows
        .into_iter()
        .map(|row| {
            let name_model = row.property.clone();
            let values_model = row.property;
            let values = row.values;
            view! {
                <li>
                    <span class="key">
                        <PropertyName model=name_model />
                    </span>
                    <span class="value">
                        <PropertyValues model=values_model values=values />
                    </span>
                </li>
            }
        })
        .collect_view();

    let collection = entity.collection;

    view! {
        <div class="pane-heading">
            <span>
                <SchemaLabel schema=schema icon=true />
            </span>
            <h1>{title}</h1>
        </div>
        <div class="pane-content">
            <ul class="info-sheet">{rows_view}</ul>
            <span class="source-header">
                <FormattedMessage id="entity.info.source" default_message="Source" />
            </span>
            <CollectionOverview collection=collection has_header=true />
        </div>
    }
}
