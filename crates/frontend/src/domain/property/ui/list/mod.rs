mod state;

use contracts::domain::category::Category;
use contracts::domain::property::CategoryProperties;
use contracts::enums::property_type::PropertyType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api as category_api;
use crate::domain::property::api;
use crate::domain::property::ui::details::PropertyDetails;
use crate::shared::components::cascader::Cascader;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;
use crate::shared::tree::category_options;
use state::create_state;

/// A flattened row: one property plus its owning category.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRow {
    pub id: i64,
    pub name: String,
    pub kind: PropertyType,
    pub options: Option<Vec<String>>,
    pub category_id: i64,
    pub category_name: String,
}

fn flatten(groups: &[CategoryProperties]) -> Vec<PropertyRow> {
    groups
        .iter()
        .flat_map(|group| {
            group.properties.iter().map(|property| PropertyRow {
                id: property.id,
                name: property.name.clone(),
                kind: property.kind,
                options: property.options.clone(),
                category_id: group.id,
                category_name: group.name.clone(),
            })
        })
        .collect()
}

#[component]
pub fn PropertyList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let state = create_state();

    let params = Signal::derive(move || {
        state.with(|s| {
            s.category_filter
                .map(|id| id.to_string())
                .unwrap_or_default()
        })
    });

    let query = use_query::<Vec<CategoryProperties>, _, _>(
        client,
        scopes::PROPERTIES,
        params,
        |p| async move { api::fetch_properties(p).await },
        QueryOptions::default(),
    );

    let categories_query = use_query::<Vec<Category>, _, _>(
        client,
        scopes::CATEGORIES,
        Signal::derive(String::new),
        |p| async move { category_api::fetch_categories(p).await },
        QueryOptions::default(),
    );
    let cascader_options =
        Signal::derive(move || category_options(&categories_query.data.get().unwrap_or_default()));

    let rows = move || flatten(&query.data.get().unwrap_or_default());

    let show_create = RwSignal::new(false);

    let delete_property = move |id: i64| {
        spawn_local(async move {
            match api::delete_property(id).await {
                Ok(()) => {
                    client.invalidate(scopes::PROPERTIES);
                    toasts.success("Property deleted");
                }
                Err(err) => toasts.error(format!("Failed to delete property: {}", err)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Properties"</h1>
                    <Badge>{move || rows().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create.set(true)
                    >
                        {icon("plus")}
                        " Add property"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::PROPERTIES)
                        disabled=Signal::derive(move || query.loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || query.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <label>"Filter by category:"</label>
                        <Cascader
                            options=cascader_options
                            on_change=Callback::new(move |deepest| {
                                state.update(|s| s.category_filter = deepest);
                            })
                            placeholder="Select category to view properties"
                        />
                    </Flex>
                </div>

                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th>"ID"</th>
                                <th>"Property name"</th>
                                <th>"Type"</th>
                                <th>"Category"</th>
                                <th>"Options"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let listed = rows();
                                if listed.is_empty() {
                                    let hint = if state.with(|s| s.category_filter.is_none()) {
                                        "Please select a category"
                                    } else {
                                        "No properties found for this category"
                                    };
                                    view! {
                                        <tr>
                                            <td colspan="6" class="table__empty">{hint}</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    listed.into_iter().map(|row| {
                                        let id = row.id;
                                        let name_for_confirm = row.name.clone();
                                        let options_text = match (&row.kind, &row.options) {
                                            (PropertyType::Select, Some(options)) if !options.is_empty() => {
                                                options.join(", ")
                                            }
                                            _ => "-".to_string(),
                                        };
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{row.name.clone()}</td>
                                                <td>{row.kind.label()}</td>
                                                <td>{row.category_name.clone()}</td>
                                                <td>{options_text}</td>
                                                <td class="table__actions">
                                                    <Popconfirm
                                                        title=format!("Are you sure to delete \"{}\"?", name_for_confirm)
                                                        on_confirm=Callback::new(move |_| delete_property(id))
                                                    >
                                                        <button class="button button--icon button--danger" title="Delete">
                                                            {icon("delete")}
                                                        </button>
                                                    </Popconfirm>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                {move || show_create.get().then(|| view! {
                    <PropertyDetails
                        category_options=cascader_options
                        on_close=Callback::new(move |_| show_create.set(false))
                        on_saved=Callback::new(move |_| show_create.set(false))
                    />
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_flattened_with_owning_category() {
        let groups: Vec<CategoryProperties> = serde_json::from_str(
            r#"[
                {"id":4,"name":"Phones","properties":[
                    {"id":1,"name":"Color","type":"SELECT","options":["red","blue"]},
                    {"id":2,"name":"Weight","type":"NUMBER"}
                ]},
                {"id":5,"name":"Laptops","properties":[]}
            ]"#,
        )
        .unwrap();
        let rows = flatten(&groups);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category_name, "Phones");
        assert_eq!(rows[0].kind, PropertyType::Select);
        assert_eq!(rows[1].name, "Weight");
        assert_eq!(rows[1].category_id, 4);
    }
}
