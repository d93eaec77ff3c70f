mod state;

use contracts::domain::category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api;
use crate::domain::category::ui::details::CategoryDetails;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;
use crate::shared::tree::category_options;
use state::create_state;

#[component]
pub fn CategoryList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let state = create_state();

    let params = Signal::derive(move || {
        state.with(|s| match s.nav.current() {
            Some(id) => format!("parentId={}", id),
            None => String::new(),
        })
    });

    let query = use_query::<Vec<Category>, _, _>(
        client,
        scopes::CATEGORIES,
        params,
        |p| async move { api::fetch_categories(p).await },
        QueryOptions::default(),
    );

    // The parent picker always needs the full tree, regardless of how deep
    // the browsing position is.
    let tree_query = use_query::<Vec<Category>, _, _>(
        client,
        scopes::CATEGORIES,
        Signal::derive(String::new),
        |p| async move { api::fetch_categories(p).await },
        QueryOptions::default(),
    );
    let parent_options =
        Signal::derive(move || category_options(&tree_query.data.get().unwrap_or_default()));

    let rows = move || query.data.get().unwrap_or_default();

    let show_create = RwSignal::new(false);
    let editing: RwSignal<Option<Category>> = RwSignal::new(None);

    let toggle_visibility = move |id: i64, next: bool| {
        spawn_local(async move {
            match api::set_visibility(id, next).await {
                Ok(()) => {
                    client.invalidate(scopes::CATEGORIES);
                    toasts.success("Visibility updated");
                }
                Err(err) => toasts.error(format!("Failed to update visibility: {}", err)),
            }
        });
    };

    let delete_category = move |id: i64| {
        spawn_local(async move {
            match api::delete_category(id).await {
                Ok(()) => {
                    client.invalidate(scopes::CATEGORIES);
                    toasts.success("Category deleted");
                }
                Err(err) => toasts.error(format!("Failed to delete category: {}", err)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <button
                        class="button button--icon"
                        title="Back"
                        disabled=move || state.with(|s| s.nav.at_root())
                        on:click=move |_| state.update(|s| s.nav.go_back())
                    >
                        {icon("arrow-left")}
                    </button>
                    <h1 class="page__title">"Categories"</h1>
                    <Badge>{move || rows().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create.set(true)
                    >
                        {icon("plus")}
                        " Add category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::CATEGORIES)
                        disabled=Signal::derive(move || query.loading.get())
                    >
                        {icon("refresh")}
                        {move || if query.loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || query.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Parent"</th>
                                <th>"Image"</th>
                                <th>"Visible"</th>
                                <th>"Order"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|row| {
                                let id = row.id;
                                let name_for_confirm = row.name.clone();
                                let row_for_edit = row.clone();
                                let child_count = row.children.len();
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>
                                            <button
                                                class="table__link"
                                                title="Open subcategories"
                                                on:click=move |_| state.update(|s| s.nav.go_to_child(id))
                                            >
                                                {row.name.clone()}
                                            </button>
                                            {(child_count > 0).then(|| view! {
                                                <span class="badge badge--neutral">{child_count}</span>
                                            })}
                                        </td>
                                        <td>{row.parent_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>
                                            {match row.image_url.clone() {
                                                Some(url) if !url.is_empty() => view! {
                                                    <img class="table__thumb" src=url alt="category" />
                                                }.into_any(),
                                                _ => view! { <span>"-"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=row.is_visible
                                                on:change=move |ev| {
                                                    toggle_visibility(id, event_target_checked(&ev));
                                                }
                                            />
                                        </td>
                                        <td>{row.order}</td>
                                        <td class="table__actions">
                                            <button
                                                class="button button--icon"
                                                title="Edit"
                                                on:click=move |_| editing.set(Some(row_for_edit.clone()))
                                            >
                                                {icon("edit")}
                                            </button>
                                            <Popconfirm
                                                title=format!("Are you sure to delete \"{}\"?", name_for_confirm)
                                                on_confirm=Callback::new(move |_| delete_category(id))
                                            >
                                                <button class="button button--icon button--danger" title="Delete">
                                                    {icon("delete")}
                                                </button>
                                            </Popconfirm>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                {move || show_create.get().then(|| view! {
                    <CategoryDetails
                        existing=None
                        parent_options=parent_options
                        default_parent=state.with_untracked(|s| s.nav.current())
                        on_close=Callback::new(move |_| show_create.set(false))
                        on_saved=Callback::new(move |_| show_create.set(false))
                    />
                })}

                {move || editing.get().map(|record| view! {
                    <CategoryDetails
                        existing=Some(record)
                        parent_options=parent_options
                        default_parent=None
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| editing.set(None))
                    />
                })}
            </div>
        </div>
    }
}
