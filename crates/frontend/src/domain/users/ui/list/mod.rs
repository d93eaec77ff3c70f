mod state;

use contracts::domain::user::User;
use contracts::enums::user_role::UserRole;
use contracts::envelope::{PageQuery, UserPage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::users::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;
use state::create_state;

#[component]
pub fn UsersList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let state = create_state();

    let params = Signal::derive(move || {
        state.with(|s| {
            serde_qs::to_string(&PageQuery::from_zero_based(s.page, s.page_size))
                .unwrap_or_default()
        })
    });

    let query = use_query::<UserPage<User>, _, _>(
        client,
        scopes::USERS,
        params,
        |p| async move { api::fetch_users(p).await },
        QueryOptions::manual_refresh_only(),
    );

    let rows = move || query.data.get().map(|page| page.users).unwrap_or_default();
    let total = move || query.data.get().map(|page| page.total).unwrap_or(0) as usize;
    let total_pages = move || {
        query
            .data
            .get()
            .map(|page| page.total_pages.max(1) as usize)
            .unwrap_or(1)
    };

    Effect::new(move |_| {
        let pages = total_pages();
        let current = state.with_untracked(|s| s.page);
        if current + 1 > pages {
            state.update(|s| s.page = pages.saturating_sub(1));
        }
    });

    let change_role = move |id: i64, role: UserRole| {
        spawn_local(async move {
            match api::update_role(id, role).await {
                Ok(()) => {
                    client.invalidate(scopes::USERS);
                    toasts.success("User role updated");
                }
                Err(err) => toasts.error(format!("Failed to update role: {}", err)),
            }
        });
    };

    let delete_user = move |id: i64| {
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => {
                    client.invalidate(scopes::USERS);
                    toasts.success("User deleted");
                }
                Err(err) => toasts.error(format!("Failed to delete user: {}", err)),
            }
        });
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
    };
    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || total().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=Signal::derive(total_pages)
                        total_count=Signal::derive(total)
                        page_size=Signal::derive(move || state.get().page_size)
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::USERS)
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
                                <th>"Phone"</th>
                                <th>"Username"</th>
                                <th>"Full name"</th>
                                <th>"Region"</th>
                                <th>"District"</th>
                                <th>"Role"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|row| {
                                let id = row.id;
                                let username = row.username.clone().unwrap_or_default();
                                let full_name = row
                                    .profile
                                    .as_ref()
                                    .and_then(|p| p.full_name.clone())
                                    .or_else(|| row.username.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let region = row
                                    .profile
                                    .as_ref()
                                    .and_then(|p| p.region.as_ref())
                                    .map(|r| r.name.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let district = row
                                    .profile
                                    .as_ref()
                                    .and_then(|p| p.district.as_ref())
                                    .map(|d| d.name.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let current_role = row.role;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{row.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{username}</td>
                                        <td>{full_name}</td>
                                        <td>{region}</td>
                                        <td>{district}</td>
                                        <td>
                                            <select
                                                on:change=move |ev| {
                                                    if let Some(role) = UserRole::from_str_value(&event_target_value(&ev)) {
                                                        if role != current_role {
                                                            change_role(id, role);
                                                        }
                                                    }
                                                }
                                                prop:value=current_role.as_str().to_string()
                                            >
                                                {UserRole::all().into_iter().map(|role| view! {
                                                    <option value=role.as_str() selected=(role == current_role)>
                                                        {role.as_str()}
                                                    </option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td class="table__actions">
                                            <Popconfirm
                                                title=format!("Are you sure to delete user {}?", id)
                                                on_confirm=Callback::new(move |_| delete_user(id))
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
            </div>
        </div>
    }
}
