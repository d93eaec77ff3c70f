use contracts::domain::profile::Profile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::profiles::api;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;

#[component]
pub fn ProfilesList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();

    let query = use_query::<Vec<Profile>, _, _>(
        client,
        scopes::PROFILES,
        Signal::derive(String::new),
        |p| async move { api::fetch_profiles(p).await },
        QueryOptions::default(),
    );

    let rows = move || query.data.get().unwrap_or_default();

    let delete_profile = move |id: i64| {
        spawn_local(async move {
            match api::delete_profile(id).await {
                Ok(()) => {
                    client.invalidate(scopes::PROFILES);
                    toasts.success("Profile deleted");
                }
                Err(err) => toasts.error(format!("Failed to delete profile: {}", err)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Profiles"</h1>
                    <Badge>{move || rows().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::PROFILES)
                        disabled=Signal::derive(move || query.loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
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
                                <th>"Full name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Region"</th>
                                <th>"District"</th>
                                <th>"Address"</th>
                                <th>"Balance"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|row| {
                                let id = row.id;
                                let balance = row
                                    .user
                                    .as_ref()
                                    .map(|u| format!("{:.2}", u.balance))
                                    .unwrap_or_else(|| "-".to_string());
                                let opt = |v: &Option<String>| {
                                    v.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "-".to_string())
                                };
                                let opt_id = |v: &Option<i64>| {
                                    v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
                                };
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{opt(&row.full_name)}</td>
                                        <td>{opt(&row.email)}</td>
                                        <td>{opt(&row.phone_number)}</td>
                                        <td>{opt_id(&row.region_id)}</td>
                                        <td>{opt_id(&row.district_id)}</td>
                                        <td class="table__truncate">{opt(&row.address)}</td>
                                        <td>{balance}</td>
                                        <td class="table__actions">
                                            <Popconfirm
                                                title="Are you sure you want to delete this profile?"
                                                on_confirm=Callback::new(move |_| delete_profile(id))
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
