mod state;

use contracts::domain::banner::Banner;
use contracts::enums::banner_placement::BannerPlacement;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::banner::api;
use crate::domain::banner::ui::details::BannerDetails;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;
use state::create_state;

#[component]
pub fn BannerList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let state = create_state();

    let params = Signal::derive(move || {
        state.with(|s| {
            s.placement_filter
                .map(|p| p.as_str().to_string())
                .unwrap_or_default()
        })
    });

    let query = use_query::<Vec<Banner>, _, _>(
        client,
        scopes::BANNERS,
        params,
        |p| async move { api::fetch_banners(p).await },
        QueryOptions::manual_refresh_only(),
    );

    let rows = move || query.data.get().unwrap_or_default();

    let show_create = RwSignal::new(false);
    let editing: RwSignal<Option<Banner>> = RwSignal::new(None);

    let delete_banner = move |id: i64| {
        spawn_local(async move {
            match api::delete_banner(id).await {
                Ok(()) => {
                    client.invalidate(scopes::BANNERS);
                    toasts.success("Banner deleted");
                }
                Err(err) => toasts.error(format!("Failed to delete banner: {}", err)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Banners"</h1>
                    <Badge>{move || rows().len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <select
                        on:change=move |ev| {
                            let placement = BannerPlacement::from_str_value(&event_target_value(&ev));
                            state.update(|s| s.placement_filter = placement);
                        }
                    >
                        <option value="">"All placements"</option>
                        {BannerPlacement::all().into_iter().map(|placement| view! {
                            <option value=placement.as_str()>{placement.label()}</option>
                        }).collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create.set(true)
                    >
                        {icon("plus")}
                        " Add banner"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::BANNERS)
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
                                <th>"Image"</th>
                                <th>"Title"</th>
                                <th>"Placement"</th>
                                <th>"Status"</th>
                                <th>"Order"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|row| {
                                let id = row.id;
                                let row_for_edit = row.clone();
                                let title = row.title.clone().unwrap_or_else(|| "-".to_string());
                                let created = row
                                    .created_at
                                    .as_ref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>
                                            {match row.image_url.clone() {
                                                Some(url) if !url.is_empty() => view! {
                                                    <img class="table__thumb table__thumb--wide" src=url alt="banner" />
                                                }.into_any(),
                                                _ => view! { <span>"-"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td class="table__truncate" title=title.clone()>{title.clone()}</td>
                                        <td>
                                            <span class="badge badge--neutral">{row.placement.label()}</span>
                                        </td>
                                        <td>
                                            {if row.is_active {
                                                view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                            }}
                                        </td>
                                        <td>{row.order}</td>
                                        <td>{created}</td>
                                        <td class="table__actions">
                                            <button
                                                class="button button--icon"
                                                title="Edit"
                                                on:click=move |_| editing.set(Some(row_for_edit.clone()))
                                            >
                                                {icon("edit")}
                                            </button>
                                            <Popconfirm
                                                title="Are you sure you want to delete this banner?"
                                                on_confirm=Callback::new(move |_| delete_banner(id))
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
                    <BannerDetails
                        existing=None
                        on_close=Callback::new(move |_| show_create.set(false))
                        on_saved=Callback::new(move |_| show_create.set(false))
                    />
                })}

                {move || editing.get().map(|record| view! {
                    <BannerDetails
                        existing=Some(record)
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=Callback::new(move |_| editing.set(None))
                    />
                })}
            </div>
        </div>
    }
}
