mod state;

use contracts::domain::location::{DistrictPayload, LocationDraft, Region, RegionPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::location::api;
use crate::domain::location::api::LocationRows;
use crate::shared::components::modal::Modal;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;
use state::{create_state, LocationMode};

#[component]
pub fn LocationList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let state = create_state();

    let params = Signal::derive(move || state.with(|s| s.query_params()));

    let query = use_query::<LocationRows, _, _>(
        client,
        scopes::LOCATIONS,
        params,
        |p| async move { api::fetch_locations(p).await },
        QueryOptions::manual_refresh_only(),
    );

    // Region options for the district filter and the create form.
    let regions_query = use_query::<Vec<Region>, _, _>(
        client,
        scopes::REGIONS,
        Signal::derive(String::new),
        |p| async move { api::fetch_regions(p).await },
        QueryOptions::default(),
    );
    let region_options = move || regions_query.data.get().unwrap_or_default();

    let show_create = RwSignal::new(false);
    let draft = RwSignal::new(LocationDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let delete_location = move |id: i64| {
        let mode = state.with_untracked(|s| s.mode);
        spawn_local(async move {
            let result = match mode {
                LocationMode::Regions => api::delete_region(id).await,
                LocationMode::Districts => api::delete_district(id).await,
            };
            match result {
                Ok(()) => {
                    client.invalidate(scopes::LOCATIONS);
                    client.invalidate(scopes::REGIONS);
                    toasts.success(match mode {
                        LocationMode::Regions => "Region deleted",
                        LocationMode::Districts => "District deleted",
                    });
                }
                Err(err) => toasts.error(format!("Failed to delete location: {}", err)),
            }
        });
    };

    let save = move |_| {
        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            form_error.set(Some(message));
            return;
        }

        saving.set(true);
        form_error.set(None);
        spawn_local(async move {
            let result = if current.is_district {
                let payload = DistrictPayload {
                    name: current.name.trim().to_string(),
                    region_id: current.parent_region_id.unwrap_or_default(),
                };
                api::create_district(&payload).await
            } else {
                let payload = RegionPayload {
                    name: current.name.trim().to_string(),
                };
                api::create_region(&payload).await
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    client.invalidate(scopes::LOCATIONS);
                    client.invalidate(scopes::REGIONS);
                    toasts.success(if current.is_district {
                        "District created"
                    } else {
                        "Region created"
                    });
                    draft.set(LocationDraft::default());
                    show_create.set(false);
                }
                Err(err) => {
                    form_error.set(Some(format!("Failed to create location: {}", err)));
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Locations"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            draft.set(LocationDraft::default());
                            form_error.set(None);
                            show_create.set(true);
                        }
                    >
                        {icon("plus")}
                        " Add location"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::LOCATIONS)
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
                        <label>"Show:"</label>
                        <select
                            on:change=move |ev| {
                                let mode = match event_target_value(&ev).as_str() {
                                    "district" => LocationMode::Districts,
                                    _ => LocationMode::Regions,
                                };
                                state.update(|s| {
                                    s.mode = mode;
                                    s.region_filter = None;
                                });
                            }
                            prop:value=move || match state.get().mode {
                                LocationMode::Regions => "region",
                                LocationMode::Districts => "district",
                            }
                        >
                            <option value="region">"Regions"</option>
                            <option value="district">"Districts"</option>
                        </select>

                        {move || (state.get().mode == LocationMode::Districts).then(|| view! {
                            <select
                                on:change=move |ev| {
                                    let region = event_target_value(&ev).parse::<i64>().ok();
                                    state.update(|s| s.region_filter = region);
                                }
                            >
                                <option value="">"All regions"</option>
                                {region_options().into_iter().map(|region| {
                                    let selected = state.with(|s| s.region_filter == Some(region.id));
                                    view! {
                                        <option value=region.id.to_string() selected=selected>
                                            {region.name.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        })}
                    </Flex>
                </div>

                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>
                                    {move || match state.get().mode {
                                        LocationMode::Regions => "Districts",
                                        LocationMode::Districts => "Region",
                                    }}
                                </th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || match query.data.get() {
                                Some(LocationRows::Regions(regions)) => regions.into_iter().map(|region| {
                                    let id = region.id;
                                    let districts = if region.districts.is_empty() {
                                        "-".to_string()
                                    } else {
                                        region
                                            .districts
                                            .iter()
                                            .map(|d| d.name.as_str())
                                            .collect::<Vec<_>>()
                                            .join(", ")
                                    };
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{region.name.clone()}</td>
                                            <td class="table__truncate" title=districts.clone()>{districts.clone()}</td>
                                            <td class="table__actions">
                                                <Popconfirm
                                                    title=format!("Are you sure to delete region {}?", region.name)
                                                    on_confirm=Callback::new(move |_| delete_location(id))
                                                >
                                                    <button class="button button--icon button--danger" title="Delete">
                                                        {icon("delete")}
                                                    </button>
                                                </Popconfirm>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any(),
                                Some(LocationRows::Districts(districts)) => districts.into_iter().map(|district| {
                                    let id = district.id;
                                    let region_name = district
                                        .region
                                        .as_ref()
                                        .map(|r| r.name.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{district.name.clone()}</td>
                                            <td>{region_name}</td>
                                            <td class="table__actions">
                                                <Popconfirm
                                                    title=format!("Are you sure to delete district {}?", district.name)
                                                    on_confirm=Callback::new(move |_| delete_location(id))
                                                >
                                                    <button class="button button--icon button--danger" title="Delete">
                                                        {icon("delete")}
                                                    </button>
                                                </Popconfirm>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="4" class="table__empty">"No data available"</td>
                                    </tr>
                                }.into_any(),
                            }}
                        </tbody>
                    </table>
                </div>

                {move || show_create.get().then(|| view! {
                    <Modal
                        title="Add location"
                        on_close=Callback::new(move |_| show_create.set(false))
                    >
                        {move || form_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                        <div class="form__group">
                            <label>"Type"</label>
                            <select
                                on:change=move |ev| {
                                    let is_district = event_target_value(&ev) == "district";
                                    draft.update(|d| {
                                        d.is_district = is_district;
                                        if !is_district {
                                            d.parent_region_id = None;
                                        }
                                    });
                                }
                                prop:value=move || if draft.get().is_district { "district" } else { "region" }
                            >
                                <option value="region">"Add region"</option>
                                <option value="district">"Add district"</option>
                            </select>
                        </div>

                        <div class="form__group">
                            <label>"Name"</label>
                            <input
                                type="text"
                                prop:value=move || draft.get().name
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </div>

                        {move || draft.get().is_district.then(|| view! {
                            <div class="form__group">
                                <label>"Region"</label>
                                <select
                                    on:change=move |ev| {
                                        let region = event_target_value(&ev).parse::<i64>().ok();
                                        draft.update(|d| d.parent_region_id = region);
                                    }
                                >
                                    <option value="">"Select region"</option>
                                    {region_options().into_iter().map(|region| {
                                        let selected = draft.with(|d| d.parent_region_id == Some(region.id));
                                        view! {
                                            <option value=region.id.to_string() selected=selected>
                                                {region.name.clone()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                        })}

                        <div class="modal-footer">
                            <button
                                class="button button--secondary"
                                on:click=move |_| show_create.set(false)
                                disabled=move || saving.get()
                            >
                                "Cancel"
                            </button>
                            <button
                                class="button button--primary"
                                on:click=save
                                disabled=move || saving.get()
                            >
                                {move || if saving.get() { "Saving..." } else { "Create" }}
                            </button>
                        </div>
                    </Modal>
                })}
            </div>
        </div>
    }
}
