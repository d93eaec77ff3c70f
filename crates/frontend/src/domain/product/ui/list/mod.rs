mod state;

use chrono::Utc;
use contracts::domain::product::{Product, TopUpdate};
use contracts::envelope::{DataPage, PageQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::product::api;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::popconfirm::Popconfirm;
use crate::shared::date_utils::{expiry_label, format_datetime, parse_local_datetime};
use crate::shared::icons::icon;
use crate::shared::query::{scopes, use_query, use_query_client, QueryOptions};
use crate::shared::toast::use_toasts;
use state::{clamp_page, create_state, total_pages};

#[component]
pub fn ProductList() -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let state = create_state();

    let params = Signal::derive(move || {
        state.with(|s| {
            serde_qs::to_string(&PageQuery::from_zero_based(s.page, s.page_size))
                .unwrap_or_default()
        })
    });

    let query = use_query::<DataPage<Product>, _, _>(
        client,
        scopes::PRODUCTS,
        params,
        |p| async move { api::fetch_products(p).await },
        QueryOptions::manual_refresh_only(),
    );

    let rows = move || query.data.get().map(|page| page.data).unwrap_or_default();
    let total = move || query.data.get().map(|page| page.total).unwrap_or(0);

    // A shrunken result set (deletions) can leave the current page out of
    // range; pull it back in.
    Effect::new(move |_| {
        let pages = total_pages(total(), state.with_untracked(|s| s.page_size));
        let current = state.with_untracked(|s| s.page);
        let clamped = clamp_page(current, pages);
        if clamped != current {
            state.update(|s| s.page = clamped);
        }
    });

    // Promotion modal state: which product, and the picked expiry.
    let promoting: RwSignal<Option<i64>> = RwSignal::new(None);
    let expiry_input = RwSignal::new(String::new());
    let promote_error = RwSignal::new(None::<String>);

    let apply_top = move |id: i64, update: TopUpdate| {
        spawn_local(async move {
            match api::update_top(id, &update).await {
                Ok(()) => {
                    client.invalidate(scopes::PRODUCTS);
                    toasts.success("Product updated");
                }
                Err(err) => toasts.error(format!("Failed to update product: {}", err)),
            }
        });
    };

    let confirm_promote = move |_| {
        let Some(id) = promoting.get_untracked() else {
            return;
        };
        match parse_local_datetime(&expiry_input.get_untracked()) {
            Some(expires_at) => {
                promote_error.set(None);
                promoting.set(None);
                expiry_input.set(String::new());
                apply_top(id, TopUpdate::promote(expires_at));
            }
            None => promote_error.set(Some("Please select an expiration date".to_string())),
        }
    };

    let delete_product = move |id: i64| {
        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    client.invalidate(scopes::PRODUCTS);
                    toasts.success("Product deleted");
                }
                Err(err) => toasts.error(format!("Failed to delete product: {}", err)),
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
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || total().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=Signal::derive(move || total_pages(total(), state.get().page_size))
                        total_count=Signal::derive(move || total() as usize)
                        page_size=Signal::derive(move || state.get().page_size)
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| client.invalidate(scopes::PRODUCTS)
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
                                <th>"Title"</th>
                                <th>"Price"</th>
                                <th>"Seller"</th>
                                <th>"Category"</th>
                                <th>"Region"</th>
                                <th>"District"</th>
                                <th>"Payment"</th>
                                <th>"Top"</th>
                                <th>"Expires"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|row| {
                                let id = row.id;
                                let title_for_confirm = row.title.clone();
                                let seller = row
                                    .profile
                                    .as_ref()
                                    .and_then(|p| p.full_name.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let named = |r: &Option<contracts::domain::common::NamedRef>| {
                                    r.as_ref().map(|n| n.name.clone()).unwrap_or_else(|| "-".to_string())
                                };
                                let category = named(&row.category);
                                let region = named(&row.region);
                                let district = named(&row.district);
                                let expires = match &row.top_expires_at {
                                    Some(at) => view! {
                                        <span title=format_datetime(at)>
                                            {expiry_label(at, &Utc::now())}
                                        </span>
                                    }.into_any(),
                                    None => view! { <span>"-"</span> }.into_any(),
                                };
                                let top_cell = if row.is_top {
                                    view! {
                                        <Popconfirm
                                            title="Remove from top?"
                                            on_confirm=Callback::new(move |_| apply_top(id, TopUpdate::demote()))
                                        >
                                            <button class="table__link table__link--active" title="Promoted">
                                                {icon("star")}
                                                " on top"
                                            </button>
                                        </Popconfirm>
                                    }.into_any()
                                } else {
                                    view! {
                                        <button
                                            class="table__link"
                                            on:click=move |_| {
                                                promote_error.set(None);
                                                expiry_input.set(String::new());
                                                promoting.set(Some(id));
                                            }
                                        >
                                            "promote"
                                        </button>
                                    }.into_any()
                                };
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td class="table__truncate" title=row.title.clone()>{row.title.clone()}</td>
                                        <td>{format!("{:.2}", row.price)}</td>
                                        <td>{seller}</td>
                                        <td>{category}</td>
                                        <td>{region}</td>
                                        <td>{district}</td>
                                        <td>{row.payment_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{top_cell}</td>
                                        <td>{expires}</td>
                                        <td class="table__actions">
                                            <Popconfirm
                                                title=format!("Are you sure to delete \"{}\"?", title_for_confirm)
                                                on_confirm=Callback::new(move |_| delete_product(id))
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

                {move || promoting.get().map(|_| view! {
                    <Modal
                        title="Set product as top"
                        on_close=Callback::new(move |_| promoting.set(None))
                    >
                        {move || promote_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                        <div class="form__group">
                            <label>"Top expires at"</label>
                            <input
                                type="datetime-local"
                                prop:value=move || expiry_input.get()
                                on:input=move |ev| expiry_input.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="modal-footer">
                            <button
                                class="button button--secondary"
                                on:click=move |_| promoting.set(None)
                            >
                                "Cancel"
                            </button>
                            <button class="button button--primary" on:click=confirm_promote>
                                "Confirm"
                            </button>
                        </div>
                    </Modal>
                })}
            </div>
        </div>
    }
}
