mod view_model;

use contracts::domain::banner::Banner;
use contracts::enums::banner_placement::BannerPlacement;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;
use crate::shared::components::upload::FileUpload;
use crate::shared::query::use_query_client;
use crate::shared::toast::use_toasts;
use view_model::BannerDetailsViewModel;

#[component]
pub fn BannerDetails(
    existing: Option<Banner>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let vm = BannerDetailsViewModel::new(existing.as_ref());

    let is_edit = existing.is_some();
    let title = if is_edit { "Edit banner" } else { "New banner" };

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <label>"Title"</label>
                <input
                    type="text"
                    prop:value=move || vm.draft.get().title
                    on:input=move |ev| vm.draft.update(|d| d.title = event_target_value(&ev))
                    placeholder="Banner title"
                />
            </div>

            <div class="form__group">
                <label>"Description"</label>
                <textarea
                    rows="3"
                    prop:value=move || vm.draft.get().description
                    on:input=move |ev| vm.draft.update(|d| d.description = event_target_value(&ev))
                    placeholder="Banner description"
                />
            </div>

            <div class="form__group">
                <label>"Link URL"</label>
                <input
                    type="text"
                    prop:value=move || vm.draft.get().link_url
                    on:input=move |ev| vm.draft.update(|d| d.link_url = event_target_value(&ev))
                    placeholder="https://example.com/landing"
                />
            </div>

            <div class="form__group">
                <label>"Placement"</label>
                <select
                    on:change=move |ev| {
                        if let Some(placement) = BannerPlacement::from_str_value(&event_target_value(&ev)) {
                            vm.draft.update(|d| d.placement = placement);
                        }
                    }
                    prop:value=move || vm.draft.get().placement.as_str().to_string()
                >
                    {BannerPlacement::all().into_iter().map(|placement| view! {
                        <option value=placement.as_str()>{placement.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form__group">
                <label>"Order"</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || vm.draft.get().order.to_string()
                    on:input=move |ev| {
                        let order = event_target_value(&ev).parse().unwrap_or(0);
                        vm.draft.update(|d| d.order = order);
                    }
                />
            </div>

            <div class="form__group">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || vm.draft.get().is_active
                        on:change=move |ev| {
                            vm.draft.update(|d| d.is_active = event_target_checked(&ev));
                        }
                    />
                    " Active"
                </label>
            </div>

            <div class="form__group">
                <label>"Image"</label>
                <FileUpload
                    accept=".png,.jpg,.jpeg,.webp"
                    on_select=move |file: web_sys::File| {
                        vm.file.set(Some(file));
                    }
                />
                {move || {
                    let picked = vm.file.with(|f| f.as_ref().map(|file| file.name()));
                    match picked {
                        Some(name) => view! { <span class="hint">{name}</span> }.into_any(),
                        None => match vm.existing_image.get() {
                            Some(url) if !url.is_empty() => view! {
                                <img class="form__preview" src=url alt="current image" />
                            }.into_any(),
                            _ => view! { <span class="hint">"No image selected"</span> }.into_any(),
                        },
                    }
                }}
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_close.run(())
                    disabled=move || vm.saving.get()
                >
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save(client, toasts, on_saved)
                    disabled=move || vm.saving.get()
                >
                    {move || if vm.saving.get() {
                        "Saving..."
                    } else if is_edit {
                        "Save"
                    } else {
                        "Create"
                    }}
                </button>
            </div>
        </Modal>
    }
}
