mod view_model;

use contracts::domain::category::Category;
use leptos::prelude::*;

use crate::shared::components::cascader::Cascader;
use crate::shared::components::modal::Modal;
use crate::shared::components::upload::FileUpload;
use crate::shared::query::use_query_client;
use crate::shared::toast::use_toasts;
use crate::shared::tree::CascaderOption;
use view_model::CategoryDetailsViewModel;

#[component]
pub fn CategoryDetails(
    existing: Option<Category>,
    /// Root category tree for the parent picker.
    #[prop(into)]
    parent_options: Signal<Vec<CascaderOption>>,
    /// Preselected parent for a new subcategory (the active browse filter).
    default_parent: Option<i64>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();
    let vm = CategoryDetailsViewModel::new(existing.as_ref());
    if existing.is_none() {
        if let Some(parent) = default_parent {
            vm.draft.update(|d| d.parent_id = Some(parent));
        }
    }

    let is_edit = existing.is_some();
    let title = if is_edit { "Edit category" } else { "New category" };

    view! {
        <Modal title=title on_close=on_close>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=move || vm.draft.get().name
                    on:input=move |ev| vm.draft.update(|d| d.name = event_target_value(&ev))
                    placeholder="Category name"
                />
            </div>

            <div class="form__group">
                <label>"Parent category"</label>
                <Cascader
                    options=parent_options
                    on_change=Callback::new(move |deepest| {
                        vm.draft.update(|d| d.parent_id = deepest);
                    })
                    placeholder="No parent (top level)"
                />
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
                        prop:checked=move || vm.draft.get().is_visible
                        on:change=move |ev| {
                            vm.draft.update(|d| d.is_visible = event_target_checked(&ev));
                        }
                    />
                    " Visible"
                </label>
            </div>

            <div class="form__group">
                <label>"Image"</label>
                <FileUpload
                    accept=".png,.jpg,.jpeg,.webp"
                    on_select=move |file| vm.upload_image(toasts, file)
                />
                {move || vm.uploading.get().then(|| view! { <span class="hint">"Uploading..."</span> })}
                {move || {
                    let url = vm.draft.get().image_url.unwrap_or_default();
                    (!url.is_empty()).then(|| view! {
                        <img class="form__preview" src=url alt="preview" />
                    })
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
                    disabled=move || vm.saving.get() || vm.uploading.get()
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
