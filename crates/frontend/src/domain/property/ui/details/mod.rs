use contracts::domain::property::PropertyDraft;
use contracts::enums::property_type::PropertyType;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::property::api;
use crate::shared::components::cascader::Cascader;
use crate::shared::components::modal::Modal;
use crate::shared::query::{scopes, use_query_client};
use crate::shared::toast::use_toasts;
use crate::shared::tree::CascaderOption;

#[component]
pub fn PropertyDetails(
    #[prop(into)] category_options: Signal<Vec<CascaderOption>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let client = use_query_client();
    let toasts = use_toasts();

    let draft = RwSignal::new(PropertyDraft::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let payload = match draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::create_property(&payload).await {
                Ok(()) => {
                    client.invalidate(scopes::PROPERTIES);
                    toasts.success("Property created");
                    draft.set(PropertyDraft::default());
                    on_saved.run(());
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(format!("Failed to create property: {}", err)));
                }
            }
        });
    };

    view! {
        <Modal title="Add property" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    placeholder="Property name"
                />
            </div>

            <div class="form__group">
                <label>"Type"</label>
                <select
                    on:change=move |ev| {
                        if let Some(kind) = PropertyType::from_str_value(&event_target_value(&ev)) {
                            draft.update(|d| d.kind = kind);
                        }
                    }
                    prop:value=move || draft.get().kind.as_str().to_string()
                >
                    {PropertyType::all().into_iter().map(|kind| view! {
                        <option value=kind.as_str()>{kind.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form__group">
                <label>"Category"</label>
                <Cascader
                    options=category_options
                    on_change=Callback::new(move |deepest| {
                        draft.update(|d| d.category_id = deepest);
                    })
                    placeholder="Select category"
                />
            </div>

            {move || (draft.get().kind == PropertyType::Select).then(|| view! {
                <div class="form__group">
                    <label>"Options"</label>
                    <input
                        type="text"
                        prop:value=move || draft.get().options_text
                        on:input=move |ev| draft.update(|d| d.options_text = event_target_value(&ev))
                        placeholder="Comma separated options"
                    />
                </div>
            })}

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_close.run(())
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
    }
}
