use leptos::prelude::*;

use crate::shared::icons::icon;

/// File picker that hands the raw file to the caller instead of uploading.
/// The caller decides when and where the binary goes.
#[component]
pub fn FileUpload<F>(
    /// Receives the picked file.
    on_select: F,
    #[prop(optional, into)] accept: String,
) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static,
{
    view! {
        <label class="file-upload">
            <input
                type="file"
                class="file-upload__input"
                accept=accept
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        on_select(file);
                    }
                    // allow re-picking the same file
                    input.set_value("");
                }
            />
            <span class="button button--secondary">
                {icon("upload")}
                " Choose file"
            </span>
        </label>
    }
}
