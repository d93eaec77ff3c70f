use leptos::ev;
use leptos::prelude::*;

/// Inline guard for destructive actions. The confirm callback is the only
/// place the guarded action runs; clicking the trigger merely opens the
/// prompt.
#[component]
pub fn Popconfirm(
    /// Question shown next to the confirm/cancel buttons.
    #[prop(into)]
    title: String,
    /// Invoked only when the operator confirms.
    on_confirm: Callback<()>,
    /// Trigger content (a link or button).
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <span class="popconfirm" on:click=stop_propagation>
            <span class="popconfirm__trigger" on:click=move |_| open.set(true)>
                {children()}
            </span>
            {move || {
                let title = title.clone();
                open.get().then(move || view! {
                    <span class="popconfirm__panel">
                        <span class="popconfirm__title">{title}</span>
                        <button
                            class="button button--small button--danger"
                            on:click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Yes"
                        </button>
                        <button
                            class="button button--small button--secondary"
                            on:click=move |_| open.set(false)
                        >
                            "No"
                        </button>
                    </span>
                })
            }}
        </span>
    }
}
