use leptos::prelude::*;

use crate::layout::AdminModule;
use crate::shared::icons::icon;
use crate::system::auth::context::{logout, use_auth};

#[component]
pub fn Sidebar(active: RwSignal<AdminModule>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">"Bozor Admin"</div>
            <nav class="sidebar__nav">
                {AdminModule::all().into_iter().map(|module| {
                    view! {
                        <button
                            class="sidebar__item"
                            class=("sidebar__item--active", move || active.get() == module)
                            on:click=move |_| active.set(module)
                        >
                            {icon(module.icon_name())}
                            <span class="sidebar__label">{module.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button
                class="sidebar__item sidebar__logout"
                on:click=move |_| logout(set_auth_state)
            >
                {icon("logout")}
                <span class="sidebar__label">"Sign out"</span>
            </button>
        </aside>
    }
}
