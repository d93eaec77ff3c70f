use leptos::prelude::*;

use crate::layout::shell::AppShell;
use crate::shared::query::QueryClient;
use crate::shared::toast::{Toasts, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // One query cache per application, handed to the modules via context.
    let client = QueryClient::new();
    client.install_window_listeners();
    provide_context(client);

    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <Toasts />
            <AppShell />
        </AuthProvider>
    }
}
