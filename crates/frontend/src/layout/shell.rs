use leptos::prelude::*;

use crate::domain::banner::ui::list::BannerList;
use crate::domain::category::ui::list::CategoryList;
use crate::domain::location::ui::list::LocationList;
use crate::domain::product::ui::list::ProductList;
use crate::domain::profiles::ui::list::ProfilesList;
use crate::domain::property::ui::list::PropertyList;
use crate::domain::users::ui::list::UsersList;
use crate::layout::sidebar::Sidebar;
use crate::layout::AdminModule;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(AdminModule::Categories);

    view! {
        <div class="shell">
            <Sidebar active=active />
            <main class="shell__content">
                {move || match active.get() {
                    AdminModule::Categories => view! { <CategoryList /> }.into_any(),
                    AdminModule::Properties => view! { <PropertyList /> }.into_any(),
                    AdminModule::Products => view! { <ProductList /> }.into_any(),
                    AdminModule::Locations => view! { <LocationList /> }.into_any(),
                    AdminModule::Users => view! { <UsersList /> }.into_any(),
                    AdminModule::Profiles => view! { <ProfilesList /> }.into_any(),
                    AdminModule::Banners => view! { <BannerList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
