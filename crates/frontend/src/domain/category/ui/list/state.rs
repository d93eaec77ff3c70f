use leptos::prelude::*;

use crate::shared::nav_stack::NavStack;

#[derive(Clone, Debug, Default)]
pub struct CategoryListState {
    /// Hierarchical browsing position; empty means the root listing.
    pub nav: NavStack,
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}
