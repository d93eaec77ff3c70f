use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PropertyListState {
    /// Deepest category picked in the filter cascader.
    pub category_filter: Option<i64>,
}

pub fn create_state() -> RwSignal<PropertyListState> {
    RwSignal::new(PropertyListState::default())
}
