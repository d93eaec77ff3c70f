use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub page: usize,
    pub page_size: usize,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
