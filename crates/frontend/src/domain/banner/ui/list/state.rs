use contracts::enums::banner_placement::BannerPlacement;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct BannerListState {
    pub placement_filter: Option<BannerPlacement>,
}

pub fn create_state() -> RwSignal<BannerListState> {
    RwSignal::new(BannerListState::default())
}
