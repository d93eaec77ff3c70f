use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationMode {
    Regions,
    Districts,
}

#[derive(Clone, Debug)]
pub struct LocationListState {
    pub mode: LocationMode,
    /// Region filter for district mode.
    pub region_filter: Option<i64>,
}

impl Default for LocationListState {
    fn default() -> Self {
        Self {
            mode: LocationMode::Regions,
            region_filter: None,
        }
    }
}

impl LocationListState {
    /// Cache params for the current mode/filter.
    pub fn query_params(&self) -> String {
        match (self.mode, self.region_filter) {
            (LocationMode::Regions, _) => "region".to_string(),
            (LocationMode::Districts, None) => "district".to_string(),
            (LocationMode::Districts, Some(id)) => format!("district:{}", id),
        }
    }
}

pub fn create_state() -> RwSignal<LocationListState> {
    RwSignal::new(LocationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_encode_mode_and_filter() {
        let mut state = LocationListState::default();
        assert_eq!(state.query_params(), "region");
        state.mode = LocationMode::Districts;
        assert_eq!(state.query_params(), "district");
        state.region_filter = Some(7);
        assert_eq!(state.query_params(), "district:7");
    }
}
