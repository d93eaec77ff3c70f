use leptos::prelude::*;

use crate::shared::tree::{select_levels, CascaderOption};

/// Hierarchical option picker rendered as one `<select>` per level.
/// Selecting at any level reports the deepest selected id, matching
/// change-on-select semantics; clearing the first level reports `None`.
#[component]
pub fn Cascader(
    #[prop(into)] options: Signal<Vec<CascaderOption>>,
    /// Receives the deepest selected id after every change.
    on_change: Callback<Option<i64>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let path: RwSignal<Vec<i64>> = RwSignal::new(Vec::new());

    view! {
        <span class="cascader">
            {move || {
                let levels = select_levels(&options.get(), &path.get());
                levels
                    .into_iter()
                    .enumerate()
                    .map(|(depth, level_options)| {
                        let selected = path.with(|p| p.get(depth).copied());
                        let empty_label = if depth == 0 && !placeholder.is_empty() {
                            placeholder.clone()
                        } else {
                            "—".to_string()
                        };
                        view! {
                            <select
                                class="cascader__select"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev).parse::<i64>().ok();
                                    path.update(|p| {
                                        p.truncate(depth);
                                        if let Some(id) = value {
                                            p.push(id);
                                        }
                                    });
                                    on_change.run(path.with_untracked(|p| p.last().copied()));
                                }
                            >
                                <option value="" selected=selected.is_none()>{empty_label}</option>
                                {level_options
                                    .into_iter()
                                    .map(|opt| {
                                        view! {
                                            <option
                                                value=opt.value.to_string()
                                                selected=(selected == Some(opt.value))
                                            >
                                                {opt.label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                    })
                    .collect_view()
            }}
        </span>
    }
}
