use contracts::domain::banner::{Banner, BannerDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::banner::api;
use crate::shared::query::{scopes, QueryClient};
use crate::shared::toast::ToastService;

/// ViewModel for the banner create/edit form. The picked file lives in a
/// local-storage signal because `web_sys::File` is not threadsafe.
#[derive(Clone, Copy)]
pub struct BannerDetailsViewModel {
    pub draft: RwSignal<BannerDraft>,
    pub editing_id: RwSignal<Option<i64>>,
    pub existing_image: RwSignal<Option<String>>,
    pub file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl BannerDetailsViewModel {
    pub fn new(existing: Option<&Banner>) -> Self {
        let draft = match existing {
            Some(record) => BannerDraft::from_record(record),
            None => BannerDraft::default(),
        };
        Self {
            draft: RwSignal::new(draft),
            editing_id: RwSignal::new(existing.map(|b| b.id)),
            existing_image: RwSignal::new(existing.and_then(|b| b.image_url.clone())),
            file: RwSignal::new_local(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn has_image(&self) -> bool {
        self.file.with_untracked(|f| f.is_some())
            || self
                .existing_image
                .with_untracked(|url| url.as_deref().is_some_and(|u| !u.is_empty()))
    }

    /// Validate and submit. On failure the modal stays open with the draft
    /// and the picked file intact.
    pub fn save(self, client: QueryClient, toasts: ToastService, on_saved: Callback<()>) {
        let draft = self.draft.get_untracked();
        if let Err(message) = draft.validate(self.has_image()) {
            self.error.set(Some(message));
            return;
        }

        let editing_id = self.editing_id.get_untracked();
        let file = self.file.get_untracked();
        self.saving.set(true);
        self.error.set(None);

        spawn_local(async move {
            match api::save_banner(editing_id, &draft, file).await {
                Ok(()) => {
                    client.invalidate(scopes::BANNERS);
                    toasts.success(if editing_id.is_some() {
                        "Banner updated"
                    } else {
                        "Banner created"
                    });
                    self.draft.set(BannerDraft::default());
                    self.file.set(None);
                    on_saved.run(());
                }
                Err(err) => {
                    self.saving.set(false);
                    self.error.set(Some(format!("Failed to save banner: {}", err)));
                }
            }
        });
    }
}
