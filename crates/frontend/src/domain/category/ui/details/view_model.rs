use contracts::domain::category::{Category, CategoryDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category::api;
use crate::shared::query::{scopes, QueryClient};
use crate::shared::toast::ToastService;

/// ViewModel for the category create/edit form.
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub draft: RwSignal<CategoryDraft>,
    pub editing_id: RwSignal<Option<i64>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(existing: Option<&Category>) -> Self {
        let draft = match existing {
            Some(record) => CategoryDraft::from_record(record),
            None => CategoryDraft::default(),
        };
        Self {
            draft: RwSignal::new(draft),
            editing_id: RwSignal::new(existing.map(|c| c.id)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
        }
    }

    /// Validate and submit. On success the draft is reset and the list
    /// invalidated; on failure the draft stays so the operator can correct
    /// and resubmit.
    pub fn save(self, client: QueryClient, toasts: ToastService, on_saved: Callback<()>) {
        let draft = self.draft.get_untracked();
        if let Err(message) = draft.validate() {
            self.error.set(Some(message));
            return;
        }

        let editing_id = self.editing_id.get_untracked();
        self.saving.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_category(id, &draft).await,
                None => api::create_category(&draft).await,
            };
            match result {
                Ok(()) => {
                    client.invalidate(scopes::CATEGORIES);
                    toasts.success(if editing_id.is_some() {
                        "Category updated"
                    } else {
                        "Category created"
                    });
                    self.editing_id.set(None);
                    self.draft.set(CategoryDraft::default());
                    on_saved.run(());
                }
                Err(err) => {
                    self.saving.set(false);
                    self.error.set(Some(format!("Failed to save category: {}", err)));
                }
            }
        });
    }

    /// Upload the picked image and put the returned URL into the draft.
    /// A failed upload leaves every other draft field untouched.
    pub fn upload_image(self, toasts: ToastService, file: web_sys::File) {
        self.uploading.set(true);
        spawn_local(async move {
            match api::upload_image(file).await {
                Ok(url) => {
                    self.draft.update(|d| d.image_url = Some(url));
                    toasts.success("Image uploaded");
                }
                Err(err) => toasts.error(format!("Image upload failed: {}", err)),
            }
            self.uploading.set(false);
        });
    }
}
