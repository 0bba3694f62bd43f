//! ViewModel driving the sell and edit-product forms.
//!
//! The draft itself (fields + dirty flag) and the submit gate live in the
//! contracts crate as plain data; this ViewModel wraps them in signals and
//! adds the async commands: sequential image upload, create/update submits
//! and delete.

use contracts::domain::a002_product::{Product, ProductDraft, SubmitGate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::model;
use crate::shared::notify::NotifyService;
use crate::shared::upload;

#[derive(Clone, Copy)]
pub struct ProductDraftVm {
    pub draft: RwSignal<ProductDraft>,
    pub gate: RwSignal<SubmitGate>,
    pub uploading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductDraftVm {
    /// Empty draft for the create flow.
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ProductDraft::new()),
            gate: RwSignal::new(SubmitGate::new()),
            uploading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Draft seeded from an existing listing (edit flow).
    pub fn seeded(product: &Product) -> Self {
        Self {
            draft: RwSignal::new(ProductDraft::from_product(product)),
            gate: RwSignal::new(SubmitGate::new()),
            uploading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Merge a field edit into the draft (the setters mark it dirty).
    pub fn edit(&self, apply: impl FnOnce(&mut ProductDraft)) {
        self.draft.update(apply);
    }

    /// Throw away local edits and reseed from the given snapshot.
    pub fn reset(&self, source: Option<&Product>) {
        let source = source.cloned();
        self.draft.update(|d| d.reset(source.as_ref()));
        self.gate.set(SubmitGate::new());
        self.error.set(None);
    }

    // === Derived signals ===

    pub fn is_pending(&self) -> Signal<bool> {
        let gate = self.gate;
        Signal::derive(move || gate.get().is_pending())
    }

    pub fn is_dirty(&self) -> Signal<bool> {
        let draft = self.draft;
        Signal::derive(move || draft.get().dirty)
    }

    /// Edit flow: save only an edited draft, one request at a time.
    pub fn is_update_disabled(&self) -> Signal<bool> {
        let draft = self.draft;
        let gate = self.gate;
        Signal::derive(move || !draft.get().dirty || gate.get().is_pending())
    }

    /// Create flow: the button stays enabled until submit; missing fields are
    /// reported then. Posting is blocked while uploads or the request run.
    pub fn is_create_disabled(&self) -> Signal<bool> {
        let gate = self.gate;
        let uploading = self.uploading;
        Signal::derive(move || gate.get().is_pending() || uploading.get())
    }

    // === Commands ===

    /// Upload a batch of selected photos strictly in order and merge the
    /// resulting URLs into the draft. Partial results are kept when the batch
    /// fails part-way; the user may simply add the remaining photos again.
    pub fn upload(&self, files: Vec<web_sys::File>, notify: NotifyService) {
        if files.is_empty() {
            return;
        }

        let this = *self;
        this.uploading.set(true);

        spawn_local(async move {
            let batch = upload::upload_files(files).await;
            let uploaded = batch.urls.len();
            this.draft.update(|d| d.append_images(batch.urls));

            match batch.error {
                None => notify.success("Images uploaded successfully"),
                Some(e) => {
                    log::warn!("image upload stopped after {} file(s): {}", uploaded, e);
                    notify.error("Failed to upload image");
                }
            }
            this.uploading.set(false);
        });
    }

    pub fn remove_image(&self, index: usize) {
        self.draft.update(|d| d.remove_image(index));
    }

    /// Create-flow submit. Required fields are checked before any request is
    /// issued; the gate swallows re-entrant calls while a request is pending.
    pub fn submit_create(&self, seller_id: i64, notify: NotifyService, on_saved: Callback<()>) {
        let draft = self.draft.get_untracked();
        let payload = match draft.to_add_payload(seller_id) {
            Ok(payload) => payload,
            Err(message) => {
                notify.warning(message);
                return;
            }
        };

        let mut gate = self.gate.get_untracked();
        if !gate.try_begin(true) {
            return;
        }
        self.gate.set(gate);

        let this = *self;
        spawn_local(async move {
            match model::add_product(&payload).await {
                Ok(_) => {
                    this.gate.update(|g| g.succeed());
                    this.draft.update(|d| d.reset(None));
                    notify.success("Product listed successfully!");
                    on_saved.run(());
                }
                Err(e) => {
                    this.gate.update(|g| g.fail());
                    this.error.set(Some(e));
                    notify.error("Failed to post product");
                }
            }
        });
    }

    /// Edit-flow submit, guarded by `dirty && !pending`. On failure the draft
    /// is left untouched for a manual retry.
    pub fn submit_update(
        &self,
        product_id: i64,
        seller_id: i64,
        category_id: i64,
        notify: NotifyService,
        on_saved: Callback<()>,
    ) {
        let draft = self.draft.get_untracked();
        let mut gate = self.gate.get_untracked();
        if !gate.try_begin(draft.can_submit_update(gate.is_pending())) {
            return;
        }
        self.gate.set(gate);

        let payload = match draft.to_update_payload(product_id, seller_id, category_id) {
            Ok(payload) => payload,
            Err(message) => {
                self.gate.update(|g| g.fail());
                notify.warning(message);
                return;
            }
        };

        let this = *self;
        spawn_local(async move {
            match model::update_product(&payload).await {
                Ok(_) => {
                    this.gate.update(|g| g.succeed());
                    this.draft.update(|d| d.dirty = false);
                    notify.success("Product updated successfully!");
                    on_saved.run(());
                }
                Err(e) => {
                    this.gate.update(|g| g.fail());
                    this.error.set(Some(e));
                    notify.error("Failed to update product");
                }
            }
        });
    }

    pub fn delete(&self, product_id: i64, notify: NotifyService, on_deleted: Callback<()>) {
        spawn_local(async move {
            match model::delete_product(product_id).await {
                Ok(_) => {
                    notify.success("Product deleted successfully");
                    on_deleted.run(());
                }
                Err(e) => {
                    log::warn!("delete failed for listing {}: {}", product_id, e);
                    notify.error("Failed to delete product");
                }
            }
        });
    }
}

impl Default for ProductDraftVm {
    fn default() -> Self {
        Self::new()
    }
}
