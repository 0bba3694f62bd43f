use super::aggregate::{Product, ProductCondition, ProductPayload};

/// In-memory draft of a listing being created or edited.
///
/// The draft owns the editable fields plus a `dirty` flag. Every setter merges
/// one field and marks the draft dirty. No validation happens here: the
/// submit gate checks required fields for the create flow, and everything else
/// is the remote API's to reject. Price is kept as the string the user typed
/// and parsed only at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub condition: ProductCondition,
    pub location: String,
    pub contact_phone: String,
    pub category_id: Option<i64>,
    pub image_urls: Vec<String>,
    pub dirty: bool,
}

impl ProductDraft {
    /// Empty draft for the create flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft seeded from an existing listing (edit flow). Not dirty until the
    /// user changes something.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
            condition: product.condition,
            location: product.location.clone().unwrap_or_default(),
            contact_phone: product.contact_phone.clone().unwrap_or_default(),
            category_id: product.category_id,
            image_urls: product.image_urls.clone(),
            dirty: false,
        }
    }

    /// Reinitialize from a listing snapshot (or to empty), discarding local
    /// edits.
    pub fn reset(&mut self, source: Option<&Product>) {
        *self = match source {
            Some(p) => Self::from_product(p),
            None => Self::new(),
        };
    }

    // --- field setters: merge one field, mark dirty ---

    pub fn set_title(&mut self, value: String) {
        self.title = value;
        self.dirty = true;
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
        self.dirty = true;
    }

    pub fn set_price(&mut self, value: String) {
        self.price = value;
        self.dirty = true;
    }

    pub fn set_condition(&mut self, value: ProductCondition) {
        self.condition = value;
        self.dirty = true;
    }

    pub fn set_location(&mut self, value: String) {
        self.location = value;
        self.dirty = true;
    }

    pub fn set_contact_phone(&mut self, value: String) {
        self.contact_phone = value;
        self.dirty = true;
    }

    pub fn set_category(&mut self, value: i64) {
        self.category_id = Some(value);
        self.dirty = true;
    }

    pub fn clear_category(&mut self) {
        self.category_id = None;
        self.dirty = true;
    }

    /// Append uploaded image URLs at the tail, preserving upload order. A
    /// batch that produced nothing changes nothing.
    pub fn append_images(&mut self, urls: Vec<String>) {
        if urls.is_empty() {
            return;
        }
        self.image_urls.extend(urls);
        self.dirty = true;
    }

    /// Remove one image by position. Out-of-range indices are ignored; there
    /// is no stable image identity beyond array position + value.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.image_urls.len() {
            self.image_urls.remove(index);
            self.dirty = true;
        }
    }

    // --- submit gating ---

    pub fn parsed_price(&self) -> Option<f64> {
        self.price.trim().parse::<f64>().ok().filter(|p| *p > 0.0)
    }

    /// Required fields for the create flow: title, price, category, at least
    /// one image, contact phone. Returns the labels of whatever is missing.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.parsed_price().is_none() {
            missing.push("price");
        }
        if self.category_id.is_none() {
            missing.push("category");
        }
        if self.image_urls.is_empty() {
            missing.push("photo");
        }
        if self.contact_phone.trim().is_empty() {
            missing.push("contact phone");
        }
        missing
    }

    pub fn required_fields_present(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Edit-flow guard: only an edited draft may be saved, and never while a
    /// save is already in flight.
    pub fn can_submit_update(&self, pending: bool) -> bool {
        self.dirty && !pending
    }

    // --- payload builders ---

    /// Build the `POST /product/add` body. Checked against the required-field
    /// gate so no request is issued for an incomplete draft.
    pub fn to_add_payload(&self, seller_id: i64) -> Result<ProductPayload, String> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(format!("Please fill in: {}", missing.join(", ")));
        }
        Ok(self.payload(None, seller_id, self.category_id.unwrap_or_default()))
    }

    /// Build the `PUT /product/update` body, carrying over the listing's
    /// identifiers.
    pub fn to_update_payload(
        &self,
        product_id: i64,
        seller_id: i64,
        category_id: i64,
    ) -> Result<ProductPayload, String> {
        if self.parsed_price().is_none() {
            return Err("Price must be a positive number".to_string());
        }
        Ok(self.payload(Some(product_id), seller_id, category_id))
    }

    fn payload(&self, product_id: Option<i64>, seller_id: i64, category_id: i64) -> ProductPayload {
        ProductPayload {
            product_id,
            seller_id,
            category_id,
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            price: self.parsed_price().unwrap_or_default(),
            condition: self.condition,
            location: self.location.clone(),
            contact_phone: self.contact_phone.clone(),
            image_urls: self.image_urls.clone(),
        }
    }
}

/// Render a price for the edit form without trailing ".0" noise.
fn format_price(price: f64) -> String {
    if price == price.trunc() {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

/// Lifecycle of one submit attempt: `Idle → Pending → {Succeeded, Idle}`.
///
/// A failed submit returns the gate to `Idle` so the user can retry manually;
/// success is terminal for the draft session (the draft is discarded and the
/// owning view refreshes). Re-entrant `try_begin` calls while pending are
/// no-ops, which is what prevents double submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    phase: SubmitPhase,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Pending` if the guard holds and nothing is in flight. Returns
    /// whether the caller may issue the request.
    pub fn try_begin(&mut self, allowed: bool) -> bool {
        if allowed && self.phase == SubmitPhase::Idle {
            self.phase = SubmitPhase::Pending;
            true
        } else {
            false
        }
    }

    pub fn succeed(&mut self) {
        if self.phase == SubmitPhase::Pending {
            self.phase = SubmitPhase::Succeeded;
        }
    }

    pub fn fail(&mut self) {
        if self.phase == SubmitPhase::Pending {
            self.phase = SubmitPhase::Idle;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SubmitPhase::Pending
    }

    pub fn is_succeeded(&self) -> bool {
        self.phase == SubmitPhase::Succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_draft() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.set_title("Bike".to_string());
        draft.set_price("5000".to_string());
        draft.set_category(2);
        draft.append_images(vec!["u1".to_string()]);
        draft.set_contact_phone("0712345678".to_string());
        draft
    }

    #[test]
    fn test_setters_mark_dirty() {
        let mut draft = ProductDraft::new();
        assert!(!draft.dirty);
        draft.set_title("Desk".to_string());
        assert!(draft.dirty);
    }

    #[test]
    fn test_remove_image_by_position() {
        let mut draft = ProductDraft::new();
        draft.append_images(vec!["a".into(), "b".into(), "c".into()]);
        draft.dirty = false;

        draft.remove_image(1);
        assert_eq!(draft.image_urls, vec!["a".to_string(), "c".to_string()]);
        assert!(draft.dirty);

        // Out of range is ignored.
        draft.dirty = false;
        draft.remove_image(5);
        assert_eq!(draft.image_urls.len(), 2);
        assert!(!draft.dirty);
    }

    #[test]
    fn test_append_preserves_order_and_empty_batch_is_a_noop() {
        let mut draft = ProductDraft::new();
        draft.append_images(vec!["u1".into(), "u2".into()]);
        draft.append_images(vec!["u3".into()]);
        assert_eq!(draft.image_urls, vec!["u1", "u2", "u3"]);

        draft.dirty = false;
        draft.append_images(vec![]);
        assert!(!draft.dirty);
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut draft = create_draft();
        assert!(draft.dirty);
        draft.reset(None);
        assert_eq!(draft, ProductDraft::new());
        assert!(!draft.dirty);
    }

    #[test]
    fn test_required_field_gate() {
        let mut draft = ProductDraft::new();
        assert_eq!(
            draft.missing_required(),
            vec!["title", "price", "category", "photo", "contact phone"]
        );

        draft = create_draft();
        assert!(draft.required_fields_present());

        draft.set_price("free".to_string());
        assert_eq!(draft.missing_required(), vec!["price"]);
        draft.set_price("-10".to_string());
        assert_eq!(draft.missing_required(), vec!["price"]);
    }

    #[test]
    fn test_create_flow_scenario_builds_one_add_payload() {
        let draft = create_draft();
        let payload = draft.to_add_payload(42).unwrap();
        assert_eq!(payload.product_id, None);
        assert_eq!(payload.seller_id, 42);
        assert_eq!(payload.category_id, 2);
        assert_eq!(payload.title, "Bike");
        assert_eq!(payload.price, 5000.0);
        assert_eq!(payload.image_urls, vec!["u1".to_string()]);
        assert_eq!(payload.contact_phone, "0712345678");
    }

    #[test]
    fn test_incomplete_draft_never_produces_a_payload() {
        let mut draft = create_draft();
        draft.image_urls.clear();
        assert!(draft.to_add_payload(42).is_err());
    }

    #[test]
    fn test_double_submit_issues_exactly_one_request() {
        let draft = create_draft();
        let mut gate = SubmitGate::new();
        let mut issued = 0usize;

        for _ in 0..3 {
            if gate.try_begin(draft.required_fields_present()) {
                issued += 1;
            }
        }
        assert_eq!(issued, 1);
        assert!(gate.is_pending());
    }

    #[test]
    fn test_successful_submit_clears_dirty_and_blocks_resubmit() {
        let mut product_draft = create_draft();
        let mut gate = SubmitGate::new();

        assert!(gate.try_begin(product_draft.can_submit_update(gate.is_pending())));
        gate.succeed();
        product_draft.dirty = false;

        // Without further edits the edit-flow guard refuses to begin again.
        assert!(!gate.try_begin(product_draft.can_submit_update(gate.is_pending())));
        assert!(gate.is_succeeded());
    }

    #[test]
    fn test_failed_submit_returns_to_idle_and_keeps_the_draft() {
        let draft = create_draft();
        let before = draft.clone();
        let mut gate = SubmitGate::new();

        assert!(gate.try_begin(draft.can_submit_update(gate.is_pending())));
        gate.fail();
        assert_eq!(draft, before);
        assert!(!gate.is_pending());

        // Manual retry is possible after a failure.
        assert!(gate.try_begin(draft.can_submit_update(gate.is_pending())));
    }

    #[test]
    fn test_seeded_draft_round_trips_price_text() {
        let product = Product {
            product_id: 9,
            seller_id: 1,
            category_id: Some(3),
            title: "Chair".into(),
            description: String::new(),
            price: 2500.0,
            condition: ProductCondition::Used,
            location: Some("Library".into()),
            contact_phone: Some("0711111111".into()),
            seller_name: None,
            category_name: None,
            image_urls: vec!["u".into()],
            created_at: None,
        };
        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.price, "2500");
        assert!(!draft.dirty);
        let payload = draft.to_update_payload(9, 1, 3).unwrap();
        assert_eq!(payload.product_id, Some(9));
        assert_eq!(payload.price, 2500.0);
    }
}
