use serde::{Deserialize, Serialize};

/// Condition of a listed item. The wire value is the two-state enum; the UI
/// may show finer-grained labels ("Used - Like New" etc.) that all map to
/// `Used`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCondition {
    New,
    #[default]
    Used,
}

impl ProductCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCondition::New => "NEW",
            ProductCondition::Used => "USED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "NEW" => ProductCondition::New,
            _ => ProductCondition::Used,
        }
    }
}

/// Listing record as served by `GET /product/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub seller_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub condition: ProductCondition,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub created_at: Option<chrono::NaiveDateTime>,
}

impl Product {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.seller_id == user_id
    }

    /// Case-insensitive substring search over title and description. An empty
    /// query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&q) || self.description.to_lowercase().contains(&q)
    }

    /// Category filtering is pinned to the numeric category id carried by both
    /// the product and the category list. `None` means "All".
    pub fn matches_category(&self, filter: Option<i64>) -> bool {
        match filter {
            None => true,
            Some(id) => self.category_id == Some(id),
        }
    }

    pub fn matches(&self, query: &str, category: Option<i64>) -> bool {
        self.matches_search(query) && self.matches_category(category)
    }
}

/// Body of `POST /product/add` and `PUT /product/update`: the full draft plus
/// the seller and category identifiers. `product_id` is present only for
/// updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    pub seller_id: i64,
    pub category_id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub condition: ProductCondition,
    pub location: String,
    pub contact_phone: String,
    pub image_urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, description: &str, category_id: Option<i64>) -> Product {
        Product {
            product_id: 1,
            seller_id: 7,
            category_id,
            title: title.to_string(),
            description: description.to_string(),
            price: 1500.0,
            condition: ProductCondition::Used,
            location: None,
            contact_phone: None,
            seller_name: None,
            category_name: None,
            image_urls: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_condition_wire_values() {
        assert_eq!(serde_json::to_string(&ProductCondition::New).unwrap(), "\"NEW\"");
        let c: ProductCondition = serde_json::from_str("\"USED\"").unwrap();
        assert_eq!(c, ProductCondition::Used);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let p = product("Calculus Textbook", "Barely used, 3rd edition", Some(1));
        assert!(p.matches_search("calculus"));
        assert!(p.matches_search("EDITION"));
        assert!(p.matches_search(""));
        assert!(!p.matches_search("bicycle"));
    }

    #[test]
    fn test_category_filter_uses_canonical_id() {
        let p = product("Desk lamp", "", Some(5));
        assert!(p.matches_category(None));
        assert!(p.matches_category(Some(5)));
        assert!(!p.matches_category(Some(2)));
        // Products without a category only match "All".
        let q = product("Mystery box", "", None);
        assert!(q.matches_category(None));
        assert!(!q.matches_category(Some(6)));
    }

    #[test]
    fn test_decode_list_item_with_missing_optionals() {
        let p: Product = serde_json::from_str(
            r#"{"productId":3,"sellerId":9,"title":"Bike","price":5000.0,
                "condition":"USED","createdAt":"2026-01-12T10:15:30"}"#,
        )
        .unwrap();
        assert_eq!(p.product_id, 3);
        assert!(p.image_urls.is_empty());
        assert!(p.created_at.is_some());
    }
}
