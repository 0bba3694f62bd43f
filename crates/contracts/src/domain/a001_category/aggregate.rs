use serde::{Deserialize, Serialize};

/// Marketplace category as served by `GET /category/list`.
///
/// The set is seeded server-side (Books, Electronics, Clothing, Sports,
/// Furniture, Other); the client never creates categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_item() {
        let cat: Category =
            serde_json::from_str(r#"{"categoryId":2,"name":"Electronics"}"#).unwrap();
        assert_eq!(cat.category_id, 2);
        assert_eq!(cat.name, "Electronics");
    }
}
