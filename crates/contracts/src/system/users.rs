use serde::{Deserialize, Serialize};

/// Profile record behind `GET /user/profile/{id}` and the full payload of
/// `PUT /user/profile/update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub university_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Letter shown when no avatar image is set.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}
