use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

/// Signed-in user identity as returned by `POST /user/login`. This is what the
/// session-identity cache stores between visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(self.email.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /user/register`: account credentials plus the academic
/// details collected in the second form step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub phone: String,
    pub university_id: String,
    pub department: String,
    pub batch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cache_round_trip() {
        let user = UserInfo {
            user_id: 42,
            email: "sara@uni.edu".into(),
            full_name: Some("Sara Perera".into()),
            role: Some(Role::Student),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: UserInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert_eq!(back.display_name(), "Sara Perera");
    }

    #[test]
    fn test_login_response_without_profile_name() {
        let user: UserInfo =
            serde_json::from_str(r#"{"userId":7,"email":"x@uni.edu","role":"STUDENT"}"#).unwrap();
        assert_eq!(user.display_name(), "x@uni.edu");
    }
}
