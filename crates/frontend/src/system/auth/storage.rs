use contracts::system::auth::UserInfo;
use web_sys::window;

const USER_KEY: &str = "auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in user to the localStorage session-identity cache
pub fn save_user(user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Restore the signed-in user from localStorage
pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the cached session identity
pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
