use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

/// Process-wide authentication state. There is exactly one of these, owned by
/// `AuthProvider`; every component reads the session from context instead of
/// re-reading ambient storage.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.user_id)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session-identity cache before the first render so a
    // signed-in user never sees the login page flash.
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::get_user(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Establish the session after a successful login: persist the identity cache
/// and flip the auth gate.
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, user: UserInfo) {
    storage::save_user(&user);
    set_auth_state.set(AuthState { user: Some(user) });
}

/// Tear the session down: clear the cache and the state.
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_user();
    set_auth_state.set(AuthState::default());
}
