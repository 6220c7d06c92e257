//! Session Persistence
//!
//! The authenticated identity pair, mirrored to `localStorage` so a
//! page reload does not require re-entering credentials. There is no
//! token, expiry, or refresh: the stored identifier is attached to
//! every request and its validity is entirely the server's business.

const USER_ID_KEY: &str = "studylog_user_id";
const USERNAME_KEY: &str = "studylog_username";

/// An authenticated user identity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Restore a prior session from durable storage, if one exists
pub fn load_session() -> Option<Session> {
    let storage = local_storage()?;
    let user_id = storage.get_item(USER_ID_KEY).ok().flatten()?;
    let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
    Some(Session { user_id, username })
}

/// Persist the session across page reloads
pub fn save_session(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(USER_ID_KEY, &session.user_id);
        let _ = storage.set_item(USERNAME_KEY, &session.username);
    }
}

/// Remove the stored session
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_ID_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
