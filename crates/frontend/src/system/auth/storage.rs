use contracts::system::auth::session::{SessionState, SESSION_STORAGE_KEY};

use crate::shared::storage;

/// Session persisted by a previous visit, or an anonymous one
pub fn load_session() -> SessionState {
    SessionState::from_storage(storage::read_raw(SESSION_STORAGE_KEY).as_deref())
}

pub fn save_session(state: &SessionState) {
    storage::save(SESSION_STORAGE_KEY, state);
}

pub fn clear_session() {
    storage::remove(SESSION_STORAGE_KEY);
}
