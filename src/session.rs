use crate::{
    config::AppConfig,
    models::{Session, User},
};

/// String key/value storage that survives reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every failure degrades to "nothing stored".
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The session as two independent entries: the user identity as JSON and
/// the bearer token as a bare string.
#[derive(Debug, Clone)]
pub struct SessionStore<K> {
    storage: K,
    user_key: String,
    token_key: String,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(storage: K, config: &AppConfig) -> Self {
        Self {
            storage,
            user_key: config.user_key.clone(),
            token_key: config.token_key.clone(),
        }
    }

    pub fn load(&self) -> Option<Session> {
        let raw_user = self.storage.get(&self.user_key)?;
        let user = match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => user,
            Err(err) => {
                log::warn!("discarding unreadable stored user: {err}");
                return None;
            }
        };
        let token = self
            .storage
            .get(&self.token_key)
            .filter(|token| !token.is_empty())?;
        Some(Session { user, token })
    }

    pub fn save(&self, session: &Session) {
        match serde_json::to_string(&session.user) {
            Ok(raw) => self.storage.set(&self.user_key, &raw),
            Err(err) => log::warn!("could not encode user: {err}"),
        }
        self.storage.set(&self.token_key, &session.token);
    }

    pub fn clear(&self) {
        self.storage.remove(&self.user_key);
        self.storage.remove(&self.token_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStorage;

    fn alice() -> Session {
        Session {
            user: User {
                id: 1,
                username: "alice".to_string(),
            },
            token: "t1".to_string(),
        }
    }

    #[test]
    fn saved_session_survives_a_reload() {
        let storage = MemoryStorage::default();
        let config = AppConfig::default();
        SessionStore::new(storage.clone(), &config).save(&alice());

        let reloaded = SessionStore::new(storage.clone(), &config);
        assert_eq!(reloaded.load(), Some(alice()));
        assert_eq!(storage.get("token").as_deref(), Some("t1"));
        assert_eq!(
            storage.get("user").as_deref(),
            Some(r#"{"id":1,"username":"alice"}"#)
        );
    }

    #[test]
    fn clear_removes_both_entries() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone(), &AppConfig::default());
        store.save(&alice());
        store.clear();

        assert_eq!(storage.get("user"), None);
        assert_eq!(storage.get("token"), None);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn user_without_token_is_not_a_session() {
        let storage = MemoryStorage::default();
        storage.set("user", r#"{"id":1,"username":"alice"}"#);
        let store = SessionStore::new(storage, &AppConfig::default());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_user_entry_is_ignored() {
        let storage = MemoryStorage::default();
        storage.set("user", "not json");
        storage.set("token", "t1");
        let store = SessionStore::new(storage, &AppConfig::default());
        assert_eq!(store.load(), None);
    }
}
