//! The stored user record.

use crate::error::{EventlyError, EventlyResult};
use crate::user::User;

use super::{KeyValueStore, USER_KEY};

pub struct UserStore<S> {
    store: S,
}

impl<S: KeyValueStore> UserStore<S> {
    pub fn new(store: S) -> Self {
        UserStore { store }
    }

    /// The registered user, if anyone has registered yet.
    pub async fn load(&self) -> EventlyResult<Option<User>> {
        let Some(content) = self.store.get(USER_KEY).await? else {
            tracing::debug!("No user registered");
            return Ok(None);
        };

        let user = serde_json::from_str(&content).map_err(|e| EventlyError::Decode {
            key: USER_KEY.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(user))
    }

    /// Validate `user` and store it, replacing any previous registration.
    pub async fn register(&self, user: &User) -> EventlyResult<()> {
        user.validate()?;

        let content =
            serde_json::to_string(user).map_err(|e| EventlyError::Encode(e.to_string()))?;
        self.store.set(USER_KEY, &content).await?;

        tracing::info!(email = %user.email, "Registered user");
        Ok(())
    }
}
