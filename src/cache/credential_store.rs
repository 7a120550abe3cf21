use tokio::sync::RwLock;

use crate::cache::credential::Credential;

/// Single-slot credential cache owned by one `AuthService`.
///
/// `None` means no refresh has succeeded yet. Writes replace the whole credential.
#[derive(Debug, Default)]
pub struct CredentialStore {
    inner: RwLock<Option<Credential>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self { inner: RwLock::new(None) }
    }

    /// Replace the stored credential
    pub async fn set(&self, credential: Credential) {
        let mut slot = self.inner.write().await;
        *slot = Some(credential);
    }

    /// Current credential, expired or not
    pub async fn get(&self) -> Option<Credential> {
        self.inner.read().await.clone()
    }

    /// Current credential only if it has not expired
    pub async fn get_fresh(&self) -> Option<Credential> {
        self.inner
            .read()
            .await
            .as_ref()
            .filter(|credential| credential.is_fresh())
            .cloned()
    }
}
