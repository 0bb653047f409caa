use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::modules::admin::application::domain::{SESSION_FLAG_KEY, SESSION_FLAG_VALUE};
use crate::modules::admin::application::ports::incoming::{AdminSessionUseCase, LoginError};
use crate::modules::storage::application::ports::outgoing::{KeyValueStorage, StorageError};

fn digest(input: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(input.as_bytes()));
    out
}

/// The configured admin password, kept only as a SHA-256 digest.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredential {
    digest: [u8; 32],
}

impl AdminCredential {
    pub fn from_plaintext(password: &str) -> Self {
        Self {
            digest: digest(password),
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        // Both sides are fixed-length digests; fold instead of short-circuiting.
        digest(candidate)
            .iter()
            .zip(self.digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminCredential(<redacted>)")
    }
}

/// Checks the password against the configured credential and records the
/// outcome in session-scoped storage.
pub struct CredentialSessionService {
    credential: AdminCredential,
    session: Arc<dyn KeyValueStorage>,
}

impl CredentialSessionService {
    pub fn new(credential: AdminCredential, session: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            credential,
            session,
        }
    }
}

impl AdminSessionUseCase for CredentialSessionService {
    fn login(&self, password: &str) -> Result<(), LoginError> {
        if !self.credential.matches(password) {
            warn!("Admin login rejected");
            return Err(LoginError::InvalidCredential);
        }

        self.session.set_item(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)?;
        info!("Admin logged in");
        Ok(())
    }

    fn logout(&self) -> Result<(), StorageError> {
        self.session.remove_item(SESSION_FLAG_KEY)?;
        info!("Admin logged out");
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        match self.session.get_item(SESSION_FLAG_KEY) {
            Ok(flag) => flag.as_deref() == Some(SESSION_FLAG_VALUE),
            Err(e) => {
                warn!("Session flag unreadable, treating as logged out: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::adapter::outgoing::InMemoryStorage;
    use crate::tests::support::stubs::UnavailableStorage;

    fn service(session: Arc<dyn KeyValueStorage>) -> CredentialSessionService {
        CredentialSessionService::new(AdminCredential::from_plaintext("admin123"), session)
    }

    #[test]
    fn test_credential_matches_only_exact_password() {
        let credential = AdminCredential::from_plaintext("admin123");

        assert!(credential.matches("admin123"));
        assert!(!credential.matches("admin1234"));
        assert!(!credential.matches(""));
        assert_eq!(format!("{:?}", credential), "AdminCredential(<redacted>)");
    }

    #[test]
    fn test_login_sets_and_logout_clears_flag() {
        let session = Arc::new(InMemoryStorage::session());
        let service = service(session.clone());

        service.login("admin123").unwrap();
        assert!(service.is_logged_in());
        assert_eq!(
            session.get_item(SESSION_FLAG_KEY).unwrap().as_deref(),
            Some("true")
        );

        service.logout().unwrap();
        assert!(!service.is_logged_in());
        assert_eq!(session.get_item(SESSION_FLAG_KEY).unwrap(), None);
    }

    #[test]
    fn test_wrong_password_leaves_session_untouched() {
        let session = Arc::new(InMemoryStorage::session());
        let service = service(session.clone());

        assert_eq!(service.login("nope"), Err(LoginError::InvalidCredential));
        assert!(session.is_empty());
        assert!(!service.is_logged_in());
    }

    #[test]
    fn test_flag_must_be_exactly_true() {
        let session = Arc::new(InMemoryStorage::session());
        session.set_item(SESSION_FLAG_KEY, "yes").unwrap();

        assert!(!service(session).is_logged_in());
    }

    #[test]
    fn test_unavailable_session_storage() {
        let service = service(Arc::new(UnavailableStorage));

        assert!(matches!(
            service.login("admin123"),
            Err(LoginError::Session(StorageError::Unavailable(_)))
        ));
        assert!(!service.is_logged_in());
    }
}
