use crate::modules::storage::application::ports::outgoing::StorageError;

// ============================ Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredential,
    /// The credential matched but the session flag could not be stored.
    Session(StorageError),
}

impl LoginError {
    /// Message shown under the password field.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::InvalidCredential => "Contraseña incorrecta.",
            LoginError::Session(_) => "No se pudo iniciar la sesión. Inténtalo de nuevo.",
        }
    }
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredential => write!(f, "Invalid credential"),
            LoginError::Session(e) => write!(f, "Session error: {}", e),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<StorageError> for LoginError {
    fn from(error: StorageError) -> Self {
        LoginError::Session(error)
    }
}

// ========================= Admin Session Use Case =========================
/// Gate in front of the admin console. The logged-in state lives in
/// session-scoped storage, so it survives a reload but not a new session.
pub trait AdminSessionUseCase: Send + Sync {
    fn login(&self, password: &str) -> Result<(), LoginError>;

    fn logout(&self) -> Result<(), StorageError>;

    fn is_logged_in(&self) -> bool;
}
