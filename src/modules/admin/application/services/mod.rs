pub mod admin_console;
pub mod credential_session_service;

pub use admin_console::{AdminConsole, AdminError, AdminView, DeleteOutcome};
pub use credential_session_service::{AdminCredential, CredentialSessionService};
