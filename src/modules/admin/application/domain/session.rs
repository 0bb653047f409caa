use serde::Serialize;

/// Session-scoped storage key marking an authenticated admin session.
pub const SESSION_FLAG_KEY: &str = "isAdminLoggedIn";
pub const SESSION_FLAG_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}
