use async_trait::async_trait;
use tracing::debug;

use crate::modules::chat::application::domain::ChatConfig;
use crate::modules::chat::application::ports::outgoing::{
    ChatBackendError, ChatConnector, ChatSession,
};

/// Connector for hosts with no network route to an assistant. Every session
/// request fails, which the widget reports as an unreachable assistant.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineConnector;

#[async_trait]
impl ChatConnector for OfflineConnector {
    async fn start_session(
        &self,
        config: &ChatConfig,
    ) -> Result<Box<dyn ChatSession>, ChatBackendError> {
        debug!(model = %config.model, "Offline connector refusing chat session");
        Err(ChatBackendError(format!(
            "no assistant backend available for model '{}'",
            config.model
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_connector_never_connects() {
        let result = OfflineConnector
            .start_session(&ChatConfig::new(Some("k".into()), "m"))
            .await;

        assert!(result.is_err());
    }
}
