use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::modules::chat::application::domain::ChatConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Chat backend error: {0}")]
pub struct ChatBackendError(pub String);

/// Reply text as it arrives, one chunk per item.
pub type ChunkStream = BoxStream<'static, Result<String, ChatBackendError>>;

/// Opens conversations with the hosted assistant.
#[async_trait]
pub trait ChatConnector: Send + Sync {
    async fn start_session(
        &self,
        config: &ChatConfig,
    ) -> Result<Box<dyn ChatSession>, ChatBackendError>;
}

/// One conversation. The backend keeps the history.
#[async_trait]
pub trait ChatSession: Send + Sync {
    async fn send_message_stream(&self, message: &str) -> Result<ChunkStream, ChatBackendError>;
}
