// src/modules/chat/application/services/chat_widget.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use futures::StreamExt;
use tracing::{error, info};

use crate::modules::chat::application::domain::{ChatConfig, ChatMessage};
use crate::modules::chat::application::ports::outgoing::{ChatConnector, ChatSession};

pub const NOT_CONFIGURED: &str = "La clave de API no está configurada.";
pub const CONNECT_FAILED: &str = "Lo siento, no puedo conectarme con el asistente en este momento.";
pub const GREETING: &str = "¡Hola! ¿Cómo puedo ayudarte a conocer más sobre este portafolio?";
pub const SEND_FAILED: &str = "Lo siento, ha ocurrido un error. Por favor, inténtalo de nuevo.";

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("Chat assistant is not configured")]
    NotConfigured,

    #[error("No chat session is open")]
    NoSession,

    #[error("A message is already being answered")]
    Busy,

    #[error("Chat backend error: {0}")]
    Backend(String),
}

//
// ──────────────────────────────────────────────────────────
// Widget
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct WidgetState {
    open: bool,
    initialized: bool,
    messages: Vec<ChatMessage>,
    session: Option<Arc<dyn ChatSession>>,
}

/// Releases the in-flight flag however the exchange ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Floating assistant panel. The session is created the first time the panel
/// opens and reused afterwards; closing the panel keeps the conversation.
pub struct ChatWidget {
    config: ChatConfig,
    connector: Arc<dyn ChatConnector>,
    state: Mutex<WidgetState>,
    in_flight: AtomicBool,
}

impl ChatWidget {
    pub fn new(config: ChatConfig, connector: Arc<dyn ChatConnector>) -> Self {
        Self {
            config,
            connector,
            state: Mutex::new(WidgetState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    // The lock is never held across an await.
    fn state(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_open(&self) -> bool {
        self.state().open
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state().messages.clone()
    }

    /// Flip the panel. Returns whether it is now open.
    pub async fn toggle(&self) -> bool {
        let open = {
            let mut state = self.state();
            state.open = !state.open;
            state.open
        };

        if open {
            self.initialize().await;
        }
        open
    }

    async fn initialize(&self) {
        {
            let mut state = self.state();
            if state.initialized {
                return;
            }
            state.initialized = true;
        }

        if !self.config.is_configured() {
            self.state().messages = vec![ChatMessage::bot(NOT_CONFIGURED)];
            return;
        }

        match self.connector.start_session(&self.config).await {
            Ok(session) => {
                info!(model = %self.config.model, "Chat session started");
                let mut state = self.state();
                state.session = Some(Arc::from(session));
                state.messages = vec![ChatMessage::bot(GREETING)];
            }
            Err(e) => {
                error!("Chat session could not be started: {}", e);
                self.state().messages = vec![ChatMessage::bot(CONNECT_FAILED)];
            }
        }
    }

    /// Send `input` and stream the reply into the transcript.
    ///
    /// Blank input is a no-op. Backend failures are reported in the transcript
    /// and returned as `ChatError::Backend`.
    pub async fn send(&self, input: &str) -> Result<(), ChatError> {
        if input.trim().is_empty() {
            return Ok(());
        }

        let session = match self.state().session.clone() {
            Some(session) => session,
            None if !self.config.is_configured() => return Err(ChatError::NotConfigured),
            None => return Err(ChatError::NoSession),
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        let _in_flight = InFlight(&self.in_flight);

        self.state().messages.push(ChatMessage::user(input));

        let mut stream = match session.send_message_stream(input).await {
            Ok(stream) => stream,
            Err(e) => {
                error!("Chat message could not be sent: {}", e);
                self.state().messages.push(ChatMessage::bot(SEND_FAILED));
                return Err(ChatError::Backend(e.0));
            }
        };

        let reply_index = {
            let mut state = self.state();
            state.messages.push(ChatMessage::bot(""));
            state.messages.len() - 1
        };

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(text) => {
                    if let Some(reply) = self.state().messages.get_mut(reply_index) {
                        reply.text.push_str(&text);
                    }
                }
                Err(e) => {
                    error!("Chat reply stream failed: {}", e);
                    self.state().messages.push(ChatMessage::bot(SEND_FAILED));
                    return Err(ChatError::Backend(e.0));
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("config", &self.config)
            .field("in_flight", &self.is_loading())
            .finish_non_exhaustive()
    }
}
