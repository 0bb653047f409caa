pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

pub const SYSTEM_INSTRUCTION: &str = "Eres un asistente amigable y servicial en el sitio web del portafolio de un desarrollador web. Tu objetivo es responder preguntas sobre el desarrollador, sus proyectos y cómo contactarlo. Sé conciso, profesional y amigable.";

#[derive(Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Absent when the site was built without an assistant credential.
    pub api_key: Option<String>,
    pub model: String,
    pub system_instruction: String,
}

impl ChatConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_CHAT_MODEL)
    }
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
