use tracing::debug;

use crate::modules::admin::application::ports::outgoing::Confirmation;

/// Answers every prompt the same way. Used by the headless host, which has
/// no operator to ask.
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmation(pub bool);

impl Confirmation for StaticConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        debug!(prompt, answer = self.0, "Confirmation answered without prompting");
        self.0
    }
}
