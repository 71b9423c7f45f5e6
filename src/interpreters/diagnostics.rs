use tracing::debug;

/// Warning accumulator threaded through every planning stage.
#[derive(Debug, Default)]
pub struct PlanDiagnostics {
    warnings: Vec<String>,
}

impl PlanDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(warning = %message, "plan degraded");
        self.warnings.push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        for message in messages {
            self.warn(message);
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
