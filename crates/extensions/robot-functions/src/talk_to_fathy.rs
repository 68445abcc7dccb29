//! Generic voice interaction entry points.
//!
//! Audio uploads to `execute` are handled by the speech proxy in the API
//! server; these operations serve the query-string and JSON variants.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use fathy_protocols::{
    ApiModule, FnOperation, InputMap, ModuleContext, ModuleError, ModuleManifest, Operation,
    OperationDefinition, OperationError, ParameterSpec,
};

const DEFAULT_MESSAGE: &str = "Voice interaction initiated.";
const LISTEN_DELAY: Duration = Duration::from_millis(100);

fn execute(input: &InputMap) -> Result<Value, OperationError> {
    info!("Talk to Fathy called with {} field(s)", input.len());
    let message = input.str_or("message", DEFAULT_MESSAGE);
    Ok(json!({
        "status": "info",
        "message": format!(
            "Talk to Fathy initiated via generic API call. Message was: '{}'",
            message
        ),
        "details": input.to_value(),
    }))
}

/// Blocks the calling worker for [`LISTEN_DELAY`].
fn listen(_input: &InputMap) -> Result<Value, OperationError> {
    std::thread::sleep(LISTEN_DELAY);
    Ok(json!({
        "status": "info",
        "message": "Listening mode activated (simulated).",
        "details": { "mode": "listening" },
    }))
}

/// `robot_functions/talk_to_fathy` module.
pub struct TalkToFathyModule {
    manifest: ModuleManifest,
}

impl TalkToFathyModule {
    pub fn new() -> Self {
        Self {
            manifest: ModuleManifest::new("robot_functions/talk_to_fathy", "Talk to Fathy")
                .with_description("Voice interaction"),
        }
    }
}

impl Default for TalkToFathyModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiModule for TalkToFathyModule {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    async fn load(&self, _ctx: ModuleContext) -> Result<Vec<Arc<dyn Operation>>, ModuleError> {
        Ok(vec![
            Arc::new(FnOperation::new(
                OperationDefinition::new("execute", "Start a voice interaction"),
                execute,
            )),
            Arc::new(FnOperation::new(
                OperationDefinition::new("listen", "Enter listening mode"),
                listen,
            )),
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_execute_default_message() {
        let result = execute(&InputMap::new()).unwrap();
        assert_eq!(result["status"], "info");
        assert_eq!(
            result["message"],
            "Talk to Fathy initiated via generic API call. Message was: 'Voice interaction initiated.'"
        );
        assert_eq!(result["details"], json!({}));
    }

    #[test]
    fn test_execute_echoes_input() {
        let mut input = InputMap::new();
        input.insert("message", "hello");
        input.insert("volume", 3);
        let result = execute(&input).unwrap();
        assert_eq!(
            result["message"],
            "Talk to Fathy initiated via generic API call. Message was: 'hello'"
        );
        assert_eq!(result["details"], json!({"message": "hello", "volume": 3}));
    }

    #[test]
    fn test_listen_delay() {
        let started = Instant::now();
        let result = listen(&InputMap::new()).unwrap();
        assert!(started.elapsed() >= LISTEN_DELAY);
        assert_eq!(result["details"]["mode"], "listening");
    }
}
