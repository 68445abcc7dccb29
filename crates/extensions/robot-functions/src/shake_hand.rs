//! Handshake with the robotic arm.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use serde_json::{json, Value};

use fathy_protocols::{
    ApiModule, FnOperation, InputMap, ModuleContext, ModuleError, ModuleManifest, Operation,
    OperationDefinition, OperationError, ParameterSpec,
};

const HANDSHAKE_STEPS: &[&str] = &[
    "🔧 Positioning robotic arm",
    "🤖 Detecting hand presence",
    "🤝 Engaging handshake motion",
    "✅ Handshake completed",
];

fn execute(input: &InputMap) -> Result<Value, OperationError> {
    let intensity = input.str_or("intensity", "normal");
    Ok(json!({
        "success": true,
        "action": "shake_hand",
        "intensity": intensity,
        "steps": HANDSHAKE_STEPS,
        "duration": "3.2 seconds",
        "message": format!("Handshake completed with {} intensity", intensity),
    }))
}

fn status(_input: &InputMap) -> Result<Value, OperationError> {
    Ok(json!({
        "success": true,
        "mechanism": "operational",
        "last_handshake": "2 minutes ago",
        "total_handshakes": rand::thread_rng().gen_range(50..=200),
    }))
}

/// `robot_functions/shake_hand` module.
pub struct ShakeHandModule {
    manifest: ModuleManifest,
}

impl ShakeHandModule {
    pub fn new() -> Self {
        Self {
            manifest: ModuleManifest::new("robot_functions/shake_hand", "Shake Hand")
                .with_description("Robotic arm handshake"),
        }
    }
}

impl Default for ShakeHandModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiModule for ShakeHandModule {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    async fn load(&self, _ctx: ModuleContext) -> Result<Vec<Arc<dyn Operation>>, ModuleError> {
        Ok(vec![
            Arc::new(FnOperation::new(
                OperationDefinition::new("execute", "Shake hands with a visitor")
                    .with_parameter(ParameterSpec::optional("intensity", "normal")),
                execute,
            )),
            Arc::new(FnOperation::new(
                OperationDefinition::new("status", "Handshake mechanism status"),
                status,
            )),
        ])
    }
}
