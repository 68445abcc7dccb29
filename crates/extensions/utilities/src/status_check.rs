//! Robot self-check.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

use fathy_protocols::{
    ApiModule, FnOperation, InputMap, ModuleContext, ModuleError, ModuleManifest, Operation,
    OperationDefinition, OperationError,
};

const HEALTH_LEVELS: &[&str] = &["excellent", "good", "fair"];
const ACTIVE_FUNCTIONS: &[&str] = &["Voice recognition", "Motor controls", "Sensor array"];

fn execute(_input: &InputMap) -> Result<Value, OperationError> {
    let mut rng = rand::thread_rng();
    let health = HEALTH_LEVELS.choose(&mut rng).copied().unwrap_or("good");
    let battery: u32 = rng.gen_range(70..=100);
    let temperature: u32 = rng.gen_range(35..=45);

    Ok(json!({
        "success": true,
        "action": "status_check",
        "timestamp": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "system_health": health,
        "battery_level": format!("{}%", battery),
        "cpu_temperature": format!("{}°C", temperature),
        "active_functions": ACTIVE_FUNCTIONS,
        "last_maintenance": "2025-01-01",
        "uptime": "2 days, 14 hours",
    }))
}

/// `utilities/status_check` module.
pub struct StatusCheckModule {
    manifest: ModuleManifest,
}

impl StatusCheckModule {
    pub fn new() -> Self {
        Self {
            manifest: ModuleManifest::new("utilities/status_check", "Status Check")
                .with_description("Battery, temperature and overall health"),
        }
    }
}

impl Default for StatusCheckModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiModule for StatusCheckModule {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    async fn load(&self, _ctx: ModuleContext) -> Result<Vec<Arc<dyn Operation>>, ModuleError> {
        Ok(vec![Arc::new(FnOperation::new(
            OperationDefinition::new("execute", "Run a system status check"),
            execute,
        ))])
    }
}
