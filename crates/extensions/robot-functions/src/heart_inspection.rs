//! Simulated heart inspection.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

use fathy_protocols::{
    ApiModule, FnOperation, InputMap, ModuleContext, ModuleError, ModuleManifest, Operation,
    OperationDefinition, OperationError,
};

const HISTORY_DAYS: u32 = 5;
const HISTORY_LATEST_DAY: u32 = 7;

/// Health verdict derived from the measured vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HealthStatus {
    Excellent,
    Good,
    AttentionNeeded,
}

impl HealthStatus {
    pub(crate) fn classify(heart_rate: u32, systolic: u32) -> Self {
        if (60..=80).contains(&heart_rate) && systolic < 130 {
            Self::Excellent
        } else if heart_rate <= 100 && systolic < 140 {
            Self::Good
        } else {
            Self::AttentionNeeded
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::AttentionNeeded => "attention_needed",
        }
    }

    fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Your vital signs look great! Keep up the good work.",
            Self::Good => "Your vital signs are within normal range.",
            Self::AttentionNeeded => "Please consult with a healthcare professional.",
        }
    }
}

fn execute(_input: &InputMap) -> Result<Value, OperationError> {
    let mut rng = rand::thread_rng();
    let heart_rate: u32 = rng.gen_range(60..=100);
    let systolic: u32 = rng.gen_range(110..=140);
    let diastolic: u32 = rng.gen_range(70..=90);
    let status = HealthStatus::classify(heart_rate, systolic);

    Ok(json!({
        "success": true,
        "action": "heart_inspection",
        "vital_signs": {
            "heart_rate": heart_rate,
            "blood_pressure": format!("{}/{}", systolic, diastolic),
            "inspection_time": chrono::Local::now().format("%H:%M:%S").to_string(),
        },
        "health_status": status.as_str(),
        "recommendation": status.recommendation(),
        "scan_duration": "15 seconds",
    }))
}

fn history(_input: &InputMap) -> Result<Value, OperationError> {
    let mut rng = rand::thread_rng();
    let statuses = [HealthStatus::Excellent, HealthStatus::Good];

    let entries: Vec<Value> = (0..HISTORY_DAYS)
        .map(|offset| {
            let status = statuses
                .choose(&mut rng)
                .copied()
                .unwrap_or(HealthStatus::Good);
            json!({
                "date": format!("2025-01-{:02}", HISTORY_LATEST_DAY - offset),
                "heart_rate": rng.gen_range(65..=85),
                "status": status.as_str(),
            })
        })
        .collect();

    Ok(json!({
        "success": true,
        "total_inspections": entries.len(),
        "history": entries,
    }))
}

/// `robot_functions/heart_inspection` module.
pub struct HeartInspectionModule {
    manifest: ModuleManifest,
}

impl HeartInspectionModule {
    pub fn new() -> Self {
        Self {
            manifest: ModuleManifest::new("robot_functions/heart_inspection", "Heart Inspection")
                .with_description("Vital sign scan and inspection history"),
        }
    }
}

impl Default for HeartInspectionModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiModule for HeartInspectionModule {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    async fn load(&self, _ctx: ModuleContext) -> Result<Vec<Arc<dyn Operation>>, ModuleError> {
        Ok(vec![
            Arc::new(FnOperation::new(
                OperationDefinition::new("execute", "Run a heart inspection"),
                execute,
            )),
            Arc::new(FnOperation::new(
                OperationDefinition::new("history", "Recent inspection results"),
                history,
            )),
        ])
    }
}
