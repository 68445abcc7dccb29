//! Guided tour of the house.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

use fathy_protocols::{
    ApiModule, FnOperation, InputMap, ModuleContext, ModuleError, ModuleManifest, Operation,
    OperationDefinition, OperationError, ParameterSpec,
};

const DEFAULT_MINUTES_PER_STOP: u32 = 3;

/// Upper bound for the `minutes_per_stop` setting.
const MAX_MINUTES_PER_STOP: u32 = 60;

const STANDARD_ROUTE: &[&str] = &[
    "🏠 Welcome area introduction",
    "🛋️ Living room tour",
    "🍳 Kitchen demonstration",
    "📚 Study room overview",
    "🌿 Garden walkthrough",
];

const DETAILED_ROUTE: &[&str] = &[
    "🏠 Welcome area with history",
    "🛋️ Living room with features explanation",
    "🍳 Kitchen with appliance demonstration",
    "📚 Study room with technology showcase",
    "🌿 Garden with plant identification",
    "🔧 Utility room tour",
];

const QUICK_ROUTE: &[&str] = &["🏠 Welcome area", "🛋️ Living room", "🍳 Kitchen"];

/// Kind of tour a visitor can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourType {
    Standard,
    Detailed,
    Quick,
}

impl TourType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "detailed" => Some(Self::Detailed),
            "quick" => Some(Self::Quick),
            _ => None,
        }
    }

    /// Fixed list of stops.
    pub fn route(self) -> &'static [&'static str] {
        match self {
            Self::Standard => STANDARD_ROUTE,
            Self::Detailed => DETAILED_ROUTE,
            Self::Quick => QUICK_ROUTE,
        }
    }
}

#[derive(Debug, Serialize)]
struct TourPlan {
    success: bool,
    action: &'static str,
    tour_type: String,
    route: &'static [&'static str],
    estimated_time: String,
    current_position: &'static str,
    tour_id: String,
}

/// Unknown tour types fall back to the standard route but keep the
/// requested name in `tour_type`.
fn execute(input: &InputMap, minutes_per_stop: u32) -> Result<Value, OperationError> {
    let tour_type = input.str_or("type", "standard");
    let route = TourType::parse(&tour_type)
        .unwrap_or(TourType::Standard)
        .route();
    let minutes = route.len() as u32 * minutes_per_stop;

    let plan = TourPlan {
        success: true,
        action: "basic_tour",
        tour_type,
        route,
        estimated_time: format!("{} minutes", minutes),
        current_position: "Starting point",
        tour_id: format!("tour_{}", rand::thread_rng().gen_range(1000..=9999)),
    };
    Ok(serde_json::to_value(plan)?)
}

fn pause(_input: &InputMap) -> Result<Value, OperationError> {
    Ok(json!({
        "success": true,
        "status": "paused",
        "message": "Tour has been paused. Use resume to continue.",
    }))
}

fn resume(_input: &InputMap) -> Result<Value, OperationError> {
    Ok(json!({
        "success": true,
        "status": "resumed",
        "message": "Tour has been resumed.",
    }))
}

/// `robot_functions/basic_tour` module.
pub struct BasicTourModule {
    manifest: ModuleManifest,
}

impl BasicTourModule {
    pub fn new() -> Self {
        Self {
            manifest: ModuleManifest::new("robot_functions/basic_tour", "Basic Tour")
                .with_description("Guided tour of the house"),
        }
    }
}

impl Default for BasicTourModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiModule for BasicTourModule {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    async fn load(&self, ctx: ModuleContext) -> Result<Vec<Arc<dyn Operation>>, ModuleError> {
        let minutes_per_stop = ctx
            .setting::<u32>("minutes_per_stop")
            .unwrap_or(DEFAULT_MINUTES_PER_STOP);
        if minutes_per_stop == 0 {
            return Err(ModuleError::InvalidSettings(
                "minutes_per_stop must be greater than 0".to_string(),
            ));
        }
        if minutes_per_stop > MAX_MINUTES_PER_STOP {
            return Err(ModuleError::InvalidSettings(format!(
                "minutes_per_stop must be at most {}",
                MAX_MINUTES_PER_STOP
            )));
        }

        Ok(vec![
            Arc::new(FnOperation::new(
                OperationDefinition::new("execute", "Start a guided tour").with_parameter(
                    ParameterSpec::optional("type", "standard")
                        .with_description("standard, detailed or quick"),
                ),
                move |input| execute(input, minutes_per_stop),
            )),
            Arc::new(FnOperation::new(
                OperationDefinition::new("pause", "Pause the current tour"),
                pause,
            )),
            Arc::new(FnOperation::new(
                OperationDefinition::new("resume", "Resume a paused tour"),
                resume,
            )),
        ])
    }
}
