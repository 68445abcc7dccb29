//! Robot function modules for Fathy.
//!
//! Every module lives under the `robot_functions/` namespace.

mod basic_tour;
mod heart_inspection;
mod shake_hand;
mod talk_to_fathy;

pub use basic_tour::{BasicTourModule, TourType};
pub use heart_inspection::HeartInspectionModule;
pub use shake_hand::ShakeHandModule;
pub use talk_to_fathy::TalkToFathyModule;

use fathy_protocols::ApiModule;

/// All robot function modules, in catalogue order.
pub fn modules() -> Vec<Box<dyn ApiModule>> {
    vec![
        Box::new(BasicTourModule::new()),
        Box::new(HeartInspectionModule::new()),
        Box::new(ShakeHandModule::new()),
        Box::new(TalkToFathyModule::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_paths() {
        let paths: Vec<String> = modules().iter().map(|m| m.manifest().path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                "robot_functions/basic_tour",
                "robot_functions/heart_inspection",
                "robot_functions/shake_hand",
                "robot_functions/talk_to_fathy",
            ]
        );
    }

    #[test]
    fn test_catalogue_manifests_are_valid() {
        for module in modules() {
            assert!(module.manifest().validate().is_ok());
        }
    }
}
