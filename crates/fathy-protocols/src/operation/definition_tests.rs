use super::*;
use serde_json::json;

#[test]
fn test_definition_new() {
    let def = OperationDefinition::new("execute", "Start a tour");
    assert_eq!(def.name, "execute");
    assert_eq!(def.description, "Start a tour");
    assert!(def.parameters.is_empty());
}

#[test]
fn test_is_private() {
    assert!(OperationDefinition::new("_helper", "").is_private());
    assert!(OperationDefinition::new("__init", "").is_private());
    assert!(!OperationDefinition::new("execute", "").is_private());
}

#[test]
fn test_apply_defaults_fills_defaults() {
    let def = OperationDefinition::new("execute", "")
        .with_parameter(ParameterSpec::optional("type", "standard"));

    let prepared = def.apply_defaults(InputMap::new());
    assert_eq!(prepared.get_str("type"), Some("standard"));
}

#[test]
fn test_apply_defaults_keeps_supplied_value() {
    let def = OperationDefinition::new("execute", "")
        .with_parameter(ParameterSpec::optional("type", "standard"));

    let mut input = InputMap::new();
    input.insert("type", json!("quick"));
    let prepared = def.apply_defaults(input);
    assert_eq!(prepared.get_str("type"), Some("quick"));
}

#[test]
fn test_apply_defaults_passes_undeclared_keys() {
    let def = OperationDefinition::new("execute", "");
    let mut input = InputMap::new();
    input.insert("extra", json!(1));

    let prepared = def.apply_defaults(input);
    assert_eq!(prepared.get("extra"), Some(&json!(1)));
}

#[test]
fn test_parameter_spec_serialize() {
    let spec = ParameterSpec::optional("intensity", "normal").with_description("Grip strength");
    let value = serde_json::to_value(&spec).unwrap();
    assert_eq!(value["name"], "intensity");
    assert_eq!(value["default"], "normal");
    assert_eq!(value["description"], "Grip strength");
}

#[test]
fn test_parameter_spec_without_default() {
    let spec: ParameterSpec = serde_json::from_value(json!({"name": "target"})).unwrap();
    assert!(spec.default.is_none());

    let def = OperationDefinition::new("execute", "").with_parameter(spec);
    assert!(def.apply_defaults(InputMap::new()).is_empty());
}
