/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn config_schema() {
    use measure::UnitsConfig;
    use schemars::schema_for;
    use serde_json::json;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(UnitsConfig)).unwrap(),
    )
    .unwrap();

    let builtin = serde_json::from_str::<serde_json::Value>(
        include_str!("../config/units.json"),
    )
    .unwrap();
    schema.validate(&builtin).expect("schema validation failed");

    let examples = [
        json!({}),
        json!({ "weight": { "default": "g" } }),
        json!({ "distance": { "format": { "decimals": 2 } } }),
    ];
    examples.iter().for_each(|example| {
        schema.validate(example).expect("schema validation failed");
    });

    assert!(!schema.is_valid(
        &json!({ "distance": { "format": { "decimals": "two" } } })
    ));
}
