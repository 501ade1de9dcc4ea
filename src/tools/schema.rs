//! JSON Schema for tool input, and the argument pass the host runs before a
//! handler sees anything.

use crate::api::{Encoding, Operation, ParamKind};
use jsonschema::Validator;
use serde_json::{json, Map, Value};

/// Builds the `inputSchema` of an operation's tool, one property per parameter.
pub fn input_schema(operation: &Operation) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in operation.params {
        let mut property = match param.kind {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Integer => json!({ "type": "integer" }),
            ParamKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            ParamKind::NumericArray => {
                json!({ "type": "array", "items": { "type": ["integer", "string"] } })
            }
            ParamKind::Enum(values) => json!({ "type": "string", "enum": values }),
        };
        if let Encoding::Indexed(slots) = param.encoding {
            property["maxItems"] = json!(slots);
        }
        if let Some(default) = param.default {
            property["default"] = default.to_json();
        }
        property["description"] = json!(param.description);

        properties.insert(param.name.to_string(), property);
        if param.required {
            required.push(param.name);
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

/// Compiles a tool's input schema once, at registration.
pub fn compile(schema: &Value) -> Result<Validator, String> {
    jsonschema::validator_for(schema).map_err(|e| e.to_string())
}

/// Fills defaults, drops unknown properties and explicit nulls, then checks
/// the result against the compiled schema.
pub fn validate(
    validator: &Validator,
    schema: &Value,
    arguments: Value,
) -> Result<Map<String, Value>, String> {
    let prepared = match arguments {
        Value::Null => Value::Object(Map::new()),
        Value::Object(input) => Value::Object(with_defaults(schema, input)),
        other => other,
    };

    if let Some(error) = validator.iter_errors(&prepared).next() {
        let path = error.instance_path.to_string();
        return Err(if path.is_empty() {
            error.to_string()
        } else {
            format!("{}: {}", path.trim_start_matches('/'), error)
        });
    }

    match prepared {
        Value::Object(map) => Ok(map),
        _ => Err("arguments must be an object".to_string()),
    }
}

fn with_defaults(schema: &Value, mut input: Map<String, Value>) -> Map<String, Value> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Map::new();
    };

    let mut output = Map::new();
    for (name, property) in properties {
        match input.remove(name).filter(|v| !v.is_null()) {
            Some(value) => {
                output.insert(name.clone(), value);
            }
            None => {
                if let Some(default) = property.get("default") {
                    output.insert(name.clone(), default.clone());
                }
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{catalog, find, request};

    fn check(operation: &str, arguments: Value) -> Result<Map<String, Value>, String> {
        let schema = input_schema(find(operation).unwrap());
        let validator = compile(&schema).unwrap();
        validate(&validator, &schema, arguments)
    }

    #[test]
    fn schema_mirrors_parameters() {
        let op = find("getErc20TransfersByAddress").unwrap();
        let schema = input_schema(op);

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["address"]));
        assert_eq!(schema["properties"]["chainId"]["default"], 1);
        assert_eq!(schema["properties"]["endBlock"]["default"], 99_999_999);
        assert_eq!(schema["properties"]["sort"]["default"], "asc");
        assert!(schema["properties"]["contractAddress"].get("default").is_none());
        assert_eq!(
            schema["properties"]["address"]["description"],
            "The address to get token transfers for."
        );
    }

    #[test]
    fn enums_arrays_and_topic_limits_are_described() {
        let topics = input_schema(find("getEventLogsByTopics").unwrap());
        assert_eq!(topics["properties"]["topics"]["type"], "array");
        assert_eq!(
            topics["properties"]["topics"]["items"]["type"],
            json!(["integer", "string"])
        );
        assert_eq!(topics["properties"]["topics"]["maxItems"], 4);
        assert_eq!(topics["properties"]["topicOperator"]["enum"], json!(["and", "or"]));

        let solidity = input_schema(find("verifySolidityCode").unwrap());
        assert_eq!(
            solidity["properties"]["codeFormat"]["default"],
            "solidity-single-file"
        );
    }

    #[test]
    fn validated_defaults_match_what_the_request_builder_sends() {
        for op in catalog() {
            let schema = input_schema(op);
            let minimal: Map<String, Value> = op
                .params
                .iter()
                .filter(|p| p.required)
                .map(|p| {
                    let value = match p.kind {
                        ParamKind::Integer => json!(5),
                        ParamKind::StringArray => json!(["0xa"]),
                        ParamKind::NumericArray => json!(["0xa", 3]),
                        ParamKind::Enum(values) => json!(values[0]),
                        ParamKind::String => json!("0xa"),
                    };
                    (p.name.to_string(), value)
                })
                .collect();

            let validator = compile(&schema).unwrap();
            let validated = validate(&validator, &schema, Value::Object(minimal.clone())).unwrap();
            let from_schema = request::build(op, &validated).unwrap();
            let from_client = request::build(op, &minimal).unwrap();
            assert_eq!(from_schema, from_client, "{}", op.name);
        }
    }

    #[test]
    fn every_catalog_schema_compiles() {
        for op in catalog() {
            assert!(compile(&input_schema(op)).is_ok(), "{}", op.name);
        }
    }

    #[test]
    fn validate_applies_defaults_and_strips_unknown_fields() {
        let args = check(
            "getListOfTxs",
            json!({ "address": "0xabc", "page": 3, "bogus": true, "sort": null }),
        )
        .unwrap();

        assert_eq!(args["address"], "0xabc");
        assert_eq!(args["page"], 3);
        assert_eq!(args["offset"], 0);
        assert_eq!(args["sort"], "asc");
        assert!(!args.contains_key("bogus"));
    }

    #[test]
    fn validate_rejects_bad_input() {
        let logs = "getEventLogsByTopics";

        let err = check(logs, json!({ "fromBlock": 1, "toBlock": 2 })).unwrap_err();
        assert!(err.contains("topics"), "{err}");

        assert!(check(
            logs,
            json!({ "fromBlock": 1, "toBlock": 2, "topics": ["a", "b", "c", "d", "e"] }),
        )
        .unwrap_err()
        .starts_with("topics"));

        let err = check(logs, json!({ "fromBlock": "1", "toBlock": 2, "topics": ["a"] })).unwrap_err();
        assert!(err.starts_with("fromBlock"), "{err}");

        let err = check(
            logs,
            json!({ "fromBlock": 1, "toBlock": 2, "topics": ["a"], "topicOperator": "xor" }),
        )
        .unwrap_err();
        assert!(err.starts_with("topicOperator"), "{err}");

        let err = check(logs, json!({ "fromBlock": 1, "toBlock": 2, "topics": [true] })).unwrap_err();
        assert!(err.starts_with("topics/0"), "{err}");

        assert!(check(logs, json!([1, 2])).is_err());
    }

    #[test]
    fn topics_accept_integers_and_strings() {
        let args = check(
            "getEventLogsByTopics",
            json!({ "fromBlock": 1, "toBlock": 2, "topics": [255, "0xddf2"] }),
        )
        .unwrap();
        assert_eq!(args["topics"], json!([255, "0xddf2"]));
    }

    #[test]
    fn null_arguments_mean_empty_object() {
        let schema = json!({ "type": "object", "properties": {}, "required": [] });
        let validator = compile(&schema).unwrap();
        assert!(validate(&validator, &schema, Value::Null).unwrap().is_empty());
    }
}
