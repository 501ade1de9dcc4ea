//! Turns validated tool input into the query string and body of one call.

use super::{Encoding, Operation, Param, ParamKind};
use crate::error::ApiError;
use serde_json::{Map, Value};

pub type Args = Map<String, Value>;

const UNDEFINED: &str = "undefined";

/// Everything needed to issue one request, minus the base URL and API key.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub operation: &'static Operation,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl PreparedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub fn build(operation: &'static Operation, args: &Args) -> Result<PreparedRequest, ApiError> {
    // Resolve everything first so a missing parameter fails before any output.
    let resolved = operation
        .params
        .iter()
        .map(|param| resolve(operation, param, args).map(|value| (param, value)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut query = Vec::with_capacity(resolved.len() + 4);
    for (param, value) in resolved.iter().filter(|(p, _)| p.encoding == Encoding::Leading) {
        if let Some(value) = value {
            query.push((param.key.to_string(), render(value)));
        }
    }
    query.push(("module".to_string(), operation.module.to_string()));
    query.push(("action".to_string(), operation.action.to_string()));

    for (param, value) in &resolved {
        match (param.encoding, value) {
            (Encoding::Leading | Encoding::BodyOnly, _) => {}
            (Encoding::Plain | Encoding::OmitWhenAbsent, Some(value)) => {
                query.push((param.key.to_string(), render(value)));
            }
            (Encoding::Plain | Encoding::OmitWhenAbsent, None) => {}
            (Encoding::UndefinedWhenAbsent, value) => {
                let rendered = value.as_ref().map_or_else(|| UNDEFINED.to_string(), render);
                query.push((param.key.to_string(), rendered));
            }
            (Encoding::Indexed(slots), value) => {
                let items = value.as_ref().and_then(Value::as_array);
                for slot in 0..slots {
                    let rendered = items
                        .and_then(|items| items.get(slot))
                        .map_or_else(|| UNDEFINED.to_string(), render);
                    query.push((format!("{}{}", param.key, slot), rendered));
                }
            }
        }
    }

    query.extend(
        operation
            .fixed
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    );

    let body = if operation.body.is_empty() {
        None
    } else {
        let mut body = Map::new();
        for field in operation.body {
            let value = resolved
                .iter()
                .find(|(p, _)| p.name == field.param)
                .and_then(|(_, v)| v.clone());
            // Unset optional fields are dropped rather than sent as null.
            if let Some(value) = value {
                body.insert(field.key.to_string(), value);
            }
        }
        Some(Value::Object(body))
    };

    Ok(PreparedRequest {
        operation,
        query,
        body,
    })
}

fn resolve(
    operation: &'static Operation,
    param: &'static Param,
    args: &Args,
) -> Result<Option<Value>, ApiError> {
    let supplied = args.get(param.name).filter(|v| !v.is_null());
    let value = match supplied {
        Some(value) => value.clone(),
        None if param.required => {
            return Err(ApiError::MissingParameter {
                operation: operation.name,
                parameter: param.name,
            })
        }
        None => match param.default {
            Some(default) => default.to_json(),
            None => return Ok(None),
        },
    };

    if !kind_matches(param.kind, &value) {
        return Err(ApiError::InvalidParameter {
            operation: operation.name,
            parameter: param.name,
            expected: expected(param.kind),
        });
    }
    Ok(Some(value))
}

fn kind_matches(kind: ParamKind, value: &Value) -> bool {
    match kind {
        ParamKind::String => value.is_string(),
        ParamKind::Integer => value.is_i64() || value.is_u64(),
        ParamKind::StringArray => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
        ParamKind::NumericArray => value.as_array().is_some_and(|items| {
            items
                .iter()
                .all(|item| item.is_string() || item.is_i64() || item.is_u64())
        }),
        ParamKind::Enum(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
    }
}

fn expected(kind: ParamKind) -> &'static str {
    match kind {
        ParamKind::String => "a string",
        ParamKind::Integer => "an integer",
        ParamKind::StringArray => "an array of strings",
        ParamKind::NumericArray => "an array of integers or strings",
        ParamKind::Enum(_) => "one of the allowed values",
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{catalog, find, DefaultValue};
    use serde_json::json;

    fn args(value: Value) -> Args {
        value.as_object().cloned().unwrap_or_default()
    }

    fn op(name: &str) -> &'static Operation {
        find(name).unwrap()
    }

    fn sample(kind: ParamKind) -> Value {
        match kind {
            ParamKind::String => json!("0x0"),
            ParamKind::Integer => json!(7),
            ParamKind::StringArray => json!(["0x1", "0x2"]),
            ParamKind::NumericArray => json!(["0x1", 2]),
            ParamKind::Enum(values) => json!(values[0]),
        }
    }

    fn required_args(operation: &Operation) -> Args {
        operation
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| (p.name.to_string(), sample(p.kind)))
            .collect()
    }

    #[test]
    fn balance_query_is_ordered_like_the_provider_expects() {
        let req = build(
            op("getEthBalance"),
            &args(json!({ "address": "0xabc", "chainId": 1 })),
        )
        .unwrap();
        let pairs: Vec<(&str, &str)> = req
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("chainid", "1"),
                ("module", "account"),
                ("action", "balance"),
                ("address", "0xabc"),
                ("tag", "latest"),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn every_required_parameter_is_enforced() {
        for operation in catalog() {
            for missing in operation.params.iter().filter(|p| p.required) {
                let mut input = required_args(operation);
                input.remove(missing.name);
                match build(operation, &input) {
                    Err(ApiError::MissingParameter { operation: o, parameter }) => {
                        assert_eq!(o, operation.name);
                        assert_eq!(parameter, missing.name);
                    }
                    other => panic!("{}.{}: {:?}", operation.name, missing.name, other),
                }
            }
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let err = build(op("getContractABI"), &args(json!({ "address": null }))).unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { parameter: "address", .. }));
    }

    #[test]
    fn unset_optionals_use_declared_defaults() {
        for operation in catalog() {
            let req = build(operation, &required_args(operation)).unwrap();
            for param in operation.params.iter().filter(|p| p.encoding != crate::api::Encoding::BodyOnly) {
                let Some(default) = param.default else { continue };
                let expected = match default {
                    DefaultValue::Integer(n) => n.to_string(),
                    DefaultValue::Text(s) => s.to_string(),
                };
                assert_eq!(
                    req.query_value(param.key),
                    Some(expected.as_str()),
                    "{}.{}",
                    operation.name,
                    param.name
                );
            }
        }
    }

    #[test]
    fn tx_list_defaults() {
        let req = build(op("getListOfTxs"), &args(json!({ "address": "0xabc" }))).unwrap();
        assert_eq!(req.query_value("chainid"), Some("1"));
        assert_eq!(req.query_value("startblock"), Some("0"));
        assert_eq!(req.query_value("endblock"), Some("99999999"));
        assert_eq!(req.query_value("page"), Some("1"));
        assert_eq!(req.query_value("offset"), Some("0"));
        assert_eq!(req.query_value("sort"), Some("asc"));
    }

    #[test]
    fn holder_list_and_holdings_have_their_own_offsets() {
        let list = build(op("getTokenHolderList"), &args(json!({ "contractAddress": "0xt" }))).unwrap();
        assert_eq!(list.query_value("offset"), Some("10"));
        let holdings = build(op("getAddressErc20TokenHolding"), &args(json!({ "address": "0xa" }))).unwrap();
        assert_eq!(holdings.query_value("offset"), Some("100"));
    }

    #[test]
    fn arrays_are_comma_joined_in_order() {
        let req = build(
            op("getEthBalanceMulti"),
            &args(json!({ "addresses": ["0xc", "0xa", "0xb"] })),
        )
        .unwrap();
        assert_eq!(req.query_value("address"), Some("0xc,0xa,0xb"));

        let req = build(
            op("getContractsCreators"),
            &args(json!({ "contractAddresses": ["0x1", "0x2"], "chainId": 10 })),
        )
        .unwrap();
        assert_eq!(req.query_value("contractaddresses"), Some("0x1,0x2"));
        assert_eq!(req.query_value("chainid"), Some("10"));
    }

    #[test]
    fn unset_token_contract_is_sent_as_undefined() {
        for name in [
            "getErc20TransfersByAddress",
            "getErc721TransfersByAddress",
            "getErc1155TransfersByAddress",
        ] {
            let req = build(op(name), &args(json!({ "address": "0xabc" }))).unwrap();
            assert_eq!(req.query_value("contractaddress"), Some("undefined"), "{name}");
        }
        let req = build(
            op("getErc20TransfersByAddress"),
            &args(json!({ "address": "0xabc", "contractAddress": "0xtoken" })),
        )
        .unwrap();
        assert_eq!(req.query_value("contractaddress"), Some("0xtoken"));
    }

    #[test]
    fn nft_transfer_tools_share_the_erc721_action() {
        let input = args(json!({ "address": "0xabc" }));
        let erc721 = build(op("getErc721TransfersByAddress"), &input).unwrap();
        let erc1155 = build(op("getErc1155TransfersByAddress"), &input).unwrap();

        assert_eq!(erc1155.query_value("action"), Some("tokennfttx"));
        assert_eq!(erc721.query, erc1155.query);
    }

    #[test]
    fn topics_accept_integers_and_strings() {
        let req = build(
            op("getEventLogsByTopics"),
            &args(json!({ "fromBlock": 1, "toBlock": 2, "topics": [255, "0xt1"] })),
        )
        .unwrap();
        assert_eq!(req.query_value("topic0"), Some("255"));
        assert_eq!(req.query_value("topic1"), Some("0xt1"));

        let err = build(
            op("getEventLogsByTopics"),
            &args(json!({ "fromBlock": 1, "toBlock": 2, "topics": [true] })),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { parameter: "topics", .. }));
    }

    #[test]
    fn topics_fill_four_slots() {
        let req = build(
            op("getEventLogsByTopics"),
            &args(json!({ "fromBlock": 1, "toBlock": 2, "topics": ["0xt0", "0xt1"] })),
        )
        .unwrap();
        let keys: Vec<&str> = req.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "chainid", "module", "action", "fromblock", "toblock", "topic0", "topic1",
                "topic2", "topic3", "topicoperator", "page", "offset",
            ]
        );
        assert_eq!(req.query_value("topic0"), Some("0xt0"));
        assert_eq!(req.query_value("topic1"), Some("0xt1"));
        assert_eq!(req.query_value("topic2"), Some("undefined"));
        assert_eq!(req.query_value("topic3"), Some("undefined"));
        assert_eq!(req.query_value("topicoperator"), Some("and"));
    }

    #[test]
    fn source_verification_posts_a_body_and_keeps_address_on_query() {
        let req = build(
            op("verifySolidityCode"),
            &args(json!({
                "sourceCode": "contract A {}",
                "constructorArgs": "",
                "contractAddress": "0xabc",
                "contractName": "A",
                "compilerVersion": "v0.8.24+commit.e11b9ed9"
            })),
        )
        .unwrap();
        assert_eq!(req.query_value("action"), Some("verifysourcecode"));
        assert_eq!(req.query_value("contractaddress"), Some("0xabc"));
        assert_eq!(req.query_value("sourceCode"), None);
        assert_eq!(
            req.body,
            Some(json!({
                "codeformat": "solidity-single-file",
                "sourceCode": "contract A {}",
                "constructorArguements": "",
                "contractaddress": "0xabc",
                "contractname": "A",
                "compilerversion": "v0.8.24+commit.e11b9ed9"
            }))
        );
    }

    #[test]
    fn proxy_verification_duplicates_fields_and_drops_unset_body_values() {
        let req = build(op("verifyProxyContract"), &args(json!({ "contractAddress": "0xp" }))).unwrap();
        assert_eq!(req.query_value("address"), Some("0xp"));
        assert_eq!(req.query_value("expectedimplementation"), Some("undefined"));
        assert_eq!(req.body, Some(json!({ "address": "0xp" })));
    }

    #[test]
    fn wrong_types_are_rejected() {
        let err = build(op("getBlockAndUncleRewardByBlockNo"), &args(json!({ "blockNo": "12" }))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { parameter: "blockNo", .. }));

        let err = build(
            op("getBlockNumberByTimestamp"),
            &args(json!({ "timestamp": 1, "closest": "nearest" })),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { parameter: "closest", .. }));
    }
}
