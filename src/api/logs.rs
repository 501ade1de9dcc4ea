use super::{
    address, get, offset, DefaultValue, Encoding, Operation, Param, ParamKind, CHAIN_ID,
    END_BLOCK, PAGE, START_BLOCK,
};

/// Topic slots accepted by `getLogs`.
pub const MAX_TOPICS: usize = 4;

const BY_ADDRESS: &[Param] = &[
    address("The address to get logs for."),
    CHAIN_ID,
    START_BLOCK,
    END_BLOCK,
    PAGE,
    offset(0),
];

const BY_TOPICS: &[Param] = &[
    Param::required(
        "fromBlock",
        "fromblock",
        ParamKind::Integer,
        "The starting block number.",
    ),
    Param::required(
        "toBlock",
        "toblock",
        ParamKind::Integer,
        "The ending block number.",
    ),
    Param::required(
        "topics",
        "topic",
        ParamKind::NumericArray,
        "Up to four topics, sent as topic0 through topic3.",
    )
    .encoded(Encoding::Indexed(MAX_TOPICS)),
    Param::optional(
        "topicOperator",
        "topicoperator",
        ParamKind::Enum(&["and", "or"]),
        "How the topics are combined.",
    )
    .with_default(DefaultValue::Text("and")),
    CHAIN_ID,
    PAGE,
    offset(0),
];

pub const OPERATIONS: &[Operation] = &[
    get(
        "getEventLogsByAddress",
        "Get event logs by address.",
        "logs",
        "getLogs",
        BY_ADDRESS,
    ),
    get(
        "getEventLogsByTopics",
        "Get event logs filtered by up to four topics.",
        "logs",
        "getLogs",
        BY_TOPICS,
    ),
];
