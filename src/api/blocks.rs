use super::{block_no, get, DefaultValue, Operation, Param, ParamKind, CHAIN_ID};

const BY_BLOCK_NO: &[Param] = &[block_no(), CHAIN_ID];

const BY_TIMESTAMP: &[Param] = &[
    Param::required(
        "timestamp",
        "timestamp",
        ParamKind::Integer,
        "The Unix timestamp in seconds.",
    ),
    Param::optional(
        "closest",
        "closest",
        ParamKind::Enum(&["before", "after"]),
        "Whether to return the closest block before or after the timestamp.",
    )
    .with_default(DefaultValue::Text("before")),
    CHAIN_ID,
];

pub const OPERATIONS: &[Operation] = &[
    get(
        "getBlockAndUncleRewardByBlockNo",
        "Get block and uncle rewards by block number.",
        "block",
        "getblockreward",
        BY_BLOCK_NO,
    ),
    get(
        "getBlockTxCountByBlockNo",
        "Get the number of transactions in a block.",
        "block",
        "getblocktxnscount",
        BY_BLOCK_NO,
    ),
    get(
        "getBlockCountdownByBlockNo",
        "Get the estimated time remaining until a block is mined.",
        "block",
        "getblockcountdown",
        BY_BLOCK_NO,
    ),
    get(
        "getBlockNumberByTimestamp",
        "Get the block number mined closest to a timestamp.",
        "block",
        "getblocknobytime",
        BY_TIMESTAMP,
    ),
];
