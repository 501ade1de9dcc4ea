use super::{get, tx_hash, Operation, Param, CHAIN_ID};

const BY_TX_HASH: &[Param] = &[tx_hash(), CHAIN_ID];

pub const OPERATIONS: &[Operation] = &[
    get(
        "getContractExecutionStatus",
        "Get the status of a contract execution transaction.",
        "transaction",
        "getstatus",
        BY_TX_HASH,
    ),
    get(
        "getTransactionReceiptStatus",
        "Get the receipt status of a transaction.",
        "transaction",
        "gettxreceiptstatus",
        BY_TX_HASH,
    ),
];
