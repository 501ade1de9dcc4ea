use super::{
    address, get, offset, tx_hash, DefaultValue, Encoding, Operation, Param, ParamKind, CHAIN_ID,
    END_BLOCK, LATEST_TAG, PAGE, SORT, START_BLOCK,
};

const TOKEN_CONTRACT: Param = Param::optional(
    "contractAddress",
    "contractaddress",
    ParamKind::String,
    "The contract address of the token to filter by.",
)
.encoded(Encoding::UndefinedWhenAbsent);

const BALANCE: &[Param] = &[address("The address to check balance for."), CHAIN_ID];

const BALANCE_MULTI: &[Param] = &[
    Param::required(
        "addresses",
        "address",
        ParamKind::StringArray,
        "An array of addresses to check balances for.",
    ),
    CHAIN_ID,
];

const TX_RANGE: &[Param] = &[
    address("The address to get transactions for."),
    CHAIN_ID,
    START_BLOCK,
    END_BLOCK,
    PAGE,
    offset(0),
    SORT,
];

const BY_TX_HASH: &[Param] = &[tx_hash(), CHAIN_ID];

const BLOCK_RANGE: &[Param] = &[
    Param::required(
        "startBlock",
        "startblock",
        ParamKind::Integer,
        "The starting block number.",
    ),
    Param::required(
        "endBlock",
        "endblock",
        ParamKind::Integer,
        "The ending block number.",
    ),
    CHAIN_ID,
    PAGE,
    offset(0),
    SORT,
];

const TOKEN_TRANSFERS: &[Param] = &[
    address("The address to get token transfers for."),
    TOKEN_CONTRACT,
    CHAIN_ID,
    START_BLOCK,
    END_BLOCK,
    PAGE,
    offset(0),
    SORT,
];

const FUNDED_BY: &[Param] = &[address("The address to look up."), CHAIN_ID];

const MINED_BLOCKS: &[Param] = &[
    address("The validator address."),
    CHAIN_ID,
    Param::optional(
        "blockType",
        "blocktype",
        ParamKind::Enum(&["blocks", "uncles"]),
        "The block type: blocks for canonical blocks or uncles for uncle blocks.",
    )
    .with_default(DefaultValue::Text("blocks")),
    PAGE,
    offset(0),
];

const WITHDRAWALS: &[Param] = &[
    address("The address to get withdrawals for."),
    CHAIN_ID,
    PAGE,
    offset(0),
    SORT,
];

pub const OPERATIONS: &[Operation] = &[
    Operation {
        fixed: LATEST_TAG,
        ..get(
            "getEthBalance",
            "Get Ether balance for a single address.",
            "account",
            "balance",
            BALANCE,
        )
    },
    Operation {
        fixed: LATEST_TAG,
        ..get(
            "getEthBalanceMulti",
            "Get Ether balance for multiple addresses in a single call.",
            "account",
            "balancemulti",
            BALANCE_MULTI,
        )
    },
    get(
        "getListOfTxs",
        "Get a list of normal transactions for an address.",
        "account",
        "txlist",
        TX_RANGE,
    ),
    get(
        "getInternalTxs",
        "Get a list of internal transactions for an address.",
        "account",
        "txlistinternal",
        TX_RANGE,
    ),
    get(
        "getInternalTxsByTxHash",
        "Get internal transactions executed within a transaction.",
        "account",
        "txlistinternal",
        BY_TX_HASH,
    ),
    get(
        "getInternalTxsByBlockRange",
        "Get internal transactions within a block range.",
        "account",
        "txlistinternal",
        BLOCK_RANGE,
    ),
    get(
        "getErc20TransfersByAddress",
        "Get ERC20 token transfer events by address.",
        "account",
        "tokentx",
        TOKEN_TRANSFERS,
    ),
    get(
        "getErc721TransfersByAddress",
        "Get ERC721 token transfer events by address.",
        "account",
        "tokennfttx",
        TOKEN_TRANSFERS,
    ),
    get(
        "getErc1155TransfersByAddress",
        "Get ERC1155 token transfer events by address.",
        "account",
        // Same action as ERC721; upstream ignores the token standard here.
        "tokennfttx",
        TOKEN_TRANSFERS,
    ),
    get(
        "getAddressFundedBy",
        "Get the address and transaction that first funded an address.",
        "account",
        "fundedby",
        FUNDED_BY,
    ),
    get(
        "getBlocksValidatedByAddress",
        "Get blocks validated by an address.",
        "account",
        "getminedblocks",
        MINED_BLOCKS,
    ),
    get(
        "getBeaconChainWithdrawals",
        "Get beacon chain withdrawals made to an address.",
        "account",
        "txsBeaconWithdrawal",
        WITHDRAWALS,
    ),
];
