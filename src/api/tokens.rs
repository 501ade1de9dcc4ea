use super::{
    address, block_no, contract_address, get, offset, Operation, Param, CHAIN_ID, LATEST_TAG,
    PAGE,
};

const TOKEN: &[Param] = &[
    contract_address("The contract address of the ERC20 token."),
    CHAIN_ID,
];

const TOKEN_BALANCE: &[Param] = &[
    contract_address("The contract address of the ERC20 token."),
    address("The address to check balance for."),
    CHAIN_ID,
];

const SUPPLY_HISTORY: &[Param] = &[
    contract_address("The contract address of the ERC20 token."),
    block_no(),
    CHAIN_ID,
];

const BALANCE_HISTORY: &[Param] = &[
    contract_address("The contract address of the ERC20 token."),
    address("The address to check balance for."),
    block_no(),
    CHAIN_ID,
];

const HOLDER_LIST: &[Param] = &[
    contract_address("The contract address of the ERC20 token."),
    CHAIN_ID,
    PAGE,
    offset(10),
];

const HOLDINGS: &[Param] = &[
    address("The address to list token holdings for."),
    CHAIN_ID,
    PAGE,
    offset(100),
];

const INVENTORY: &[Param] = &[
    address("The address to list token holdings for."),
    contract_address("The contract address of the ERC721 collection."),
    CHAIN_ID,
    PAGE,
    offset(100),
];

pub const OPERATIONS: &[Operation] = &[
    get(
        "getErc20TokenSupply",
        "Get the total supply of an ERC20 token.",
        "token",
        "tokensupply",
        TOKEN,
    ),
    Operation {
        fixed: LATEST_TAG,
        ..get(
            "getErc20TokenBalance",
            "Get the balance of an ERC20 token for a specific address.",
            "token",
            "tokenbalance",
            TOKEN_BALANCE,
        )
    },
    get(
        "getErc20TokenSupplyHistory",
        "Get the total supply of an ERC20 token at a given block.",
        "stats",
        "tokensupplyhistory",
        SUPPLY_HISTORY,
    ),
    get(
        "getErc20TokenBalanceHistory",
        "Get the ERC20 token balance of an address at a given block.",
        "account",
        "tokenbalancehistory",
        BALANCE_HISTORY,
    ),
    get(
        "getTokenHolderList",
        "Get a list of token holders for an ERC20 token.",
        "token",
        "tokenholderlist",
        HOLDER_LIST,
    ),
    get(
        "getTokenHolderCount",
        "Get the number of holders of an ERC20 token.",
        "token",
        "tokenholdercount",
        TOKEN,
    ),
    get(
        "getTokenInfo",
        "Get project information and social links of a token.",
        "token",
        "tokeninfo",
        TOKEN,
    ),
    get(
        "getAddressErc20TokenHolding",
        "Get the ERC20 tokens and amounts held by an address.",
        "account",
        "addresstokenbalance",
        HOLDINGS,
    ),
    get(
        "getAddressErc721TokenHolding",
        "Get the ERC721 tokens and amounts held by an address.",
        "account",
        "addresstokennftbalance",
        HOLDINGS,
    ),
    get(
        "getAddressErc721TokenInventory",
        "Get the ERC721 token inventory of an address for a collection.",
        "account",
        "addresstokennftinventory",
        INVENTORY,
    ),
];
