use super::{
    address, contract_address, get, BodyField, DefaultValue, Encoding, HttpMethod, Operation,
    Param, ParamKind, CHAIN_ID,
};

const fn body_only(name: &'static str, key: &'static str, description: &'static str) -> Param {
    Param::required(name, key, ParamKind::String, description).encoded(Encoding::BodyOnly)
}

const fn code_format(formats: &'static [&'static str]) -> Param {
    Param::optional(
        "codeFormat",
        "codeformat",
        ParamKind::Enum(formats),
        "The submission format of the source code.",
    )
    .with_default(DefaultValue::Text(formats[0]))
    .encoded(Encoding::BodyOnly)
}

const fn field(key: &'static str, param: &'static str) -> BodyField {
    BodyField { key, param }
}

const SOURCE_BODY: &[BodyField] = &[
    field("codeformat", "codeFormat"),
    field("sourceCode", "sourceCode"),
    // Provider's spelling.
    field("constructorArguements", "constructorArgs"),
    field("contractaddress", "contractAddress"),
    field("contractname", "contractName"),
    field("compilerversion", "compilerVersion"),
];

const SOLIDITY_FORMATS: &[&str] = &["solidity-single-file", "solidity-standard-json-input"];
const VYPER_FORMATS: &[&str] = &["vyper-single-file", "vyper-standard-json-input"];

const SOLIDITY_SOURCE: &[Param] = &[
    CHAIN_ID,
    code_format(SOLIDITY_FORMATS),
    body_only(
        "sourceCode",
        "sourceCode",
        "The Solidity source code, or the standard JSON input.",
    ),
    body_only(
        "constructorArgs",
        "constructorArguements",
        "ABI-encoded constructor arguments, if any.",
    ),
    contract_address("The address the contract is deployed at."),
    body_only(
        "contractName",
        "contractname",
        "The contract name, e.g. contracts/Token.sol:Token for JSON input.",
    ),
    body_only(
        "compilerVersion",
        "compilerversion",
        "The compiler version, e.g. v0.8.24+commit.e11b9ed9.",
    ),
];

const VYPER_SOURCE: &[Param] = &[
    CHAIN_ID,
    code_format(VYPER_FORMATS),
    body_only(
        "sourceCode",
        "sourceCode",
        "The Vyper source code, or the standard JSON input.",
    ),
    body_only(
        "constructorArgs",
        "constructorArguements",
        "ABI-encoded constructor arguments, if any.",
    ),
    contract_address("The address the contract is deployed at."),
    body_only("contractName", "contractname", "The contract name."),
    body_only(
        "compilerVersion",
        "compilerversion",
        "The compiler version, e.g. vyper:0.3.10.",
    ),
];

const PROXY: &[Param] = &[
    CHAIN_ID,
    Param::required(
        "contractAddress",
        "address",
        ParamKind::String,
        "The proxy contract address.",
    ),
    Param::optional(
        "expectedImplementation",
        "expectedimplementation",
        ParamKind::String,
        "The implementation address the proxy is expected to forward to.",
    )
    .encoded(Encoding::UndefinedWhenAbsent),
];

const PROXY_BODY: &[BodyField] = &[
    field("address", "contractAddress"),
    field("expectedimplementation", "expectedImplementation"),
];

const CONTRACT: &[Param] = &[address("The contract address."), CHAIN_ID];

const CREATORS: &[Param] = &[
    Param::required(
        "contractAddresses",
        "contractaddresses",
        ParamKind::StringArray,
        "Up to five contract addresses to look up.",
    ),
    CHAIN_ID,
];

const VERIFY_STATUS: &[Param] = &[
    Param::required(
        "guid",
        "guid",
        ParamKind::String,
        "The GUID returned by a verification submission.",
    ),
    CHAIN_ID,
];

const fn post(
    name: &'static str,
    description: &'static str,
    action: &'static str,
    params: &'static [Param],
    body: &'static [BodyField],
) -> Operation {
    Operation {
        name,
        description,
        method: HttpMethod::Post,
        module: "contract",
        action,
        params,
        fixed: &[],
        body,
    }
}

pub const OPERATIONS: &[Operation] = &[
    get(
        "getContractABI",
        "Get the ABI of a verified contract.",
        "contract",
        "getabi",
        CONTRACT,
    ),
    get(
        "getContractSourceCode",
        "Get the source code of a verified contract.",
        "contract",
        "getsourcecode",
        CONTRACT,
    ),
    get(
        "getContractsCreators",
        "Get the creator address and creation transaction of contracts.",
        "contract",
        "getcontractcreation",
        CREATORS,
    ),
    post(
        "verifySolidityCode",
        "Submit Solidity source code for contract verification.",
        "verifysourcecode",
        SOLIDITY_SOURCE,
        SOURCE_BODY,
    ),
    post(
        "verifyVyperCode",
        "Submit Vyper source code for contract verification.",
        "verifysourcecode",
        VYPER_SOURCE,
        SOURCE_BODY,
    ),
    get(
        "getSourceCodeVerificationStatus",
        "Check the status of a source code verification submission.",
        "contract",
        "checkverifystatus",
        VERIFY_STATUS,
    ),
    post(
        "verifyProxyContract",
        "Submit a proxy contract for verification against its implementation.",
        "verifyproxycontract",
        PROXY,
        PROXY_BODY,
    ),
];
