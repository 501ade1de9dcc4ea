//! Etherscan v2 operation catalog.
//!
//! Every supported provider call is described once as a static [`Operation`].
//! The descriptors drive both request construction (see [`request`]) and the
//! tool input schemas, so the two can never disagree on a default.

pub mod accounts;
pub mod blocks;
pub mod contracts;
pub mod logs;
pub mod request;
pub mod tokens;
pub mod transactions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// JSON type a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    StringArray,
    /// Integers, or strings for values too wide for a JSON number.
    NumericArray,
    Enum(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Integer(i64),
    Text(&'static str),
}

impl DefaultValue {
    pub fn to_json(self) -> serde_json::Value {
        match self {
            DefaultValue::Integer(n) => serde_json::Value::from(n),
            DefaultValue::Text(s) => serde_json::Value::from(s),
        }
    }
}

/// How a parameter lands on the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Emitted ahead of `module` and `action`. Used for the chain selector.
    Leading,
    /// `key=value`, arrays comma-joined.
    Plain,
    /// Left off the query string when unset.
    OmitWhenAbsent,
    /// Unset values are written as the literal `undefined`.
    UndefinedWhenAbsent,
    /// Array spread over `key0..key{n-1}`; missing slots are `undefined`.
    Indexed(usize),
    /// Only sent in the POST body.
    BodyOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Field name in the tool input.
    pub name: &'static str,
    /// Key on the wire.
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub encoding: Encoding,
    pub description: &'static str,
}

impl Param {
    pub const fn required(
        name: &'static str,
        key: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            key,
            kind,
            required: true,
            default: None,
            encoding: Encoding::Plain,
            description,
        }
    }

    pub const fn optional(
        name: &'static str,
        key: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            key,
            kind,
            required: false,
            default: None,
            encoding: Encoding::OmitWhenAbsent,
            description,
        }
    }

    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            encoding: Encoding::Plain,
            ..self
        }
    }

    pub const fn encoded(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }
}

/// Maps a JSON body key to the tool field it is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyField {
    pub key: &'static str,
    pub param: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub module: &'static str,
    pub action: &'static str,
    pub params: &'static [Param],
    /// Constant pairs appended after the parameters, e.g. `tag=latest`.
    pub fixed: &'static [(&'static str, &'static str)],
    pub body: &'static [BodyField],
}

impl Operation {
    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }
}

pub const DEFAULT_END_BLOCK: i64 = 99_999_999;

pub(crate) const CHAIN_ID: Param = Param::optional(
    "chainId",
    "chainid",
    ParamKind::Integer,
    "The chain ID (default: 1 for Ethereum Mainnet).",
)
.with_default(DefaultValue::Integer(1))
.encoded(Encoding::Leading);

pub(crate) const START_BLOCK: Param = Param::optional(
    "startBlock",
    "startblock",
    ParamKind::Integer,
    "The starting block number.",
)
.with_default(DefaultValue::Integer(0));

pub(crate) const END_BLOCK: Param = Param::optional(
    "endBlock",
    "endblock",
    ParamKind::Integer,
    "The ending block number.",
)
.with_default(DefaultValue::Integer(DEFAULT_END_BLOCK));

pub(crate) const PAGE: Param = Param::optional(
    "page",
    "page",
    ParamKind::Integer,
    "The page number for pagination.",
)
.with_default(DefaultValue::Integer(1));

pub(crate) const SORT: Param = Param::optional(
    "sort",
    "sort",
    ParamKind::String,
    "The sorting preference (asc or desc).",
)
.with_default(DefaultValue::Text("asc"));

pub(crate) const fn offset(default: i64) -> Param {
    Param::optional(
        "offset",
        "offset",
        ParamKind::Integer,
        "The number of records per page.",
    )
    .with_default(DefaultValue::Integer(default))
}

pub(crate) const fn address(description: &'static str) -> Param {
    Param::required("address", "address", ParamKind::String, description)
}

pub(crate) const fn contract_address(description: &'static str) -> Param {
    Param::required(
        "contractAddress",
        "contractaddress",
        ParamKind::String,
        description,
    )
}

pub(crate) const fn tx_hash() -> Param {
    Param::required(
        "txHash",
        "txhash",
        ParamKind::String,
        "The transaction hash.",
    )
}

pub(crate) const fn block_no() -> Param {
    Param::required("blockNo", "blockno", ParamKind::Integer, "The block number.")
}

pub(crate) const fn get(
    name: &'static str,
    description: &'static str,
    module: &'static str,
    action: &'static str,
    params: &'static [Param],
) -> Operation {
    Operation {
        name,
        description,
        method: HttpMethod::Get,
        module,
        action,
        params,
        fixed: &[],
        body: &[],
    }
}

pub(crate) const LATEST_TAG: &[(&str, &str)] = &[("tag", "latest")];

/// Every operation, grouped by namespace in a stable order.
pub fn catalog() -> impl Iterator<Item = &'static Operation> {
    accounts::OPERATIONS
        .iter()
        .chain(contracts::OPERATIONS)
        .chain(transactions::OPERATIONS)
        .chain(blocks::OPERATIONS)
        .chain(logs::OPERATIONS)
        .chain(tokens::OPERATIONS)
}

pub fn find(name: &str) -> Option<&'static Operation> {
    catalog().find(|op| op.name == name)
}
