/// Failures raised while building or executing an Etherscan request.
///
/// Upstream failures that the provider reports inside a JSON body are not
/// represented here; those bodies are returned to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("missing required parameter `{parameter}` for {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("parameter `{parameter}` for {operation} must be {expected}")]
    InvalidParameter {
        operation: &'static str,
        parameter: &'static str,
        expected: &'static str,
    },

    /// The wrapped error never carries the request URL, which holds the key.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport(err.without_url())
    }
}
