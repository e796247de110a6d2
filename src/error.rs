use crate::config::ConfigError;

pub const EXIT_REQUEST: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;

#[derive(Debug)]
pub enum SubmitError {
    Config(ConfigError),
    Http { status: u16, body: String },
    Request(String),
    NonJson(String),
    Unexpected(String),
}

impl SubmitError {
    /// Process exit status: 2 for configuration problems, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            SubmitError::Config(_) => EXIT_CONFIG,
            _ => EXIT_REQUEST,
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Config(err) => write!(f, "{err}"),
            SubmitError::Http { status, body } => write!(f, "HTTPError {status}: {body}"),
            SubmitError::Request(msg) => write!(f, "Request failed: {msg}"),
            SubmitError::NonJson(body) => write!(f, "Non-JSON response: {body}"),
            SubmitError::Unexpected(body) => write!(f, "Unexpected response: {body}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ConfigError> for SubmitError {
    fn from(err: ConfigError) -> Self {
        SubmitError::Config(err)
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Request(format!("Failed to serialize payload: {err}"))
    }
}
