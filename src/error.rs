/// All errors that can occur while building a league debrief.
#[derive(thiserror::Error, Debug)]
pub enum DebriefError {
    /// The request did not complete before the configured deadline.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The request never reached upstream (DNS, TLS, connection reset, etc.).
    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Upstream (or the relay in front of it) answered with a non-success status.
    #[error("unexpected status {status} for {url}")]
    Upstream {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The league has no teams to rank.
    #[error("no standings data available")]
    NoData,

    /// The requested gameweek is outside the played range.
    #[error("gameweek {gameweek} is outside 1..={current}")]
    InvalidGameweek { gameweek: u32, current: u32 },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl DebriefError {
    /// HTTP status carried by an upstream failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            DebriefError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to a person, with a hint to retry.
    pub fn user_message(&self) -> &'static str {
        match self {
            DebriefError::Timeout { .. } => "Request timed out. Please try again.",
            DebriefError::Network { .. } => {
                "Network error. Please check your connection and try again."
            }
            DebriefError::Upstream { status, .. } => match status {
                404 => "FPL API endpoint not found. Please try again later.",
                429 => "Too many requests. Please wait a moment and try again.",
                500 => "FPL API server error. Please try again later.",
                502 => "Bad gateway error. Please try again later.",
                503 => "FPL API is currently unavailable. Please try again later.",
                504 => "Gateway timeout. Please try again later.",
                _ => "Failed to fetch data from FPL API. Please try again.",
            },
            DebriefError::NoData => "No standings data available for this league.",
            DebriefError::InvalidGameweek { .. } => {
                "That gameweek has not been played yet. Please pick another."
            }
            DebriefError::Decode { .. } | DebriefError::ClientBuild(_) => {
                "An unexpected error occurred. Please try again."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DebriefError>;
