use thiserror::Error;

/// Why a single fetch against the weather API did not produce an observation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The wrapped error never carries the request URL, which holds the API key.
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("no weather data found for the requested location")]
    NotFound,

    #[error("weather API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode weather API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// The geolocation capability could not produce a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The user refused access. `FixedLocation` never reports it; hosts with a
    /// real permission prompt do.
    #[error("location access denied")]
    Denied,

    #[error("location service unavailable")]
    Unavailable,
}
