use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Envy(#[from] envy::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("Could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Failed to start logging: {0}")]
    Logger(String),
}

impl Error {
    /// Builds a transport error, keeping timeouts and refused connections apart from the rest.
    pub fn transport(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_owned(),
                timeout,
            }
        } else if err.is_connect() {
            Error::Connect {
                url: url.to_owned(),
                source: err,
            }
        } else {
            Error::Http(err)
        }
    }

    /// True when the service could not be reached at all, as opposed to answering wrongly.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Timeout { .. } | Error::Connect { .. } | Error::Http(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Error::Timeout { .. } => "timeout",
            Error::Connect { .. } => "connect",
            Error::Http(_) => "http",
            Error::Json(_) => "decode",
            Error::Envy(_) | Error::Url(_) | Error::InvalidConfig(_) => "config",
            Error::Logger(_) => "logger",
        }
    }
}
