use crate::model::Platform;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Coarse failure taxonomy shared by all platform adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not complete (DNS, refused connection, timeout).
    Network,
    /// The request completed but the upstream reported an application-level failure.
    Upstream,
    /// The response body does not match the expected schema.
    Malformed,
    /// The handle/username does not exist on that platform.
    NotFound,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("[{platform}] Request to {requested_url} could not complete: {source}")]
    Network {
        platform: Platform,
        requested_url: String,

        #[source]
        source: reqwest::Error,
    },

    #[error("[{platform}] Upstream reported failure: {message}")]
    Upstream { platform: Platform, message: String },

    #[error("[{platform}] Malformed response: {message}")]
    Malformed { platform: Platform, message: String },

    #[error("[{platform}] No such user '{handle}'")]
    NotFound { platform: Platform, handle: String },
}

impl Error {
    pub fn platform(&self) -> Platform {
        use Error::*;
        match self {
            Network { platform, .. }
            | Upstream { platform, .. }
            | Malformed { platform, .. }
            | NotFound { platform, .. } => *platform,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            Network { .. } => ErrorKind::Network,
            Upstream { .. } => ErrorKind::Upstream,
            Malformed { .. } => ErrorKind::Malformed,
            NotFound { .. } => ErrorKind::NotFound,
        }
    }
}
