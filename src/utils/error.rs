use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value for {name}: {source}")]
    InvalidHeaderError {
        name: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClientError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_))
    }

    /// Renders the error with its whole source chain, e.g.
    /// `HTTP request failed: error sending request: connection refused`.
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = err.source();
        }
        message
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::Http(_) => "Check that the server is running and reachable",
            ClientError::InvalidUrl(_) => "Check the id and the --base-url option",
            ClientError::Io(_) => "Retry the command; check the connection if it keeps failing",
            ClientError::InvalidHeaderError { .. } => {
                "Header values must be visible ASCII characters"
            }
            ClientError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
