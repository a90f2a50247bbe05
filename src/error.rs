use std::fmt;

/// Sentinel shown in place of a reply when no credential is configured
pub const MISSING_API_KEY_TEXT: &str = "SEA_LION_API_KEY is not set";

/// Prefix shown in front of every other rendered failure
pub const FAILURE_PREFIX: &str = "API call failed:";

/// Custom error type for review operations
/// Implements Clone so results can be compared and re-rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No credential configured for the completion endpoint
    MissingApiKey
  , /// Transport-level failure (connection refused, DNS, TLS...)
    HttpError(String)
  , /// API answered with a non-success status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Request exceeded the configured timeout
    Timeout(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "{}", MISSING_API_KEY_TEXT)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, body } => {
              write!(f, "API error: status {}: {}", status, body)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::Timeout(msg) => {
              write!(f, "Request timed out: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout(e.to_string())
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::ParseError(e.to_string())
    }
}

/// Flatten a completion reply into the text shown to the user.
///
/// Success yields the reply itself. A missing credential yields the bare
/// sentinel, every other failure is prefixed with [`FAILURE_PREFIX`].
pub fn render(reply: crate::CompletionReply) -> String
{   match reply
    {   Ok(text) => text
      , Err(Error::MissingApiKey) => MISSING_API_KEY_TEXT.to_string()
      , Err(e) => format!("{} {}", FAILURE_PREFIX, e)
    }
}

/// True when `text` is a rendered failure rather than a model reply
pub fn is_failure_text(text: &str) -> bool
{   let text = text.trim_start();
    text.starts_with(FAILURE_PREFIX) || text == MISSING_API_KEY_TEXT
}
