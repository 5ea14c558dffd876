//! Error types for the prime search client.

use thiserror::Error;

/// Errors that stop a trigger before anything is rendered.
///
/// Application-level failures (`status != "ok"`) are not errors; they are
/// rendered through the sink as `Error: <message>`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Reply from {url} is not valid JSON: {source} (body: {preview})")]
    Decode {
        url: String,
        preview: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Reply from {url} is JSON null, which has no status to read")]
    NullReply { url: String },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Input {raw:?} is not a number")]
    InvalidInput { raw: String },

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
