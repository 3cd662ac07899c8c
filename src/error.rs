// Error types shared across the library. The binary turns any of these
// into a one-line message on stderr and exit code 1.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between argument validation and the
/// remote API call. Precondition failures (`MissingArgument`,
/// `AlreadyPresent`, `NotFound`) are raised before any write request is
/// sent, so a rejected mutation never reaches the API.
#[derive(Debug, Error)]
pub enum Error {
    /// A required identifier was absent or empty. The payload names the
    /// missing argument, e.g. "instance ID" or "security group ID".
    #[error("the {0} is not specified")]
    MissingArgument(&'static str),

    /// None of --add, --remove or --list was given.
    #[error("the operation is not specified")]
    NoOperationSpecified,

    /// Add was requested for a group the instance already has.
    #[error("the instance already has security group {0}")]
    AlreadyPresent(String),

    /// Remove was requested for a group the instance does not have.
    #[error("security group {0} is not attached to the instance")]
    NotFound(String),

    /// The HTTP request itself failed (connection, DNS, timeout).
    #[error("request to the compute API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The compute API answered with a non-success status.
    #[error("compute API returned {status}: {body}")]
    Remote { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
