use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a snowflake id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to parse a duration string such as `10m` or `1h`
    #[error("Failed to parse duration from String '{value}'")]
    ParseDuration {
        /// The string value that failed to parse
        value: String,
    },
}
