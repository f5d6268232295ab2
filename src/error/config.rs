use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the documentation for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value could not be interpreted.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending environment variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
