/// Utility enum that covers all possible errors while starting the platform
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// Template file exists but is not a well-formed JSON object.
    #[error("Template parse error: {source}")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },

    /// Template parsed but lacks a field the platform reads, e.g. `clusterConfiguration.name`.
    #[error("Template is missing required field: {0}")]
    MissingFieldError(String),
}
