/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("invalid edge role names: {reason}")]
    InvalidEdgeNames { reason: String },
}
