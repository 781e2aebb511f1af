use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("unknown deposit tier: {0} PZM")]
    UnknownTier(u64),
}
