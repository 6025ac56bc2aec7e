/// Common `Result` type of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The parameters do not describe a valid minimizer scheme.
    /// No instance is created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// The minimum of a window holding no kmers was requested.
    #[error("window is empty; admit a kmer before querying the minimum")]
    EmptyWindow,

    /// Parameters could not be parsed from json.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Reasons a set of parameters is rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("number of kmers in the window cannot be 0")]
    ZeroWindow,

    #[error("kmer length k must be at least 1")]
    ZeroK,

    #[error("start offset {start} is past the end of the sequence (len {len})")]
    StartOutOfBounds { start: usize, len: usize },

    /// Positions are reported as `u32`.
    #[error("sequence of length {0} does not fit 32-bit positions")]
    SequenceTooLong(usize),
}
