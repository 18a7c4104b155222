/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A tile coordinate lies outside the grid.
    #[error("tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// A terrain character in a scenario could not be mapped to a tile type.
    #[error("unknown terrain symbol '{symbol}' at row {row}, column {column}")]
    UnknownTerrain {
        /// The offending character.
        symbol: char,
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        column: usize,
    },

    /// A scenario file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: std::path::PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A scenario file could not be parsed.
    #[error("invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
