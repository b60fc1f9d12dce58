use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("history is empty: start a game first")]
    EmptyHistory,

    #[error("grid has {actual} cells, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("palette has no colors")]
    EmptyPalette,

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let err = GameError::OutOfBounds { row: 9, col: 2, size: 9 };
        assert_eq!(err.to_string(), "cell (9, 2) is outside a 9x9 grid");
    }

    #[test]
    fn dimension_mismatch_display() {
        let err = GameError::DimensionMismatch { expected: 81, actual: 80 };
        assert_eq!(err.to_string(), "grid has 80 cells, expected 81");
    }
}
