use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for domain construction, map validation, and YAML IO.
pub enum DomainError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("grid row {row} has width {found}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol '{symbol}' at row {row}, column {column}")]
    UnknownCellSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("duplicate location '{location}' in delivery map")]
    DuplicateLocation { location: String },

    #[error("path from '{from}' to '{to}' references an undeclared location")]
    UnknownPathEndpoint { from: String, to: String },

    #[error("location '{location}' is not declared in the delivery map")]
    UnknownLocation { location: String },
}
