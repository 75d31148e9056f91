use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Position out of range: {position} (catalog size {size})")]
    PositionOutOfRange { position: usize, size: usize },

    #[error("Invalid matrix shape: expected {expected} scores, got {actual}")]
    MatrixShape { expected: usize, actual: usize },

    #[error("Catalog/matrix mismatch: {titles} titles, matrix of size {matrix}")]
    CatalogMismatch { titles: usize, matrix: usize },

    #[error("Title not in catalog: {0}")]
    TitleNotIndexed(String),

    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
