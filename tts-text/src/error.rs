use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("chunk limit must be at least 1, got {0}")]
    InvalidLimit(usize),
}

pub type Result<T> = std::result::Result<T, ChunkError>;
