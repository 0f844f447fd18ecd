use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Input file contains no rows")]
    EmptyInput,

    #[error("Location table error: {0}")]
    LocationTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
