use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history parse error on row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HistoryResult<T> = Result<T, HistoryError>;
