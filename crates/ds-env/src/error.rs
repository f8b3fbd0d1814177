use ds_core::CoreError;
use ds_history::HistoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("{0}")]
    Config(#[from] CoreError),

    #[error("history contains no activities; the action space would be empty")]
    NoActivities,

    #[error("episode finished after {num_slots} slots; call reset() before stepping again")]
    EpisodeFinished { num_slots: usize },

    #[error("failed to load history: {0}")]
    History(#[from] HistoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EnvResult<T> = Result<T, EnvError>;
