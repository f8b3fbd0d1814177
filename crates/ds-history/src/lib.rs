//! `ds-history` — historical activity observations and how they are loaded.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`record`]    | `HistoricalRecord`                                       |
//! | [`dataset`]   | `HistoryDataset`, `Columns`                              |
//! | [`catalogue`] | `ActivityCatalogue` (sorted codes + display names)       |
//! | [`loader`]    | `load_history_csv`, `load_history_reader`                |
//! | [`error`]     | `HistoryError`, `HistoryResult<T>`                       |
//!
//! The dataset is read-only once built.  Everything downstream (preference
//! model, environment) borrows it during construction and keeps only derived
//! tables.

pub mod catalogue;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod record;


pub use catalogue::ActivityCatalogue;
pub use dataset::{Columns, HistoryDataset};
pub use error::{HistoryError, HistoryResult};
pub use loader::{load_history_csv, load_history_reader};
pub use record::HistoricalRecord;
