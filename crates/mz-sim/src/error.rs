use mz_core::{MzError, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] MzError),

    #[error("supplied grid is {got_rows}×{got_cols}, configuration expects {rows}×{cols}")]
    GridDimensionMismatch {
        rows:     usize,
        cols:     usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("start cell {0} is not a passage in the supplied grid")]
    StartNotPassage(Position),
}

pub type SimResult<T> = Result<T, SimError>;
