//! Errors surfaced by the tour

use thiserror::Error;

use datatour_core::CoreError;
use datatour_frame::FrameError;
use datatour_store::StoreError;

pub type Result<T> = std::result::Result<T, TourError>;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("array step failed: {0}")]
    Core(#[from] CoreError),

    #[error("frame step failed: {0}")]
    Frame(#[from] FrameError),

    #[error("relational step failed: {0}")]
    Store(#[from] StoreError),

    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}
