//! The three steps of the tour.
//!
//! Each step prints its results to the given writer and returns a report
//! of the values it computed.

pub mod arrays;
pub mod frames;
pub mod relational;

pub use arrays::ArraysReport;
pub use frames::FramesReport;
pub use relational::RelationalReport;

/// Everything the tour computed.
#[derive(Debug, Clone)]
pub struct Report {
    pub arrays: ArraysReport,
    pub frames: FramesReport,
    pub relational: RelationalReport,
}
