//! # datatour
//!
//! A guided walk through three data layers, printed as a transcript:
//! numeric arrays ([`numeric`]), labeled frames ([`frame`]) and a small
//! relational store over SQLite ([`store`]).
//!
//! [`run`] executes the steps in order against a [`TourConfig`]; the
//! `datatour` binary runs it with the default configuration.

pub use datatour_core as numeric;
pub use datatour_frame as frame;
pub use datatour_store as store;

pub mod config;
pub mod error;
pub mod tour;

pub use config::TourConfig;
pub use error::{Result, TourError};

use std::io::Write;

/// Glob-import convenience: `use datatour::prelude::*;`
pub mod prelude {
    pub use datatour_core::prelude::*;
    pub use datatour_frame::{ColumnData, CsvOptions, DataFrame, Label, Series, Value};
    pub use datatour_store::{ColumnDef, Engine, EngineOptions, MetaData, SqlType, Table};
}

/// Run the array, frame and relational steps in order, writing the
/// transcript to `out`. The first failure stops the tour.
pub fn run(config: &TourConfig, out: &mut impl Write) -> Result<tour::Report> {
    let arrays = tour::arrays::run(config, out)?;
    let frames = tour::frames::run(config, out)?;
    let relational = tour::relational::run(config, out)?;
    Ok(tour::Report {
        arrays,
        frames,
        relational,
    })
}
