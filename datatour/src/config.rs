//! Tour configuration.

use std::path::{Path, PathBuf};

/// Where the tour reads and writes, and how it seeds its random array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// CSV loaded into the second frame.
    pub input_csv: PathBuf,
    /// Destination of the concatenated and extended frame.
    pub output_csv: PathBuf,
    /// SQLite file, created if absent.
    pub database: PathBuf,
    /// Seed for the random array; `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Log every SQL statement at INFO.
    pub echo_sql: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from("data/data.csv"),
            output_csv: PathBuf::from("df_csv.csv"),
            database: PathBuf::from("data.sqlite"),
            seed: None,
            echo_sql: true,
        }
    }
}

impl TourConfig {
    /// The default file names placed under `dir`, reading `input_csv`.
    pub fn in_dir(dir: impl AsRef<Path>, input_csv: impl Into<PathBuf>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_csv: input_csv.into(),
            output_csv: dir.join("df_csv.csv"),
            database: dir.join("data.sqlite"),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
