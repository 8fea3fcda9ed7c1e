//! Log readers

/// CSV log reader
pub mod csv_log;

pub use csv_log::CsvLogReader;

use crate::core::SampleLog;
use crate::error::PlotResult;
use std::path::Path;

/// Read a CSV log file into a sample log
pub fn from_file<P: AsRef<Path>>(path: P) -> PlotResult<SampleLog> {
    CsvLogReader::from_path(path)?.read_log()
}
