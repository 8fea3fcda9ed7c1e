//! Read → segment → render pipeline

/// State segmentation
pub mod segment;

pub use segment::{Segment, Segmenter, sample_spacing};

use crate::error::PlotResult;
use crate::reader;
use crate::render::{self, RenderOptions};
use log::info;
use std::path::{Path, PathBuf};

/// Result of one pipeline run
#[derive(Debug)]
pub struct ProcessingStats {
    /// Samples parsed from the input
    pub samples: usize,
    /// State segments drawn
    pub segments: usize,
    /// Path actually written
    pub output: PathBuf,
}

/// Read a CSV log, shade its state runs and save the chart
pub fn plot_file<P, Q>(input: P, output: Q, options: &RenderOptions) -> PlotResult<ProcessingStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let log = reader::from_file(input.as_ref())?;

    let segmenter = Segmenter::new(log.steps());
    let segments = segmenter.segment(&log);
    info!(
        "{} samples, {} segments, spacing {:.4}",
        log.len(),
        segments.len(),
        segmenter.spacing()
    );

    let output = render::render_to_file(&log, &segments, output, options)?;

    Ok(ProcessingStats {
        samples: log.len(),
        segments: segments.len(),
        output,
    })
}
