#![warn(missing_docs)]

//! # plotlog: state-shaded speed charts from CSV logs
//!
//! Reads a `step,speed[,state]` CSV log and renders speed over steps with a
//! colored background band for every contiguous run of equal state.
//!
//! ## Pipeline
//!
//! - **Read** - lenient CSV parsing, optional header row, malformed rows skipped
//! - **Segment** - run-length encode the state column into shaded spans
//! - **Render** - line chart, bands, fixed legend; PNG, JPEG, BMP or SVG
//! - **Simulate** - generate logs from a motor controller state machine
//!
//! ## Quick Start
//!
//! ```ignore
//! use plotlog::processor::Segmenter;
//! use plotlog::render::{self, RenderOptions};
//!
//! let log = plotlog::reader::from_file("log.csv")?;
//! let segments = Segmenter::new(log.steps()).segment(&log);
//! render::render_to_file(&log, &segments, "log.png", &RenderOptions::default())?;
//! ```

/// Core log types
pub mod core;
/// Error types and exit codes
pub mod error;
/// CSV log readers
pub mod reader;
/// State segmentation and the plotting pipeline
pub mod processor;
/// Chart rendering
pub mod render;
/// Motor controller log simulation
pub mod sim;

pub use crate::core::{Sample, SampleLog};
pub use error::{PlotError, PlotResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
