//! Core log types

/// Sample and sample log types
pub mod sample;

pub use sample::{Sample, SampleLog};
