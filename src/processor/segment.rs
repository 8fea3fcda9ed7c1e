use crate::core::SampleLog;
use std::ops::Range;

/// Maximal run of consecutive samples sharing one state label
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Shared state label
    state: String,
    /// First sample index
    start: usize,
    /// One past the last sample index
    end: usize,
    /// Left edge on the step axis
    x_start: f64,
    /// Right edge on the step axis, half a spacing past the last step
    x_end: f64,
}

impl Segment {
    /// State label of the run
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Sample indices covered by the run
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of samples in the run
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Segments always hold at least one sample
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Horizontal extent `(x_start, x_end)`
    pub fn span(&self) -> (f64, f64) {
        (self.x_start, self.x_end)
    }
}

/// Mean difference between consecutive steps, `1.0` with fewer than two steps
pub fn sample_spacing(steps: &[f64]) -> f64 {
    if steps.len() < 2 {
        return 1.0;
    }

    let total: f64 = steps.windows(2).map(|w| w[1] - w[0]).sum();
    let dx = total / (steps.len() - 1) as f64;

    if dx.is_finite() { dx } else { 1.0 }
}

/// Collapses a state column into shaded spans
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    /// Nominal sample spacing
    spacing: f64,
}

impl Segmenter {
    /// Create a segmenter with the spacing of `steps`
    pub fn new(steps: &[f64]) -> Self {
        Self::with_spacing(sample_spacing(steps))
    }

    /// Create a segmenter with an explicit spacing
    pub fn with_spacing(spacing: f64) -> Self {
        Segmenter { spacing }
    }

    /// Nominal sample spacing
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Split the log into runs of equal state
    pub fn segment(&self, log: &SampleLog) -> Vec<Segment> {
        let steps = log.steps();
        let states = log.states();
        let half = 0.5 * self.spacing;

        let mut segments = Vec::new();
        if states.is_empty() {
            return segments;
        }

        let mut start = 0;
        for i in 1..=states.len() {
            if i < states.len() && states[i] == states[start] {
                continue;
            }

            segments.push(Segment {
                state: states[start].clone(),
                start,
                end: i,
                x_start: steps[start],
                x_end: steps[i - 1] + half,
            });
            start = i;
        }

        segments
    }
}
